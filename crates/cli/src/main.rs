use std::path::PathBuf;

use anyhow::Context;
use eccrypt_algorithms::{EllipticCurve, GeneratorPolicy};
use eccrypt_codec::{koblitz_table, Encoding, MessageCodec};
use eccrypt_pke::{format_ciphertexts, parse_ciphertexts, ElGamal};
use log::{info, warn};
use rand::Rng;
use structopt::{clap::AppSettings, StructOpt};

mod config;

use config::{CliConfig, ConfigOpts};

#[derive(StructOpt)]
struct Encrypt {
    #[structopt(long = "message", help = "Text to encrypt.")]
    message: String,
    #[structopt(long = "out", help = "File to write the ciphertexts to.")]
    out: Option<PathBuf>,
    #[structopt(
        long = "random-nonce",
        help = "Draw the nonce at random instead of using the configured one."
    )]
    random_nonce: bool,
}

#[derive(StructOpt)]
struct Decrypt {
    #[structopt(long = "input", help = "File with ciphertexts written by `encrypt`.")]
    input: PathBuf,
}

#[derive(StructOpt)]
enum Command {
    #[structopt(
        name = "check",
        about = "Validate the curve parameters and print the base point with its order."
    )]
    Check,
    #[structopt(name = "points", about = "Print the Koblitz point of every table character.")]
    Points,
    #[structopt(name = "encrypt", about = "Encode and encrypt a message into a file.")]
    Encrypt(Encrypt),
    #[structopt(name = "decrypt", about = "Decrypt a ciphertext file and decode the message.")]
    Decrypt(Decrypt),
}

#[derive(StructOpt)]
#[structopt(
    about = "Toy elliptic-curve ElGamal over small prime fields.",
    author = "eccrypt developers"
)]
struct Eccrypt {
    #[structopt(flatten)]
    config: ConfigOpts,
    #[structopt(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let app = Eccrypt::clap()
        .setting(AppSettings::ArgRequiredElseHelp)
        .global_setting(AppSettings::ColoredHelp);
    let matches = app.get_matches();
    let args = Eccrypt::from_clap(&matches);

    let config = CliConfig::from_opts(&args.config)?;
    let curve = config.validate()?;
    info!("Using curve {}.", curve);

    match args.command {
        Command::Check => handle_check(&config, curve),
        Command::Points => handle_points(&config, &curve),
        Command::Encrypt(enc) => handle_encrypt(&config, curve, enc),
        Command::Decrypt(dec) => handle_decrypt(&config, curve, dec),
    }
}

fn build_cipher(config: &CliConfig, curve: EllipticCurve) -> anyhow::Result<ElGamal> {
    let cipher = ElGamal::from_curve(curve, &GeneratorPolicy::default())
        .context("Could not find a base point on the curve.")?;
    config.validate_private_key(cipher.order())?;
    Ok(cipher)
}

fn handle_check(config: &CliConfig, curve: EllipticCurve) -> anyhow::Result<()> {
    let cipher = build_cipher(config, curve)?;
    println!("Curve: {}", cipher.curve());
    println!("Discriminant: {}", cipher.curve().discriminant());
    println!("Base point: {}", cipher.generator());
    println!("Order: {}", cipher.order());
    Ok(())
}

fn handle_points(config: &CliConfig, curve: &EllipticCurve) -> anyhow::Result<()> {
    for (c, point) in koblitz_table(curve, config.window)? {
        match point {
            Some(p) => println!("{:?} -> {}", c, p),
            None => println!("{:?} -> no point", c),
        }
    }
    Ok(())
}

fn handle_encrypt(config: &CliConfig, curve: EllipticCurve, enc: Encrypt) -> anyhow::Result<()> {
    let cipher = build_cipher(config, curve)?;
    let (public, _private) = cipher.generate_keypair(config.private_key)?;

    let codec = MessageCodec::new(cipher.curve(), Encoding::Koblitz { window: config.window });
    let encoded = codec.encode(&enc.message)?;
    for skipped in &encoded.skipped {
        warn!(
            "Character {:?} at position {} has no point and was left out.",
            skipped.character, skipped.index
        );
    }

    let nonce = if enc.random_nonce {
        cipher.random_scalar(&mut rand::thread_rng())
    } else {
        config.nonce
    };
    let ciphertexts = cipher.encrypt_points(&encoded.points, &public, nonce)?;
    let text = format_ciphertexts(&ciphertexts)?;

    let out = match enc.out {
        Some(path) => path,
        None => {
            let first = enc.message.chars().next().unwrap_or('m');
            let digits: u64 = rand::thread_rng().gen_range(100_000..100_000_000_000_000);
            PathBuf::from(format!("{}{}.txt", first, digits))
        }
    };
    std::fs::write(&out, text).with_context(|| format!("Could not write {}.", out.display()))?;
    println!("Public key: {}", public.point());
    println!(
        "Wrote {} ciphertexts to {} ({} characters skipped).",
        ciphertexts.len(),
        out.display(),
        encoded.skipped.len()
    );
    Ok(())
}

fn handle_decrypt(config: &CliConfig, curve: EllipticCurve, dec: Decrypt) -> anyhow::Result<()> {
    let cipher = build_cipher(config, curve)?;
    let (_public, private) = cipher.generate_keypair(config.private_key)?;

    let text = std::fs::read_to_string(&dec.input)
        .with_context(|| format!("Could not read {}.", dec.input.display()))?;
    let ciphertexts = parse_ciphertexts(&text)?;
    info!("Read {} ciphertexts from {}.", ciphertexts.len(), dec.input.display());

    let points = cipher.decrypt_points(&ciphertexts, &private)?;
    for p in &points {
        println!("{}", p);
    }
    let codec = MessageCodec::new(cipher.curve(), Encoding::Koblitz { window: config.window });
    println!("Message: {}", codec.decode(&points)?);
    Ok(())
}
