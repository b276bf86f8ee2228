//! Curve and key parameters for the command-line tool.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! command-line flags and environment variables.

use std::path::{Path, PathBuf};

use anyhow::{bail, ensure, Context};
use eccrypt_algorithms::ec::arith::{is_prime, next_prime};
use eccrypt_algorithms::EllipticCurve;
use serde::{Deserialize, Serialize};
use structopt::StructOpt;

/// Effective parameters of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CliConfig {
    pub a: u64,
    pub b: u64,
    pub q: u64,
    pub private_key: u64,
    pub nonce: u64,
    pub window: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            a: 9,
            b: 7,
            q: 4093,
            private_key: 5,
            nonce: 15,
            window: 20,
        }
    }
}

/// Flags that override the configuration file.
#[derive(Debug, Default, StructOpt)]
pub struct ConfigOpts {
    #[structopt(long = "config", help = "JSON file with curve and key parameters.", env = "ECCRYPT_CONFIG")]
    pub config: Option<PathBuf>,
    #[structopt(short = "a", long = "a", help = "Curve coefficient a.", env = "ECCRYPT_A")]
    pub a: Option<u64>,
    #[structopt(short = "b", long = "b", help = "Curve coefficient b.", env = "ECCRYPT_B")]
    pub b: Option<u64>,
    #[structopt(short = "q", long = "q", help = "Prime modulus of the field.", env = "ECCRYPT_Q")]
    pub q: Option<u64>,
    #[structopt(long = "private-key", help = "Private key scalar.", env = "ECCRYPT_PRIVATE_KEY")]
    pub private_key: Option<u64>,
    #[structopt(long = "nonce", help = "Encryption nonce r.", env = "ECCRYPT_NONCE")]
    pub nonce: Option<u64>,
    #[structopt(long = "window", help = "Koblitz window size K.", env = "ECCRYPT_WINDOW")]
    pub window: Option<u64>,
}

impl CliConfig {
    /// Read a configuration file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Could not open configuration file {}.", path.display()))?;
        let config = serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("Could not parse configuration file {}.", path.display()))?;
        Ok(config)
    }

    /// Defaults, then the file named by `opts`, then the individual flags.
    pub fn from_opts(opts: &ConfigOpts) -> anyhow::Result<Self> {
        let mut config = match &opts.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply(opts);
        Ok(config)
    }

    fn apply(&mut self, opts: &ConfigOpts) {
        let overrides = [
            (&mut self.a, opts.a),
            (&mut self.b, opts.b),
            (&mut self.q, opts.q),
            (&mut self.private_key, opts.private_key),
            (&mut self.nonce, opts.nonce),
            (&mut self.window, opts.window),
        ];
        for (field, value) in overrides {
            if let Some(v) = value {
                *field = v;
            }
        }
    }

    /// Check the parameters and build the curve.
    pub fn validate(&self) -> anyhow::Result<EllipticCurve> {
        if !is_prime(self.q) {
            match next_prime(self.q) {
                Some(p) => bail!("q = {} is not prime; the next prime is {}.", self.q, p),
                None => bail!("q = {} is not prime.", self.q),
            }
        }
        ensure!(self.window >= 2, "The Koblitz window must be at least 2, got {}.", self.window);
        ensure!(self.private_key != 0, "The private key must be non-zero.");
        let curve = EllipticCurve::new(self.a, self.b, self.q)?;
        curve.ensure_non_singular()?;
        Ok(curve)
    }

    /// Check the private key against the order `n` of the base point. A
    /// multiple of `n` gives the identity as public key and leaves
    /// plaintexts unmasked.
    pub fn validate_private_key(&self, order: u64) -> anyhow::Result<()> {
        ensure!(
            self.private_key % order != 0,
            "The private key {} is a multiple of the base point order {}.",
            self.private_key,
            order
        );
        Ok(())
    }
}
