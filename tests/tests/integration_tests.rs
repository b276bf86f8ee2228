//! End-to-end tests: encode, encrypt, write, read, decrypt, decode

use eccrypt::prelude::*;
use eccrypt_tests::{demo_cipher, demo_curve, seeded_rng, small_curve};

const HI_CIPHERTEXT: &str = "((3083, 2393), (313, 2390)) ((3083, 2393), (3606, 3062))";

#[test]
fn test_demo_base_point() {
    let cipher = demo_cipher();
    assert_eq!(*cipher.generator(), CurvePoint::new(1, 181));
    assert_eq!(cipher.order(), 4093);
}

#[test]
fn test_hi_known_answer() {
    let cipher = demo_cipher();
    let (public, private) = cipher.generate_keypair(5).unwrap();
    assert_eq!(*public.point(), CurvePoint::new(2176, 3625));

    let codec = MessageCodec::new(cipher.curve(), Encoding::default());
    let encoded = codec.encode("HI").unwrap();
    assert!(encoded.is_complete());

    let ciphertexts = cipher.encrypt_points(&encoded.points, &public, 15).unwrap();
    let text = format_ciphertexts(&ciphertexts).unwrap();
    assert_eq!(text, HI_CIPHERTEXT);

    let parsed = parse_ciphertexts(&text).unwrap();
    assert_eq!(parsed, ciphertexts);
    let points = cipher.decrypt_points(&parsed, &private).unwrap();
    assert_eq!(points, encoded.points);
    assert_eq!(codec.decode(&points).unwrap(), "HI");
}

#[test]
fn test_file_roundtrip() {
    let cipher = demo_cipher();
    let (public, private) = cipher.generate_keypair(1234).unwrap();

    let message = "Attack at dawn 0600";
    let codec = MessageCodec::new(cipher.curve(), Encoding::default());
    let encoded = codec.encode(message).unwrap();
    let ciphertexts = cipher.encrypt_points(&encoded.points, &public, 777).unwrap();
    assert_eq!(ciphertexts[0].c1(), &CurvePoint::new(2527, 2233));

    let path = std::env::temp_dir().join(format!("eccrypt-roundtrip-{}.txt", std::process::id()));
    std::fs::write(&path, format_ciphertexts(&ciphertexts).unwrap()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let points = cipher.decrypt_points(&parse_ciphertexts(&text).unwrap(), &private).unwrap();
    assert_eq!(codec.decode(&points).unwrap(), message);
}

#[test]
fn test_skipped_characters_do_not_block_encryption() {
    let cipher = demo_cipher();
    let (public, private) = cipher.generate_keypair(5).unwrap();
    let codec = MessageCodec::new(cipher.curve(), Encoding::Koblitz { window: 3 });

    let encoded = codec.encode("HELLO WORLD").unwrap();
    assert_eq!(encoded.skipped.len(), 5);

    let ciphertexts = cipher.encrypt_points(&encoded.points, &public, 15).unwrap();
    assert_eq!(ciphertexts.len(), 6);
    let points = cipher.decrypt_points(&ciphertexts, &private).unwrap();
    assert_eq!(points, encoded.points);
}

#[test]
fn test_direct_encoding_roundtrip() {
    let cipher = demo_cipher();
    let (public, private) = cipher.generate_keypair(1234).unwrap();
    let codec = MessageCodec::new(cipher.curve(), Encoding::Direct);

    let encoded = codec.encode("Hab").unwrap();
    let ciphertexts = cipher.encrypt_points(&encoded.points, &public, 99).unwrap();
    let points = cipher.decrypt_points(&ciphertexts, &private).unwrap();
    assert_eq!(codec.decode(&points).unwrap(), "Hab");
}

#[test]
fn test_malformed_ciphertext_file() {
    let cipher = demo_cipher();
    let (_, private) = cipher.generate_keypair(5).unwrap();

    let truncated = "((3083, 2393), (313, 2390)) ((3083, 2393), (3606,";
    let err = parse_ciphertexts(truncated).unwrap_err();
    let core: Error = err.into();
    assert!(core.is_malformed());

    // Well-formed numbers that are not points on the curve
    let off_curve = parse_ciphertexts("((1, 1), (2, 2))").unwrap();
    assert!(cipher.decrypt_points(&off_curve, &private).is_err());
}

#[test]
fn test_generic_point_cipher() {
    fn roundtrip<C: PointCipher>(cipher: &C, secret: u64, m: C::Point, nonce: u64) -> Result<C::Point> {
        let (pk, sk) = cipher.keypair(secret)?;
        let ct = cipher.encrypt(&pk, &m, nonce)?;
        cipher.decrypt(&sk, &ct)
    }

    let cipher = demo_cipher();
    let m = CurvePoint::new(1441, 795);
    assert_eq!(roundtrip(&cipher, 5, m, 15).unwrap(), m);
    assert_eq!(cipher.name(), "EC-ElGamal");
}

#[test]
fn test_small_curve_cipher() {
    let curve = small_curve();
    let base = curve.find_base_point(&GeneratorPolicy::default()).unwrap();
    assert_eq!(base.point, CurvePoint::new(0, 1));
    assert_eq!(base.order, 4);

    let prime = GeneratorPolicy {
        min_order: 2,
        require_prime_order: true,
    };
    let base = curve.find_base_point(&prime).unwrap();
    assert_eq!(base.point, CurvePoint::new(6, 2));
    assert_eq!(base.order, 3);

    let cipher = ElGamal::new(curve, base.point).unwrap();
    let (public, private) = cipher.generate_keypair(2).unwrap();
    let m = CurvePoint::new(3, 3);
    let ct = cipher.encrypt(&m, &public, 1).unwrap();
    assert_eq!(cipher.decrypt(&ct, &private).unwrap(), m);
}

#[test]
fn test_ciphertext_json() {
    let cipher = demo_cipher();
    let (public, _) = cipher.generate_keypair(5).unwrap();
    let ct = cipher.encrypt(&CurvePoint::new(1441, 795), &public, 15).unwrap();

    let json = serde_json::to_string(&ct).unwrap();
    let back: Ciphertext = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ct);

    let curve: EllipticCurve = serde_json::from_str(&serde_json::to_string(&demo_curve()).unwrap()).unwrap();
    assert_eq!(curve, demo_curve());
}

#[test]
fn test_random_scalar_in_range() {
    let cipher = demo_cipher();
    let mut rng = seeded_rng(7);
    for _ in 0..1000 {
        let k = cipher.random_scalar(&mut rng);
        assert!((1..cipher.order()).contains(&k));
    }
}
