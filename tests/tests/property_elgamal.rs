//! Property-based tests for ElGamal and the message encodings

use eccrypt::prelude::*;
use eccrypt_tests::demo_cipher;
use proptest::prelude::*;

fn alphabet_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(eccrypt::codec::TABLE_ALPHABET.chars().collect::<Vec<_>>()),
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn elgamal_roundtrip(secret in 1u64..4093, nonce in 0u64..4093, k in 0u64..4093) {
        let cipher = demo_cipher();
        let (public, private) = cipher.generate_keypair(secret).unwrap();
        let m = cipher.curve().mul(cipher.generator(), k).unwrap();
        let ct = cipher.encrypt(&m, &public, nonce).unwrap();
        prop_assert_eq!(cipher.decrypt(&ct, &private).unwrap(), m);
    }

    #[test]
    fn koblitz_message_roundtrip(text in alphabet_text(), secret in 1u64..4093, nonce in 1u64..4093) {
        let cipher = demo_cipher();
        let (public, private) = cipher.generate_keypair(secret).unwrap();
        let codec = MessageCodec::new(cipher.curve(), Encoding::default());

        let encoded = codec.encode(&text).unwrap();
        prop_assert!(encoded.is_complete());
        let ciphertexts = cipher.encrypt_points(&encoded.points, &public, nonce).unwrap();
        let points = cipher.decrypt_points(&ciphertexts, &private).unwrap();
        prop_assert_eq!(codec.decode(&points).unwrap(), text);
    }

    #[test]
    fn parse_never_panics(text in "[ (),0-9a-z-]{0,64}") {
        let _ = parse_ciphertexts(&text);
    }
}
