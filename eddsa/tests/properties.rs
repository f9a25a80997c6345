//! Property tests for key generation, signing and verification.

use eddsa::{Eddsa, PrivateKey, PublicKey, SCALAR_SIZE, Signature};
use proptest::prelude::*;
use sha2::Sha256;

fn config() -> ProptestConfig {
    // Every case runs several 256-bit scalar multiplications.
    ProptestConfig::with_cases(16)
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn generate_is_deterministic(seed in any::<[u8; 32]>()) {
        let eddsa = Eddsa::bn254();
        let (pk1, sk1) = eddsa.generate_key(&seed);
        let (pk2, sk2) = eddsa.generate_key(&seed);

        prop_assert_eq!(pk1.to_bytes(), pk2.to_bytes());
        prop_assert_eq!(*sk1.to_bytes(), *sk2.to_bytes());
    }

    #[test]
    fn generated_scalar_is_clamped(seed in any::<[u8; 32]>()) {
        let (_, sk) = Eddsa::bn254().generate_key(&seed);
        let bytes = sk.to_bytes();

        prop_assert_eq!(bytes[SCALAR_SIZE - 1] & 0x07, 0);
        prop_assert_eq!(bytes[0] & 0x80, 0);
        prop_assert_eq!(bytes[0] & 0x40, 0x40);
    }

    #[test]
    fn sign_then_verify(seed in any::<[u8; 32]>(), msg in prop::collection::vec(any::<u8>(), 0..128)) {
        let eddsa = Eddsa::bn254();
        let (pk, sk) = eddsa.generate_key(&seed);
        let mut hasher = Sha256::default();

        let sig = eddsa.sign(&sk, &msg, &mut hasher).unwrap();
        prop_assert!(eddsa.verify(&sig, &msg, &pk, &mut hasher).unwrap());
    }

    #[test]
    fn flipped_message_bit_fails(
        seed in any::<[u8; 32]>(),
        msg in prop::collection::vec(any::<u8>(), 1..64),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let eddsa = Eddsa::bn254();
        let (pk, sk) = eddsa.generate_key(&seed);
        let mut hasher = Sha256::default();
        let sig = eddsa.sign(&sk, &msg, &mut hasher).unwrap();

        let mut tampered = msg.clone();
        tampered[index.index(msg.len())] ^= 1 << bit;
        prop_assert!(!eddsa.verify(&sig, &tampered, &pk, &mut hasher).unwrap());
    }

    #[test]
    fn flipped_s_bit_fails(seed in any::<[u8; 32]>(), bit in 0usize..256) {
        let eddsa = Eddsa::bn254();
        let (pk, sk) = eddsa.generate_key(&seed);
        let mut hasher = Sha256::default();
        let sig = eddsa.sign(&sk, b"property", &mut hasher).unwrap();

        let mut tampered = sig;
        tampered.s[31 - bit / 8] ^= 1 << (bit % 8);
        prop_assert!(!eddsa.verify(&tampered, b"property", &pk, &mut hasher).unwrap());
    }

    #[test]
    fn public_key_equality_matches_bytes(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let eddsa = Eddsa::bn254();
        let (pk_a, _) = eddsa.generate_key(&a);
        let (pk_b, _) = eddsa.generate_key(&b);

        prop_assert_eq!(pk_a == pk_b, pk_a.to_bytes() == pk_b.to_bytes());
    }

    #[test]
    fn encodings_roundtrip(seed in any::<[u8; 32]>(), msg in prop::collection::vec(any::<u8>(), 0..32)) {
        let eddsa = Eddsa::bn254();
        let (pk, sk) = eddsa.generate_key(&seed);
        let sig = eddsa.sign(&sk, &msg, &mut Sha256::default()).unwrap();

        let pk_bytes = pk.to_bytes();
        let sk_bytes = sk.to_bytes();
        let sig_bytes = sig.to_bytes();

        prop_assert_eq!(<PublicKey>::from_bytes(&pk_bytes).unwrap().to_bytes(), pk_bytes);
        prop_assert_eq!(*<PrivateKey>::from_bytes(&sk_bytes[..]).unwrap().to_bytes(), *sk_bytes);
        prop_assert_eq!(<Signature>::from_bytes(&sig_bytes).unwrap().to_bytes(), sig_bytes);
    }
}
