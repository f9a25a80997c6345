use eddsa::{Eddsa, PrivateKey, PublicKey, Signature};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sha2::Sha256;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let eddsa = Eddsa::bn254();
    let mut rng = StdRng::seed_from_u64(42);
    let (pk, sk) = eddsa.generate_key_from_rng(&mut rng);

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let pk_bytes = bincode::serialize(&pk).expect("serialize pk");

    let msg = b"hello eddsa";
    let mut hasher = Sha256::default();

    let sig = eddsa.sign(&sk, msg, &mut hasher).expect("sign");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let sk2: PrivateKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let pk2: PublicKey = bincode::deserialize(&pk_bytes).expect("deserialize pk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    let ok = eddsa.verify(&sig2, msg, &pk2, &mut hasher).expect("verify");
    assert!(ok);
    assert_eq!(sk2.public(), &pk2);

    let forged = eddsa.verify(&sig2, b"hello EdDSA", &pk2, &mut hasher).expect("verify");
    assert!(!forged);

    println!("signature: {}", hex::encode(sig.to_bytes()));
}
