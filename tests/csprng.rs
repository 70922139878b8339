use std::thread;

use keycodec::rng::Csprng;
use keycodec::{Key, KeyAlgorithm, PrivateKey};
use rand_core::RngCore;

#[test]
fn test_csprng_deterministic_from_seed() {
    let mut rng1 = Csprng::from_seed([0x42; 32]);
    let mut rng2 = Csprng::from_seed([0x42; 32]);

    let mut a = [0u8; 128];
    let mut b = [0u8; 128];

    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_eq!(a, b);
}

#[test]
fn test_csprng_output_advances() {
    let mut rng = Csprng::from_seed([0xAA; 32]);

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    rng.fill_bytes(&mut a);
    rng.fill_bytes(&mut b);

    assert_ne!(a, b);
}

#[test]
fn test_csprng_not_all_zero() {
    let mut rng = Csprng::from_seed([0; 32]);

    let mut out = [0u8; 64];
    rng.fill_bytes(&mut out);

    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn test_csprng_from_os_instances_differ() {
    let mut rng1 = Csprng::from_os().expect("OS entropy should be available");
    let mut rng2 = Csprng::from_os().expect("OS entropy should be available");

    let mut a = [0u8; 32];
    let mut b = [0u8; 32];

    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_ne!(a, b, "two OS-seeded generators produced the same stream");
}

#[test]
fn test_seeded_generation_is_reproducible() {
    for algorithm in [KeyAlgorithm::Ed25519, KeyAlgorithm::Ecdsa] {
        let a = PrivateKey::generate_with(algorithm, &mut Csprng::from_seed([7; 32])).unwrap();
        let b = PrivateKey::generate_with(algorithm, &mut Csprng::from_seed([7; 32])).unwrap();
        let c = PrivateKey::generate_with(algorithm, &mut Csprng::from_seed([8; 32])).unwrap();

        assert_eq!(a, b, "{algorithm} generation should follow the seed");
        assert_ne!(a, c, "{algorithm} generation ignored the seed");
    }
}

#[test]
fn test_concurrent_generation() {
    let handles: Vec<_> = (0..4u8)
        .map(|index| {
            thread::spawn(move || {
                let mut rng = Csprng::from_seed([index; 32]);
                let key = PrivateKey::generate_with(KeyAlgorithm::Ecdsa, &mut rng).unwrap();
                let public = key.create_public_key();
                let signature = key.sign(b"concurrent");
                assert!(public.verify(b"concurrent", &signature).unwrap());
                key.to_raw_bytes()
            })
        })
        .collect();

    let mut keys: Vec<Vec<u8>> = handles
        .into_iter()
        .map(|handle| handle.join().expect("generation thread panicked"))
        .collect();
    keys.sort();
    keys.dedup();

    assert_eq!(keys.len(), 4, "distinct seeds produced a repeated key");
}
