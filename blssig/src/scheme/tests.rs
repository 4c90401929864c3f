// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::error::{KeyEncodingError, PointEncodingError};
use crate::keys::MIN_SEED_LENGTH;
use rand::RngCore;

/// (seed, private key, public key) generated by the reference `KeyGen` implementation
const GOLDEN_KEYS: [(&[u8; 32], &str, &str); 2] = [
    (
        &[0x00; 32],
        "4a353be3dac091a0a7e640620372f5e1e2e4401717c1e79cac6ffba8f6905604",
        "85695fcbc06cc4c4c9451f4dce21cbf8de3e5a13bf48f44cdbb18e2038ba7b8bb1632d7911ef1e2e08749bddbf165352",
    ),
    (
        &[0x01; 32],
        "6fc9d9a2b05fd1f0e51bc91041a03be8657081f272ec281aff731624f0d1c220",
        "aefe1789d6476f60439e1168f588ea16652dc321279f05a805fbc63933e88ae9c175d6c6ab182e54af562e1a0dce41bb",
    ),
];

/// (message, signature) under the private key derived from seed 32×`0x01`
const GOLDEN_SIGNATURES: [(&[u8], &str); 2] = [
    (
        b"",
        "b00d8e443d71323ad10b38cae986e932c432523caea9a0efab522763c6dabe8ea08389688cf5a2a63b97f39d09832781042fc5723f07e509335d8f426031a0566f29eb1475d909b9d076be06105b6eeed579543d318157526e84a5392c905b1a",
    ),
    (
        b"unlock",
        "b6e4cbdb458742391c5cfa3f523403bf64c1ecedca3d03dc88c5033df64ea8f30105e62f1fc1edacaff8a6a07834db960110ff4a11bc64819ad99935adf454548c17faa7584a523f9bf935b5ba3b231aa0f00ef12d089ec66a03a108327c59ac",
    ),
];

fn random_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut seed);
    seed
}

fn random_key() -> [u8; 32] {
    generate_key(&random_seed()).unwrap()
}

#[test]
fn test_golden_key_vectors() {
    for (seed, expected_sk, expected_pk) in GOLDEN_KEYS {
        let sk = generate_key(seed).unwrap();
        assert_eq!(hex::encode(sk), expected_sk);

        let pk = derive_public_key(&sk).unwrap();
        assert_eq!(hex::encode(pk), expected_pk);
    }
}

#[test]
fn test_golden_signature_vectors() {
    let sk = generate_key(&[0x01; 32]).unwrap();
    let pk = derive_public_key(&sk).unwrap();
    for (message, expected_sig) in GOLDEN_SIGNATURES {
        let sig = sign(&sk, message).unwrap();
        assert_eq!(hex::encode(sig), expected_sig);
        assert!(verify(&pk, message, &sig).is_ok());
    }
}

#[test]
fn test_generate_key_is_deterministic() {
    let seed = random_seed();
    assert_eq!(generate_key(&seed).unwrap(), generate_key(&seed).unwrap());
    assert_ne!(generate_key(&seed).unwrap(), random_key());
}

#[test]
fn test_generate_key_rejects_short_seed() {
    let seed = [0x01; MIN_SEED_LENGTH - 1];
    assert_eq!(
        generate_key(&seed),
        Err(BLSError::InvalidSeed {
            len: MIN_SEED_LENGTH - 1
        })
    );
    assert_eq!(generate_key(&[]), Err(BLSError::InvalidSeed { len: 0 }));
}

#[test]
fn test_derive_public_key_is_deterministic() {
    let sk = random_key();
    let pk = derive_public_key(&sk).unwrap();
    assert_eq!(pk.len(), PUBLIC_KEY_LENGTH);
    assert_eq!(pk, derive_public_key(&sk).unwrap());
}

#[test]
fn test_wrong_key_length_rejected() {
    for len in [0, 31, 33, 48] {
        let sk = vec![0x01; len];
        let expected = Err(BLSError::InvalidKeyEncoding(KeyEncodingError::Length(len)));
        assert_eq!(derive_public_key(&sk), expected);
        assert_eq!(
            sign(&sk, b"msg"),
            Err(BLSError::InvalidKeyEncoding(KeyEncodingError::Length(len)))
        );
    }
}

#[test]
fn test_out_of_range_key_rejected() {
    let sk = [0xff; 32];
    assert_eq!(
        sign(&sk, b"msg"),
        Err(BLSError::InvalidKeyEncoding(KeyEncodingError::OutOfRange))
    );
    assert_eq!(
        derive_public_key(&[0u8; 32]),
        Err(BLSError::InvalidKeyEncoding(KeyEncodingError::Zero))
    );
}

#[test]
fn test_sign_is_deterministic() {
    let sk = random_key();
    let sig = sign(&sk, b"unlock").unwrap();
    assert_eq!(sig.len(), SIGNATURE_LENGTH);
    assert_eq!(sig, sign(&sk, b"unlock").unwrap());
    assert_ne!(sig, sign(&sk, b"lock").unwrap());
}

#[test]
fn test_sign_empty_message() {
    let sk = generate_key(&[0x01; 32]).unwrap();
    let sig = sign(&sk, b"").unwrap();
    assert_eq!(sig.len(), SIGNATURE_LENGTH);

    let pk = derive_public_key(&sk).unwrap();
    assert!(verify(&pk, b"", &sig).is_ok());
}

#[test]
fn test_sign_then_verify() {
    let sk = random_key();
    let pk = derive_public_key(&sk).unwrap();
    let message = b"test message";
    let sig = sign(&sk, message).unwrap();

    assert!(verify(&pk, message, &sig).is_ok());
    assert_eq!(
        verify(&pk, b"wrong message", &sig),
        Err(BLSError::SignatureVerificationFailed)
    );

    let other_pk = derive_public_key(&random_key()).unwrap();
    assert_eq!(
        verify(&other_pk, message, &sig),
        Err(BLSError::SignatureVerificationFailed)
    );
}

#[test]
fn test_verify_rejects_malformed_inputs() {
    let sk = random_key();
    let pk = derive_public_key(&sk).unwrap();
    let sig = sign(&sk, b"msg").unwrap();

    assert_eq!(
        verify(&pk[..47], b"msg", &sig),
        Err(BLSError::InvalidPointEncoding(
            PointEncodingError::PublicKeyLength(47)
        ))
    );
    assert_eq!(
        verify(&pk, b"msg", &sig[..95]),
        Err(BLSError::InvalidPointEncoding(
            PointEncodingError::SignatureLength(95)
        ))
    );

    let mut corrupted = sig;
    corrupted[0] ^= 0x01;
    assert!(verify(&pk, b"msg", &corrupted).is_err());
}

#[test]
fn test_aggregate_verify_distinct_messages() {
    let keys: Vec<_> = (0..3).map(|_| random_key()).collect();
    let pub_keys: Vec<_> = keys.iter().map(|sk| derive_public_key(sk).unwrap()).collect();
    let messages: [&[u8]; 3] = [b"first", b"second", b"third"];
    let sigs: Vec<_> = keys
        .iter()
        .zip(messages)
        .map(|(sk, msg)| sign(sk, msg).unwrap())
        .collect();

    let sig_refs: Vec<&[u8]> = sigs.iter().map(|s| &s[..]).collect();
    let pk_refs: Vec<&[u8]> = pub_keys.iter().map(|p| &p[..]).collect();
    let agg_sig = aggregate(&sig_refs).unwrap();

    assert!(aggregate_verify(&pk_refs, &messages, &agg_sig).is_ok());

    let swapped: [&[u8]; 3] = [b"second", b"first", b"third"];
    assert_eq!(
        aggregate_verify(&pk_refs, &swapped, &agg_sig),
        Err(BLSError::SignatureVerificationFailed)
    );
}

#[test]
fn test_aggregate_verify_rejects_duplicate_messages() {
    let keys: Vec<_> = (0..2).map(|_| random_key()).collect();
    let pub_keys: Vec<_> = keys.iter().map(|sk| derive_public_key(sk).unwrap()).collect();
    let sigs: Vec<_> = keys.iter().map(|sk| sign(sk, b"same").unwrap()).collect();

    let sig_refs: Vec<&[u8]> = sigs.iter().map(|s| &s[..]).collect();
    let pk_refs: Vec<&[u8]> = pub_keys.iter().map(|p| &p[..]).collect();
    let agg_sig = aggregate(&sig_refs).unwrap();

    assert_eq!(
        aggregate_verify(&pk_refs, &[b"same", b"same"], &agg_sig),
        Err(BLSError::DuplicateMessage { index: 1 })
    );
}

#[test]
fn test_aggregate_argument_checks() {
    assert_eq!(aggregate(&[]), Err(BLSError::EmptySignatures));

    let sk = random_key();
    let pk = derive_public_key(&sk).unwrap();
    let sig = sign(&sk, b"msg").unwrap();

    assert_eq!(
        aggregate_verify(&[], &[], &sig),
        Err(BLSError::EmptyPublicKeys)
    );
    assert_eq!(
        aggregate_verify(&[&pk], &[b"a", b"b"], &sig),
        Err(BLSError::LengthMismatch {
            pub_keys: 1,
            msgs: 2
        })
    );
}

#[test]
fn test_single_signature_aggregate_matches_signature() {
    let sk = random_key();
    let sig = sign(&sk, b"alone").unwrap();
    assert_eq!(aggregate(&[&sig]).unwrap(), sig);
}

#[test]
fn test_concurrent_calls_agree() {
    let sk = generate_key(&[0x01; 32]).unwrap();
    let expected = sign(&sk, b"concurrent").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || sign(&sk, b"concurrent").unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
