// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use thiserror::Error;

use crate::keys::{MIN_SEED_LENGTH, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BLSError {
    /// The seed is too short to derive a key from.
    #[error("invalid seed: expected at least {MIN_SEED_LENGTH} bytes, got {len}")]
    InvalidSeed { len: usize },

    /// The private key bytes are not a valid scalar encoding.
    #[error("invalid private key encoding: {0}")]
    InvalidKeyEncoding(#[from] KeyEncodingError),

    /// A public key or signature failed to decode to a valid group element.
    #[error("invalid point encoding: {0}")]
    InvalidPointEncoding(#[from] PointEncodingError),

    #[error("BLS signature verification failed")]
    SignatureVerificationFailed,

    #[error("empty public keys provided")]
    EmptyPublicKeys,

    #[error("empty signatures provided")]
    EmptySignatures,

    #[error("mismatched number of public keys and messages: {pub_keys} != {msgs}")]
    LengthMismatch { pub_keys: usize, msgs: usize },

    /// Basic scheme aggregates must sign pairwise distinct messages.
    #[error("message {index} repeats an earlier message")]
    DuplicateMessage { index: usize },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEncodingError {
    #[error("expected {PRIVATE_KEY_LENGTH} bytes, got {0}")]
    Length(usize),

    #[error("scalar is not below the group order")]
    OutOfRange,

    #[error("scalar is zero")]
    Zero,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointEncodingError {
    #[error("invalid public key length: expected {PUBLIC_KEY_LENGTH} bytes, got {0}")]
    PublicKeyLength(usize),

    #[error("invalid signature length: expected {SIGNATURE_LENGTH} bytes, got {0}")]
    SignatureLength(usize),

    /// Not a point of the G1 prime-order subgroup.
    #[error("public key is not a valid G1 point")]
    PublicKey,

    /// Not a point of the G2 prime-order subgroup.
    #[error("signature is not a valid G2 point")]
    Signature,

    #[error("public key is the identity point")]
    IdentityPublicKey,
}
