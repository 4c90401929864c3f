// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! BLS signature key management using the basic scheme.
//!
//! Keys and signatures live on the BLS12_381 curve with G1 for public keys and G2 for
//! signatures. Messages are hashed to G2 with the `BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_`
//! ciphersuite, and private keys are derived from seeds with the HKDF-based `KeyGen`.
//!
//! The byte-level entry points in [`scheme`] take borrowed input slices and return owned
//! fixed-width encodings:
//! - [`generate_key`]: seed (at least 32 bytes) to a 32-byte big-endian private key
//! - [`derive_public_key`]: private key to a 48-byte compressed G1 point
//! - [`sign`]: private key and message to a 96-byte compressed G2 point
//!
//! [`verify`], [`aggregate`] and [`aggregate_verify`] cover the verifying side, and
//! [`BLSVerifier`] implements the [`Verifier`] trait with a cache of decoded public keys.

pub mod api;
mod error;
mod keygen;
mod keys;
pub mod logging;
pub mod scheme;
mod verifier;

pub use api::Verifier;
pub use error::{BLSError, KeyEncodingError, PointEncodingError};
pub use keys::{
    DST, MIN_SEED_LENGTH, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, PrivateKey, PublicKey,
    SIGNATURE_LENGTH, Signature, hash_to_g2,
};
pub use scheme::{aggregate, aggregate_verify, derive_public_key, generate_key, sign, verify};
pub use verifier::{BLSVerifier, DEFAULT_POINT_CACHE_SIZE};
