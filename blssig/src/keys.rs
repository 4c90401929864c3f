// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Private key, public key and signature types with their fixed-width encodings.

use std::fmt;

use bls_signatures::verify_messages;
use bls12_381::{G1Affine, G1Projective, G2Affine, G2Projective, Scalar};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{BLSError, KeyEncodingError, PointEncodingError};
use crate::keygen::{is_zero, key_gen};

/// Ciphersuite of the basic scheme, used as the hash-to-curve domain separation tag
pub const DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// Minimum seed length accepted by key generation
pub const MIN_SEED_LENGTH: usize = 32;

/// BLS12-381 private key length in bytes
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// BLS12-381 public key length in bytes
pub const PUBLIC_KEY_LENGTH: usize = 48;

/// BLS12-381 signature length in bytes
pub const SIGNATURE_LENGTH: usize = 96;

/// Hashes a message to G2 under [`DST`].
pub fn hash_to_g2(msg: &[u8]) -> G2Projective {
    bls_signatures::hash(msg)
}

/// A scalar in `[1, r)`, held as its 32-byte big-endian encoding.
///
/// The bytes are wiped when the key is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; PRIVATE_KEY_LENGTH]);

impl PrivateKey {
    /// Deterministically derives a private key from `seed`.
    pub fn generate(seed: &[u8]) -> Result<Self, BLSError> {
        let sk = key_gen(seed)?;
        let le = Zeroizing::new(sk.to_bytes());

        let mut key = Self([0u8; PRIVATE_KEY_LENGTH]);
        for (dst, src) in key.0.iter_mut().zip(le.iter().rev()) {
            *dst = *src;
        }
        Ok(key)
    }

    /// Decodes a big-endian scalar, rejecting wrong lengths, values `>= r` and zero.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BLSError> {
        if bytes.len() != PRIVATE_KEY_LENGTH {
            return Err(KeyEncodingError::Length(bytes.len()).into());
        }
        let mut key = Self([0u8; PRIVATE_KEY_LENGTH]);
        key.0.copy_from_slice(bytes);

        let mut le = Zeroizing::new(key.0);
        le.reverse();
        let canonical = Option::<Scalar>::from(Scalar::from_bytes(&le)).map(Zeroizing::new);

        match canonical {
            None => Err(KeyEncodingError::OutOfRange.into()),
            Some(scalar) if is_zero(&scalar) => Err(KeyEncodingError::Zero.into()),
            Some(_) => Ok(key),
        }
    }

    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LENGTH] {
        self.0
    }

    pub fn public_key(&self) -> PublicKey {
        let point = G1Projective::generator() * &*self.scalar();
        PublicKey(point.into())
    }

    /// Signs `msg` with the basic scheme: `sk * H(msg)`.
    pub fn sign(&self, msg: &[u8]) -> Signature {
        let point = hash_to_g2(msg) * &*self.scalar();
        Signature(point.into())
    }

    fn scalar(&self) -> Zeroizing<Scalar> {
        // The encoding is canonical, so the wide reduction is the identity.
        let mut wide = Zeroizing::new([0u8; 64]);
        for (dst, src) in wide.iter_mut().zip(self.0.iter().rev()) {
            *dst = *src;
        }
        Zeroizing::new(Scalar::from_bytes_wide(&wide))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// A G1 point, never the identity.
#[derive(Clone, Copy, Debug)]
pub struct PublicKey(bls_signatures::PublicKey);

impl PublicKey {
    /// Decodes a compressed G1 point and runs `KeyValidate` on it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BLSError> {
        let raw: [u8; PUBLIC_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| PointEncodingError::PublicKeyLength(bytes.len()))?;
        let affine = Option::<G1Affine>::from(G1Affine::from_compressed(&raw))
            .ok_or(PointEncodingError::PublicKey)?;

        if bool::from(affine.is_identity()) {
            return Err(PointEncodingError::IdentityPublicKey.into());
        }
        Ok(Self(G1Projective::from(affine).into()))
    }

    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        let point: G1Projective = self.0.into();
        G1Affine::from(point).to_compressed()
    }

    pub fn verify(&self, msg: &[u8], sig: &Signature) -> bool {
        verify_messages(&sig.0, &[msg], &[self.0])
    }

    pub(crate) fn as_raw(&self) -> bls_signatures::PublicKey {
        self.0
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PublicKey {}

/// A G2 point.
#[derive(Clone, Copy, Debug)]
pub struct Signature(bls_signatures::Signature);

impl Signature {
    /// Decodes a compressed G2 point, checking subgroup membership.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BLSError> {
        let raw: [u8; SIGNATURE_LENGTH] = bytes
            .try_into()
            .map_err(|_| PointEncodingError::SignatureLength(bytes.len()))?;
        let affine = Option::<G2Affine>::from(G2Affine::from_compressed(&raw))
            .ok_or(PointEncodingError::Signature)?;
        Ok(Self(G2Projective::from(affine).into()))
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let point: G2Projective = self.0.into();
        G2Affine::from(point).to_compressed()
    }

    /// Sums signatures in G2.
    pub fn aggregate(sigs: &[Signature]) -> Result<Self, BLSError> {
        if sigs.is_empty() {
            return Err(BLSError::EmptySignatures);
        }

        let mut aggregated_point = G2Projective::identity();
        for sig in sigs {
            let sig_point: G2Projective = sig.0.into();
            aggregated_point += sig_point;
        }
        Ok(Self(aggregated_point.into()))
    }

    pub(crate) fn as_raw(&self) -> bls_signatures::Signature {
        self.0
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for Signature {}
