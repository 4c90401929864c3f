// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Byte-level operations of the basic BLS scheme.
//!
//! Every function copies its inputs into owned values, validates them completely, and only then
//! computes. Results are returned as owned fixed-width arrays; nothing borrowed from the caller
//! outlives the call.

use ahash::HashSet;
use bls_signatures::verify_messages;
use tracing::{debug, trace};

use crate::error::BLSError;
use crate::keys::{
    PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, PrivateKey, PublicKey, SIGNATURE_LENGTH, Signature,
};

#[cfg(test)]
mod tests;

/// Derives a private key from `seed`, which must hold at least
/// [`MIN_SEED_LENGTH`](crate::MIN_SEED_LENGTH) bytes.
pub fn generate_key(seed: &[u8]) -> Result<[u8; PRIVATE_KEY_LENGTH], BLSError> {
    let sk = PrivateKey::generate(seed)
        .inspect_err(|err| debug!(%err, "key generation rejected"))?;
    trace!(seed_len = seed.len(), "generated private key");
    Ok(sk.to_bytes())
}

/// Derives the compressed G1 public key of a 32-byte big-endian private key.
pub fn derive_public_key(sk: &[u8]) -> Result<[u8; PUBLIC_KEY_LENGTH], BLSError> {
    let sk = PrivateKey::from_bytes(sk)
        .inspect_err(|err| debug!(%err, "public key derivation rejected"))?;
    Ok(sk.public_key().to_bytes())
}

/// Signs `message` (possibly empty) and returns the compressed G2 signature.
pub fn sign(sk: &[u8], message: &[u8]) -> Result<[u8; SIGNATURE_LENGTH], BLSError> {
    let sk =
        PrivateKey::from_bytes(sk).inspect_err(|err| debug!(%err, "signing rejected"))?;
    let sig = sk.sign(message);
    trace!(msg_len = message.len(), "signed message");
    Ok(sig.to_bytes())
}

/// Verifies a basic-scheme signature over `message`.
pub fn verify(pub_key: &[u8], message: &[u8], sig: &[u8]) -> Result<(), BLSError> {
    let pub_key = PublicKey::from_bytes(pub_key)?;
    let sig = Signature::from_bytes(sig)?;

    match pub_key.verify(message, &sig) {
        true => Ok(()),
        false => {
            debug!(msg_len = message.len(), "signature verification failed");
            Err(BLSError::SignatureVerificationFailed)
        }
    }
}

/// Aggregates signatures into a single compressed G2 point.
pub fn aggregate(sigs: &[&[u8]]) -> Result<[u8; SIGNATURE_LENGTH], BLSError> {
    let typed_sigs = sigs
        .iter()
        .map(|sig| Signature::from_bytes(sig))
        .collect::<Result<Vec<_>, _>>()?;

    let agg_sig = Signature::aggregate(&typed_sigs)?;
    trace!(count = typed_sigs.len(), "aggregated signatures");
    Ok(agg_sig.to_bytes())
}

/// Verifies an aggregate signature where `pub_keys[i]` signed `messages[i]`.
///
/// Messages must be pairwise distinct.
pub fn aggregate_verify(
    pub_keys: &[&[u8]],
    messages: &[&[u8]],
    agg_sig: &[u8],
) -> Result<(), BLSError> {
    let typed_pub_keys = pub_keys
        .iter()
        .map(|pub_key| PublicKey::from_bytes(pub_key))
        .collect::<Result<Vec<_>, _>>()?;
    let agg_sig = Signature::from_bytes(agg_sig)?;

    verify_distinct(&typed_pub_keys, messages, &agg_sig)
}

/// Checks message count and distinctness, then runs the pairing check.
pub(crate) fn verify_distinct(
    pub_keys: &[PublicKey],
    messages: &[&[u8]],
    agg_sig: &Signature,
) -> Result<(), BLSError> {
    if pub_keys.is_empty() {
        return Err(BLSError::EmptyPublicKeys);
    }
    if pub_keys.len() != messages.len() {
        return Err(BLSError::LengthMismatch {
            pub_keys: pub_keys.len(),
            msgs: messages.len(),
        });
    }

    let mut seen = HashSet::default();
    for (index, msg) in messages.iter().enumerate() {
        if !seen.insert(*msg) {
            return Err(BLSError::DuplicateMessage { index });
        }
    }

    let raw_pub_keys: Vec<_> = pub_keys.iter().map(PublicKey::as_raw).collect();
    match verify_messages(&agg_sig.as_raw(), messages, &raw_pub_keys) {
        true => Ok(()),
        false => {
            debug!(signers = pub_keys.len(), "aggregate verification failed");
            Err(BLSError::SignatureVerificationFailed)
        }
    }
}
