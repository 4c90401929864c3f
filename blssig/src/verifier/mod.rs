// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use hashlink::LruCache;
use parking_lot::RwLock;
use tracing::trace;

use crate::api::Verifier;
use crate::error::BLSError;
use crate::keys::{PublicKey, Signature};
use crate::scheme::verify_distinct;


/// BLS signature verifier for the basic scheme
///
/// - BLS12_381 curve
/// - G1 for public keys, G2 for signatures
/// - aggregates require pairwise distinct messages
pub struct BLSVerifier {
    /// Cache for deserialized public key points to avoid expensive repeated operations
    point_cache: RwLock<LruCache<Vec<u8>, PublicKey>>,
}

impl Default for BLSVerifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Default number of cached public key points
pub const DEFAULT_POINT_CACHE_SIZE: usize = 10_000;

impl BLSVerifier {
    pub fn new() -> Self {
        Self::with_cache_size(DEFAULT_POINT_CACHE_SIZE)
    }

    /// Creates a verifier caching at most `capacity` decoded public keys.
    pub fn with_cache_size(capacity: usize) -> Self {
        Self {
            point_cache: RwLock::new(LruCache::new(capacity)),
        }
    }

    /// Number of public keys currently cached
    pub fn cached_keys(&self) -> usize {
        self.point_cache.read().len()
    }

    /// Verifies a single BLS signature
    fn verify_single(&self, pub_key: &[u8], msg: &[u8], sig: &[u8]) -> Result<(), BLSError> {
        let pub_key = self.get_or_cache_public_key(pub_key)?;
        let signature = Signature::from_bytes(sig)?;

        match pub_key.verify(msg, &signature) {
            true => Ok(()),
            false => Err(BLSError::SignatureVerificationFailed),
        }
    }

    /// Gets a cached public key or deserializes and caches it
    fn get_or_cache_public_key(&self, pub_key: &[u8]) -> Result<PublicKey, BLSError> {
        // Check cache first
        if let Some(cached) = self.point_cache.write().get(pub_key) {
            return Ok(*cached);
        }

        // Only valid keys are cached
        trace!("public key cache miss");
        let typed_pub_key = PublicKey::from_bytes(pub_key)?;
        self.point_cache
            .write()
            .insert(pub_key.to_vec(), typed_pub_key);
        Ok(typed_pub_key)
    }
}

impl Verifier for BLSVerifier {
    type Error = BLSError;

    fn verify(&self, pub_key: &[u8], msg: &[u8], sig: &[u8]) -> Result<(), Self::Error> {
        self.verify_single(pub_key, msg, sig)
    }

    fn aggregate(&self, sigs: &[Vec<u8>]) -> Result<Vec<u8>, Self::Error> {
        let typed_sigs = sigs
            .iter()
            .map(|sig| Signature::from_bytes(sig))
            .collect::<Result<Vec<_>, _>>()?;

        let agg_sig = Signature::aggregate(&typed_sigs)?;
        Ok(agg_sig.to_bytes().to_vec())
    }

    fn verify_aggregate(
        &self,
        pub_keys: &[Vec<u8>],
        msgs: &[&[u8]],
        agg_sig: &[u8],
    ) -> Result<(), Self::Error> {
        if pub_keys.is_empty() {
            return Err(BLSError::EmptyPublicKeys);
        }

        let typed_pub_keys = pub_keys
            .iter()
            .map(|pub_key| self.get_or_cache_public_key(pub_key))
            .collect::<Result<Vec<_>, _>>()?;
        let agg_sig = Signature::from_bytes(agg_sig)?;

        verify_distinct(&typed_pub_keys, msgs, &agg_sig)
    }
}
