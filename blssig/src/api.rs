// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

/// Verifier trait for basic-scheme BLS signatures
pub trait Verifier {
    /// Error type returned by every operation.
    type Error;
    /// Verifies a signature for the given public key
    ///
    /// This method must be safe for concurrent use.
    ///
    /// # Arguments
    /// * `pub_key` - The compressed public key to verify against
    /// * `msg` - The message that was signed
    /// * `sig` - The compressed signature to verify
    fn verify(&self, pub_key: &[u8], msg: &[u8], sig: &[u8]) -> Result<(), Self::Error>;

    /// Aggregates signatures over distinct messages
    ///
    /// # Arguments
    /// * `sigs` - The signatures to aggregate
    ///
    /// # Returns
    /// A Result containing the aggregated signature
    fn aggregate(&self, sigs: &[Vec<u8>]) -> Result<Vec<u8>, Self::Error>;

    /// Verifies an aggregate signature
    ///
    /// This method must be safe for concurrent use.
    ///
    /// # Arguments
    /// * `pub_keys` - The public keys of the signers
    /// * `msgs` - The message signed by each signer, pairwise distinct
    /// * `agg_sig` - The aggregate signature to verify
    fn verify_aggregate(
        &self,
        pub_keys: &[Vec<u8>],
        msgs: &[&[u8]],
        agg_sig: &[u8],
    ) -> Result<(), Self::Error>;
}
