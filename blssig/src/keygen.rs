// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Deterministic private key derivation (`KeyGen` of draft-irtf-cfrg-bls-signature-04, section 2.3).
//!
//! ```plain
//! salt = "BLS-SIG-KEYGEN-SALT-"
//! loop:
//!     PRK = HKDF-Extract(salt, IKM || I2OSP(0, 1))
//!     OKM = HKDF-Expand(PRK, key_info || I2OSP(L, 2), L)
//!     SK = OS2IP(OKM) mod r
//!     if SK != 0: return SK
//!     salt = H(salt)
//! ```
//!
//! `key_info` is empty and `L = ceil(3 * ceil(log2(r)) / 16) = 48`.

use bls12_381::Scalar;
use hkdf::Hkdf;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::error::BLSError;
use crate::keys::MIN_SEED_LENGTH;

const KEYGEN_SALT: &[u8] = b"BLS-SIG-KEYGEN-SALT-";

/// HKDF output length for BLS12-381
const OKM_LENGTH: usize = 48;

/// Derives a non-zero scalar from `ikm`. The scalar is wiped when dropped.
pub(crate) fn key_gen(ikm: &[u8]) -> Result<Zeroizing<Scalar>, BLSError> {
    if ikm.len() < MIN_SEED_LENGTH {
        return Err(BLSError::InvalidSeed { len: ikm.len() });
    }

    // IKM || I2OSP(0, 1)
    let mut input = Zeroizing::new(Vec::with_capacity(ikm.len() + 1));
    input.extend_from_slice(ikm);
    input.push(0);

    // key_info || I2OSP(L, 2)
    let info = (OKM_LENGTH as u16).to_be_bytes();

    let mut salt = KEYGEN_SALT.to_vec();
    loop {
        let prk = Hkdf::<Sha256>::new(Some(&salt[..]), &input);
        let mut okm = Zeroizing::new([0u8; OKM_LENGTH]);
        prk.expand(&info, &mut okm[..])
            .expect("48 bytes is within the HKDF-SHA256 output limit");

        let sk = Zeroizing::new(scalar_from_okm(&okm));
        if !is_zero(&sk) {
            return Ok(sk);
        }
        salt = Sha256::digest(&salt).to_vec();
    }
}

/// OS2IP(OKM) mod r. `from_bytes_wide` reduces a little-endian 512-bit integer.
fn scalar_from_okm(okm: &[u8; OKM_LENGTH]) -> Scalar {
    let mut wide = Zeroizing::new([0u8; 64]);
    for (dst, src) in wide.iter_mut().zip(okm.iter().rev()) {
        *dst = *src;
    }
    Scalar::from_bytes_wide(&wide)
}

pub(crate) fn is_zero(scalar: &Scalar) -> bool {
    *scalar == Scalar::zero()
}
