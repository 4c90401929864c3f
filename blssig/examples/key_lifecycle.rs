//! # Example: BLS key lifecycle
//!
//! Derives a private key from a hex seed, prints the public key, signs a message and verifies
//! the signature, the way a hosting application drives the byte-level API.
//!
//! ## Usage:
//! ```bash
//! cargo run --example key_lifecycle -- 0101010101010101010101010101010101010101010101010101010101010101 "unlock door"
//! RUST_LOG=trace cargo run --example key_lifecycle -- <seed-hex> <message>
//! ```
//!
use anyhow::{Context, Result, bail};
use basic_blssig::logging::init_tracing;
use basic_blssig::{derive_public_key, generate_key, sign, verify};
use std::env;

fn main() -> Result<()> {
    init_tracing(None);

    let mut args = env::args().skip(1);
    let (Some(seed_hex), Some(message)) = (args.next(), args.next()) else {
        bail!("usage: key_lifecycle <seed-hex> <message>");
    };
    let seed = hex::decode(seed_hex.trim()).context("seed must be hex encoded")?;

    let sk = generate_key(&seed)?;
    let pk = derive_public_key(&sk)?;
    println!("public key: {}", hex::encode(pk));

    let signature = sign(&sk, message.as_bytes())?;
    println!("signature:  {}", hex::encode(signature));

    verify(&pk, message.as_bytes(), &signature)?;
    println!("signature verified for message {:?}", message);
    Ok(())
}
