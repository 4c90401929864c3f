// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Tracing subscriber initialization for binaries and examples.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs a global fmt subscriber filtered by `filter`, else `RUST_LOG`, else `info`.
///
/// Calling it again is a no-op.
pub fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let subscriber = fmt().with_env_filter(filter).with_target(false).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
