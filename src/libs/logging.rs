//! Tracing subscriber setup.
//!
//! The subscriber is installed only in debug mode (`KINDERGARTEN_DEBUG` or
//! `RUST_LOG` set), the same switch the message macros use. `RUST_LOG`
//! filters as usual; with only `KINDERGARTEN_DEBUG` set everything from this
//! crate at `debug` and above is shown.

use crate::libs::messages::macros::is_debug_mode;
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "kindergarten=debug";

pub fn init_tracing() -> Result<()> {
    if !is_debug_mode() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
