//! Logging setup
//!
//! Libraries in this workspace only emit `tracing` events. The host
//! installs a subscriber once at startup.

use crate::{Error, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global `fmt` subscriber
///
/// `RUST_LOG` overrides `default_filter`. Fails instead of panicking when a
/// subscriber is already installed.
pub fn init(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        let _ = init("rentify=debug");
        assert!(matches!(init("rentify=debug"), Err(Error::Logging(_))));
    }
}
