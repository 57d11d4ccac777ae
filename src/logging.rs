//! Tracing setup for the binary
//!
//! Events go to stderr so command output on stdout stays clean.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "WELLSPACE_LOG";

static TRACING_INIT: Once = Once::new();

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "wellspace=debug"
    } else {
        "wellspace=warn"
    }
}

/// Install the global subscriber; later calls are no-ops
///
/// `WELLSPACE_LOG` takes precedence over the `verbose` default.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "wellspace=warn");
        assert_eq!(default_directive(true), "wellspace=debug");
    }

    #[test]
    fn test_init_twice() {
        init_tracing(false);
        init_tracing(true);
    }
}
