//! Diagnostic logging setup
//!
//! Logs go to stderr: stdout carries the launch configuration the host
//! reads back. `RUST_LOG` takes precedence over the `--verbose` default.

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter without `--verbose`
const DEFAULT_LEVEL: &str = "warn";

/// Default filter with `--verbose`
const VERBOSE_LEVEL: &str = "dotnet_dap=debug";

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL })
    })
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let _ = fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .try_init();
}
