#![forbid(unsafe_code)]

//! Subscriber setup. Logs go to stderr so frames on stdout stay clean.

use tracing_subscriber::EnvFilter;

use crate::error::{DemoError, Result};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks `debug` over `warn`.
pub fn init(json: bool, verbose: bool) -> Result<()> {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| DemoError::Logging(err.to_string()))
}
