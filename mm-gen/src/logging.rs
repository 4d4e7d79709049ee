//! Logging setup for the mm-gen binary.

use std::io;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber at the requested verbosity.
///
/// Diagnostics go to stderr so stdout stays reserved for the quoted-literal
/// echo of the generated files.
pub fn setup(verbosity: &str) {
    let filter = EnvFilter::try_new(verbosity).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
