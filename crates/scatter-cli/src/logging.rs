// File: crates/scatter-cli/src/logging.rs
// Summary: tracing subscriber setup (RUST_LOG-controlled, stderr so stdout stays machine-readable).

use tracing_subscriber::EnvFilter;

/// Initialize console logging. Level comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
