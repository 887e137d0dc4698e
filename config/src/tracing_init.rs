//! Shared tracing bootstrap for the CLI (feature `tracing-init`).
//!
//! Logs go to stderr so the assembled prompt on stdout stays clean for
//! piping and redirection.

use tracing_subscriber::EnvFilter;

/// Default filter when the env var is unset or empty.
const DEFAULT_FILTER: &str = "info";

/// Initializes the global subscriber with a filter read from `env_var`
/// (e.g. `QUILL_LOG`), defaulting to `info`. Safe to call more than once:
/// later calls are no-ops.
pub fn init_tracing(env_var: &str) {
    let filter = std::env::var(env_var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Repeated init must not panic (try_init swallows the second attempt).
    #[test]
    fn init_twice_is_a_noop() {
        init_tracing("QUILL_LOG_TEST_UNSET");
        init_tracing("QUILL_LOG_TEST_UNSET");
    }
}
