//! Tracing subscriber setup.
//!
//! Logs go to stderr so structured output on stdout (JSON, markdown)
//! stays clean. `RUST_LOG` takes precedence over the `-v` count.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter directive for a `-v` count
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "ssd_explorer=warn",
        1 => "ssd_explorer=info",
        2 => "ssd_explorer=debug",
        _ => "ssd_explorer=trace",
    }
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbosity)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_directive() {
        assert_eq!(verbosity_directive(0), "ssd_explorer=warn");
        assert_eq!(verbosity_directive(2), "ssd_explorer=debug");
        assert_eq!(verbosity_directive(9), "ssd_explorer=trace");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_tracing(0);
        init_tracing(3);
    }
}
