/// Logging setup
///
/// Library code only emits `tracing` events. The binary installs a subscriber
/// once, writing to stderr so normal output stays clean. `RUST_LOG` wins over
/// the defaults.

use crate::error::{DeskError, Result};
use tracing_subscriber::EnvFilter;

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "lexdesk=debug,lexdesk_lib=debug"
    } else {
        "lexdesk=warn,lexdesk_lib=warn"
    }
}

/// Install the global subscriber. Call once, early in `main`.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| DeskError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert!(default_directives(true).contains("debug"));
        assert!(!default_directives(false).contains("debug"));
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init_tracing(false);
        assert!(matches!(init_tracing(false), Err(DeskError::Logging(_))));
    }
}
