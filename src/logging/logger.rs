// file: src/logging/logger.rs
// version: 1.0.0
// guid: 75a17c8c-dad9-4d2f-b186-9bc234cd7623

//! Logger initialization and configuration
//!
//! Logs go to stderr so that `--json` output on stdout stays parseable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AnalyzerError, Result};

/// Default filter for the requested verbosity; `RUST_LOG` takes precedence
fn level_filter(verbose: bool, quiet: bool) -> EnvFilter {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(level_filter(verbose, quiet))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| AnalyzerError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}

/// Initialize structured JSON logging on stderr
pub fn init_json_logger(verbose: bool, quiet: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(level_filter(verbose, quiet))
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| AnalyzerError::config(format!("Failed to initialize JSON logger: {}", e)))?;

    Ok(())
}

/// Run `f` inside an `operation` span
pub fn with_operation_span<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let span = tracing::info_span!("operation", name = operation);
    let _enter = span.enter();
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_fails_gracefully() {
        // the global subscriber can only be set once per process
        let _ = init_logger(false, false);
        let second = init_logger(true, false);
        assert!(second.is_err());
        assert!(second
            .unwrap_err()
            .to_string()
            .contains("Failed to initialize logger"));
    }

    #[test]
    fn test_with_operation_span() {
        let mut executed = false;

        let result = with_operation_span("assess", || {
            executed = true;
            "done"
        });

        assert!(executed);
        assert_eq!(result, "done");
    }

    #[test]
    fn test_with_operation_span_with_return_value() {
        assert_eq!(with_operation_span("math", || 2 + 2), 4);
    }
}
