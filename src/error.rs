//! Error types for the scorebook launch boundary.
//!
//! Review-journal operations themselves are total: appending to the book,
//! removing an entry, and toggling panel state cannot fail. The only
//! fallible surface is launching the application, covered by
//! [`LaunchError`].

use thiserror::Error;

/// Errors surfaced while launching the scorebook TUI.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LaunchError {
    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {message}")]
    Configuration {
        /// Human-readable description of the configuration failure.
        message: String,
    },
    /// The terminal UI runtime failed to initialise or run.
    #[error("terminal error: {message}")]
    Terminal {
        /// Human-readable description of the terminal failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::LaunchError;

    #[test]
    fn configuration_error_displays_message() {
        let error = LaunchError::Configuration {
            message: "missing value".to_owned(),
        };
        assert_eq!(error.to_string(), "configuration error: missing value");
    }

    #[test]
    fn terminal_error_displays_message() {
        let error = LaunchError::Terminal {
            message: "could not enter alt screen".to_owned(),
        };
        assert_eq!(
            error.to_string(),
            "terminal error: could not enter alt screen"
        );
    }
}
