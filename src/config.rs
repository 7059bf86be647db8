//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.scorebook.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `SCOREBOOK_TITLE`
//! 4. **Command-line arguments** – `--title`, `--no-alt-screen`,
//!    `--telemetry`
//!
//! # Configuration File
//!
//! Place `.scorebook.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! title = "Board game nights"
//! no_alt_screen = false
//! telemetry = true
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

/// Default header title when none is configured.
const DEFAULT_TITLE: &str = "Scorebook";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use scorebook::ScorebookConfig;
///
/// let config = ScorebookConfig::load().expect("failed to load configuration");
/// let title = config.resolve_title();
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "SCOREBOOK",
    discovery(
        dotfile_name = ".scorebook.toml",
        config_file_name = "scorebook.toml",
        app_name = "scorebook"
    )
)]
pub struct ScorebookConfig {
    /// Title shown in the TUI header.
    ///
    /// Can be provided via:
    /// - CLI: `--title <TITLE>` or `-T <TITLE>`
    /// - Environment: `SCOREBOOK_TITLE`
    /// - Config file: `title = "..."`
    #[ortho_config(cli_short = 'T')]
    pub title: Option<String>,

    /// Renders the TUI inline instead of on the alternate screen.
    ///
    /// Can be provided via:
    /// - CLI: `--no-alt-screen`
    /// - Config file: `no_alt_screen = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so `SCOREBOOK_NO_ALT_SCREEN` is not supported.
    #[ortho_config()]
    pub no_alt_screen: bool,

    /// Emits telemetry events to stderr as JSON lines.
    ///
    /// When set, review saves and deletes are recorded through the
    /// stderr JSONL sink; otherwise telemetry is dropped.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for ScorebookConfig {
    fn default() -> Self {
        Self {
            title: None,
            no_alt_screen: false,
            telemetry: false,
        }
    }
}

impl ScorebookConfig {
    /// Returns the configured header title, falling back to the default.
    #[must_use]
    pub fn resolve_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::ScorebookConfig;

    #[test]
    fn defaults_use_alt_screen_without_telemetry() {
        let config = ScorebookConfig::default();

        assert!(config.title.is_none());
        assert!(!config.no_alt_screen);
        assert!(!config.telemetry);
    }

    #[test]
    fn resolve_title_falls_back_to_default() {
        let config = ScorebookConfig::default();
        assert_eq!(config.resolve_title(), "Scorebook");
    }

    #[test]
    fn resolve_title_prefers_configured_value() {
        let config = ScorebookConfig {
            title: Some("Board game nights".to_owned()),
            ..ScorebookConfig::default()
        };
        assert_eq!(config.resolve_title(), "Board game nights");
    }
}
