//! Terminal User Interface for the review journal.
//!
//! This module provides the interactive TUI for recording, viewing, and
//! deleting reviews using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ReviewApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and `Model` implementation
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Panel, draft, and cursor state management
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Launch Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, launch configuration uses a module-level storage pattern. Call
//! [`set_launch_context`] before starting the program, and
//! `ReviewApp::init()` will automatically retrieve it.

use std::io::{self, Write};
use std::sync::{Arc, OnceLock};

use bubbletea_rs::Program;

use crate::config::ScorebookConfig;
use crate::error::LaunchError;
use crate::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::ReviewApp;

/// Launch configuration handed to `ReviewApp::init()`.
struct LaunchContext {
    title: String,
    telemetry: Arc<dyn TelemetrySink>,
}

/// Global storage for the launch context.
///
/// Set before the TUI program starts and read by `ReviewApp::init()`.
static LAUNCH_CONTEXT: OnceLock<LaunchContext> = OnceLock::new();

/// Sets the launch context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Returns
/// `true` if the context was set, `false` if it was already set (in which
/// case the existing context remains).
pub fn set_launch_context(title: String, telemetry: Arc<dyn TelemetrySink>) -> bool {
    LAUNCH_CONTEXT
        .set(LaunchContext { title, telemetry })
        .is_ok()
}

/// Returns a copy of the stored launch context, or defaults if unset.
pub(crate) fn launch_context() -> (String, Arc<dyn TelemetrySink>) {
    LAUNCH_CONTEXT.get().map_or_else(
        || {
            (
                "Scorebook".to_owned(),
                Arc::new(NoopTelemetrySink) as Arc<dyn TelemetrySink>,
            )
        },
        |context| (context.title.clone(), Arc::clone(&context.telemetry)),
    )
}

/// Runs the review journal TUI.
///
/// # Errors
///
/// Returns [`LaunchError::Terminal`] when the TUI runtime fails to
/// initialise or run.
pub async fn run(config: &ScorebookConfig) -> Result<(), LaunchError> {
    let telemetry: Arc<dyn TelemetrySink> = if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    };

    // If already set (e.g. re-running the TUI in the same process), this is
    // a no-op and the existing context remains.
    let _ = set_launch_context(config.resolve_title().to_owned(), telemetry);

    run_tui(!config.no_alt_screen)
        .await
        .map_err(|error| LaunchError::Terminal {
            message: error.to_string(),
        })
}

/// Runs the bubbletea-rs program with the `ReviewApp` model.
async fn run_tui(alt_screen: bool) -> Result<(), bubbletea_rs::Error> {
    // ReviewApp::init() will retrieve the launch context from module-level
    // storage.
    let program = Program::<ReviewApp>::builder()
        .alt_screen(alt_screen)
        .build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
