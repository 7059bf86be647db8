//! Scorebook library crate providing a terminal review journal.
//!
//! The library wraps a small in-memory review book behind a
//! Model-View-Update terminal interface: add a named review with a
//! description and score, view its detail, delete it. All state is
//! ephemeral and lost on exit.

pub mod config;
pub mod error;
pub mod model;
pub mod telemetry;
pub mod tui;

pub use config::ScorebookConfig;
pub use error::LaunchError;
pub use model::{Review, ReviewBook, ReviewId};
pub use telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
