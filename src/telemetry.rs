//! Application telemetry events and sinks.
//!
//! Scorebook is a local-first tool, but lightweight telemetry still helps
//! with debugging: the journal mutations (saves and deletes) can be emitted
//! as structured events without touching the rendered terminal frame.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by scorebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A draft was saved into the review book.
    ReviewSaved {
        /// Identifier assigned to the saved review.
        review_id: u64,
    },
    /// A review was deleted from the review book.
    ReviewDeleted {
        /// Identifier of the deleted review.
        review_id: u64,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
/// Stderr is untouched by the alternate-screen TUI, so a redirect such as
/// `scorebook 2>events.jsonl` captures the stream cleanly.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}
