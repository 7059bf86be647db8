//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! review journal. It owns the review book, the draft buffer, the panel
//! state machine, and the list cursor; handlers for each message category
//! live in focused submodules.
//!
//! # Module Structure
//!
//! - `routing`: mode-based routing and category dispatch
//! - `navigation`: cursor movement handlers
//! - `form_handlers`: new-review form handlers
//! - `list_handlers`: detail toggling and deletion
//! - `lifecycle_handlers`: quit, help, and resize
//! - `layout`: list/pane height calculations
//! - `rendering`: view rendering methods
//! - `model_impl`: the `bubbletea_rs::Model` implementation

use std::sync::Arc;

use crate::model::{Review, ReviewBook};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::components::ReviewListComponent;
use super::state::{CursorState, DraftReview, PanelMode, PanelState};

mod form_handlers;
mod layout;
mod lifecycle_handlers;
mod list_handlers;
mod model_impl;
mod navigation;
mod rendering;
mod routing;

/// Layout rows reserved for header, summary bar, separator newline, and
/// status bar.
pub(crate) const CHROME_HEIGHT: usize = 4;
/// Minimum rows reserved for the detail/form pane.
pub(crate) const MIN_PANE_HEIGHT: usize = 6;
/// Minimum rows for the review list, ensuring at least one row is visible
/// even when the terminal height is very small.
pub(crate) const MIN_LIST_HEIGHT: usize = 1;

/// Main application model for the review journal TUI.
pub struct ReviewApp {
    /// The review book (all saved reviews, insertion order).
    pub(crate) book: ReviewBook,
    /// The in-progress form buffer.
    pub(crate) draft: DraftReview,
    /// Form-visibility flag plus selection; the panel state machine.
    pub(crate) panel: PanelState,
    /// List cursor and scroll offset.
    pub(crate) cursor: CursorState,
    /// Header title.
    title: String,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether the help overlay is visible.
    pub(crate) show_help: bool,
    /// Transient status message shown in place of the key hints.
    pub(crate) status: Option<String>,
    /// Review list component.
    review_list: ReviewListComponent,
    /// Sink for journal mutation events.
    telemetry: Arc<dyn TelemetrySink>,
}

impl Default for ReviewApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewApp {
    /// Creates an application with an empty review book and default title.
    #[must_use]
    pub fn new() -> Self {
        Self::with_context("Scorebook".to_owned(), Arc::new(NoopTelemetrySink))
    }

    /// Creates an application with the given title and telemetry sink.
    #[must_use]
    pub fn with_context(title: String, telemetry: Arc<dyn TelemetrySink>) -> Self {
        let mut app = Self {
            book: ReviewBook::new(),
            draft: DraftReview::new(),
            panel: PanelState::new(),
            cursor: CursorState::new(),
            title,
            width: 80,
            height: 24,
            show_help: false,
            status: None,
            review_list: ReviewListComponent::new(),
            telemetry,
        };
        app.set_visible_list_height();
        app
    }

    /// Returns the derived panel mode.
    #[must_use]
    pub const fn mode(&self) -> PanelMode {
        self.panel.mode()
    }

    /// Returns all saved reviews in insertion order.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        self.book.entries()
    }

    /// Returns the number of saved reviews.
    #[must_use]
    pub const fn review_count(&self) -> usize {
        self.book.len()
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor.position
    }

    /// Returns the in-progress draft.
    #[must_use]
    pub const fn draft(&self) -> &DraftReview {
        &self.draft
    }

    /// Returns the review under the cursor, if the book is non-empty.
    #[must_use]
    pub fn cursor_review(&self) -> Option<&Review> {
        self.book.entries().get(self.cursor.position)
    }

    /// Returns the review shown in the detail pane, if any.
    #[must_use]
    pub fn selected_review(&self) -> Option<&Review> {
        self.panel.selected().and_then(|id| self.book.get(id))
    }

    /// Records a telemetry event through the configured sink.
    pub(crate) fn record_event(&self, event: crate::telemetry::TelemetryEvent) {
        self.telemetry.record(event);
    }
}
