//! State management for the review journal TUI.
//!
//! This module provides the core state types: the panel state machine
//! (which panel is shown), the draft buffer bound to the new-review form,
//! and the list cursor.

mod cursor;
mod draft;
mod panel;

pub use cursor::CursorState;
pub use draft::{DraftField, DraftReview};
pub use panel::{PanelMode, PanelState};
