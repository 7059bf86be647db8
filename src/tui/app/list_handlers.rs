//! List action handlers: detail toggling and deletion.
//!
//! Toggling acts on the review under the cursor. Deleting the selected
//! review clears the selection so the detail pane never shows a review
//! that no longer exists.

use bubbletea_rs::Cmd;

use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;

use super::ReviewApp;

impl ReviewApp {
    /// Dispatches list action messages to their handlers.
    pub(super) fn handle_list_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ToggleDetail => self.handle_toggle_detail(),
            AppMsg::CloseDetail => self.handle_close_detail(),
            AppMsg::DeleteReview => self.handle_delete_review(),
            _ => {
                // Unreachable: caller filters to list messages.
                None
            }
        }
    }

    /// Toggles the detail view for the review under the cursor.
    ///
    /// Toggling the already-selected review returns to the list panel;
    /// toggling any other review shows it and forces the form closed
    /// (the draft buffer is preserved).
    fn handle_toggle_detail(&mut self) -> Option<Cmd> {
        let Some(id) = self.cursor_review().map(|review| review.id) else {
            return None;
        };

        self.panel.toggle_selection(id);
        self.status = None;
        None
    }

    /// Clears the selection and returns to the list panel.
    fn handle_close_detail(&mut self) -> Option<Cmd> {
        self.panel.clear_selection();
        None
    }

    /// Deletes the review under the cursor.
    ///
    /// Removes exactly one entry by identifier; with an empty book this is
    /// a no-op. If the deleted review was selected, the selection is
    /// cleared. The cursor clamps to the shrunken list afterwards.
    fn handle_delete_review(&mut self) -> Option<Cmd> {
        let Some(id) = self.cursor_review().map(|review| review.id) else {
            return None;
        };

        let Some(removed) = self.book.remove(id) else {
            return None;
        };

        tracing::debug!("deleted review {id}");
        self.record_event(TelemetryEvent::ReviewDeleted {
            review_id: id.value(),
        });

        self.panel.clear_if_selected(id);
        self.cursor.clamp(self.book.len());
        self.set_visible_list_height();
        self.adjust_scroll_to_cursor();
        self.status = Some(format!("Deleted '{}'", removed.name));
        None
    }
}
