//! New-review form handlers.
//!
//! Opening, cancelling, editing, and saving the draft. All operations are
//! total: saving always succeeds, even with empty fields, and the score
//! text is coerced to a number only at this boundary.

use bubbletea_rs::Cmd;

use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;
use crate::tui::state::DraftField;

use super::ReviewApp;

impl ReviewApp {
    /// Dispatches form messages to their handlers.
    pub(super) fn handle_form_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::OpenForm => self.handle_open_form(),
            AppMsg::CloseForm => self.handle_close_form(),
            AppMsg::SaveDraft => self.handle_save_draft(),
            AppMsg::FocusNextField => {
                self.draft.focus_next();
                None
            }
            AppMsg::FocusPreviousField => {
                self.draft.focus_previous();
                None
            }
            AppMsg::DraftInsertChar(character) => {
                self.draft.push_char(*character);
                None
            }
            AppMsg::DraftBackspace => {
                self.draft.backspace();
                None
            }
            _ => {
                // Unreachable: caller filters to form messages.
                None
            }
        }
    }

    /// Opens the new-review form, clearing any existing selection.
    fn handle_open_form(&mut self) -> Option<Cmd> {
        self.panel.open_form();
        self.status = None;
        None
    }

    /// Cancels the form: hides it and resets the draft.
    fn handle_close_form(&mut self) -> Option<Cmd> {
        self.panel.close_form();
        self.draft.reset();
        self.status = None;
        None
    }

    /// Saves the draft into the review book.
    ///
    /// Appends a copy of the draft, resets it to empty values, hides the
    /// form, and moves the cursor to the new entry. There are no error
    /// conditions; empty or malformed fields are stored as coerced.
    fn handle_save_draft(&mut self) -> Option<Cmd> {
        let name = self.draft.field(DraftField::Name).to_owned();
        let description = self.draft.field(DraftField::Description).to_owned();
        let score = self.draft.score_value();

        self.status = Some(format!("Saved '{name}'"));
        let id = self.book.add(name, description, score);
        tracing::debug!("saved review {id}");
        self.record_event(TelemetryEvent::ReviewSaved {
            review_id: id.value(),
        });

        self.draft.reset();
        self.panel.close_form();

        if let Some(index) = self.book.position(id) {
            self.cursor.position = index;
        }
        self.set_visible_list_height();
        self.adjust_scroll_to_cursor();
        None
    }
}
