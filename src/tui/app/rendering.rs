//! Rendering logic for the review journal TUI.
//!
//! View rendering methods producing string output for the terminal. These
//! are pure query methods that read state without modification.

use crate::tui::components::{
    ReviewDetailComponent, ReviewDetailViewContext, ReviewFormComponent, ReviewFormViewContext,
};
use crate::tui::state::PanelMode;

use super::ReviewApp;

impl ReviewApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        format!("{}\n", self.title)
    }

    /// Renders the summary bar with the review count.
    pub(super) fn render_summary_bar(&self) -> String {
        let count = self.book.len();
        let noun = if count == 1 { "review" } else { "reviews" };
        format!("{count} {noun}\n")
    }

    /// Renders the status bar with a transient message or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(status) = &self.status {
            return format!("{status}\n");
        }

        let hints = match self.panel.mode() {
            PanelMode::Browsing => "j/k:move  Enter:view  n:new  d:delete  ?:help  q:quit",
            PanelMode::Editing => "Tab:next field  Enter:save  Esc:cancel",
            PanelMode::Viewing(_) => "Enter/Esc:back  j/k:move  d:delete  ?:help  q:quit",
        };
        format!("{hints}\n")
    }

    /// Renders the detail/form pane according to the panel mode.
    pub(super) fn render_pane(&self) -> String {
        let max_width = 80.min(self.width as usize);
        let pane_height = self.calculate_pane_height();

        match self.panel.mode() {
            PanelMode::Editing => {
                let ctx = ReviewFormViewContext {
                    draft: &self.draft,
                    max_width,
                };
                ReviewFormComponent::view(&ctx)
            }
            PanelMode::Viewing(id) => {
                let ctx = ReviewDetailViewContext {
                    review: self.book.get(id),
                    max_width,
                    max_height: pane_height,
                };
                ReviewDetailComponent::view(&ctx)
            }
            PanelMode::Browsing => {
                let separator = "\u{2500}".repeat(max_width);
                format!("{separator}\nPress 'n' to start a new review.\n")
            }
        }
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first item
  End, G     Go to last item

Reviews:
  n          Start a new review
  Enter      Toggle detail view for the item under the cursor
  d, Del     Delete the item under the cursor
  Esc        Return to the list

New review form:
  text keys  Edit the focused field
  Backspace  Delete one character
  Tab        Focus next field
  Shift-Tab  Focus previous field
  Enter      Save the review
  Esc        Cancel and discard the draft

Other:
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
