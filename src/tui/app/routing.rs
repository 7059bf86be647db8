//! Message routing and dispatch logic.
//!
//! Messages are first routed by the current panel mode, then dispatched by
//! category. Mode-based routing keeps the state machine honest: cursor
//! navigation is inert while the form captures input, but list actions
//! still reach their handlers so a selection can force the form closed.

use bubbletea_rs::Cmd;

use crate::tui::messages::AppMsg;

use super::ReviewApp;

/// Result of routing while the new-review form is open.
enum EditingRouting {
    Handled(Option<Cmd>),
    Fallthrough,
}

impl ReviewApp {
    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all
    /// application messages and returns any resulting commands. It first
    /// attempts mode-based routing, then falls back to category dispatch.
    #[doc(hidden)]
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if let EditingRouting::Handled(result) = self.try_handle_in_editing_mode(msg) {
            return result;
        }
        self.dispatch_by_message_category(msg)
    }

    /// Routes messages while the form is open.
    ///
    /// Navigation is swallowed (the form owns the keyboard), while form,
    /// list, and lifecycle messages fall through to regular dispatch.
    fn try_handle_in_editing_mode(&mut self, msg: &AppMsg) -> EditingRouting {
        if !self.panel.is_form_open() {
            return EditingRouting::Fallthrough;
        }

        if msg.is_navigation() {
            return EditingRouting::Handled(None);
        }

        EditingRouting::Fallthrough
    }

    /// Dispatches messages based on their category.
    fn dispatch_by_message_category(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_form() {
            return self.handle_form_msg(msg);
        }
        if msg.is_list() {
            return self.handle_list_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::PageUp => self.handle_page_up(),
            AppMsg::PageDown => self.handle_page_down(),
            AppMsg::Home => self.handle_home(),
            AppMsg::End => self.handle_end(),
            _ => {
                // Unreachable: caller filters to navigation messages.
                None
            }
        }
    }
}
