//! Navigation handlers and cursor management.
//!
//! Each handler moves the cursor and then adjusts the scroll offset so the
//! cursor remains inside the visible window.

use bubbletea_rs::Cmd;

use super::ReviewApp;

impl ReviewApp {
    /// Handles cursor up navigation.
    pub(super) fn handle_cursor_up(&mut self) -> Option<Cmd> {
        self.cursor.move_up(1);
        self.adjust_scroll_to_cursor();
        None
    }

    /// Handles cursor down navigation.
    pub(super) fn handle_cursor_down(&mut self) -> Option<Cmd> {
        self.cursor.move_down(1, self.book.len());
        self.adjust_scroll_to_cursor();
        None
    }

    /// Handles page up navigation.
    pub(super) fn handle_page_up(&mut self) -> Option<Cmd> {
        let page_size = self.review_list.visible_height();
        self.cursor.move_up(page_size);
        self.adjust_scroll_to_cursor();
        None
    }

    /// Handles page down navigation.
    pub(super) fn handle_page_down(&mut self) -> Option<Cmd> {
        let page_size = self.review_list.visible_height();
        self.cursor.move_down(page_size, self.book.len());
        self.adjust_scroll_to_cursor();
        None
    }

    /// Handles Home key navigation.
    pub(super) fn handle_home(&mut self) -> Option<Cmd> {
        self.cursor.home();
        None
    }

    /// Handles End key navigation.
    pub(super) fn handle_end(&mut self) -> Option<Cmd> {
        self.cursor.end(self.book.len());
        self.adjust_scroll_to_cursor();
        None
    }
}
