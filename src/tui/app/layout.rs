//! Layout helpers for the review journal TUI.
//!
//! Encapsulates list/pane height calculations and scroll adjustments based
//! on terminal size and cursor movement.

use super::{CHROME_HEIGHT, MIN_LIST_HEIGHT, MIN_PANE_HEIGHT, ReviewApp};

impl ReviewApp {
    /// Returns the body rows available to the list and pane sections.
    const fn visible_body_height(&self) -> usize {
        (self.height as usize).saturating_sub(CHROME_HEIGHT)
    }

    /// Updates the visible row count stored in the list component.
    pub(super) fn set_visible_list_height(&mut self) {
        let list_height = self.calculate_list_height();
        self.review_list.set_visible_height(list_height);
    }

    /// Calculates the number of rows available for the review list.
    ///
    /// The pane uses the remaining body rows once the list is bounded, so
    /// both sections grow with the terminal rather than keeping a fixed
    /// ratio.
    pub(super) fn calculate_list_height(&self) -> usize {
        let body_height = self.visible_body_height();

        let list_max = if body_height > MIN_PANE_HEIGHT {
            body_height.saturating_sub(MIN_PANE_HEIGHT)
        } else {
            0
        };

        let natural_list_height = self.book.len().max(MIN_LIST_HEIGHT);
        natural_list_height.min(list_max).max(MIN_LIST_HEIGHT)
    }

    /// Calculates the number of rows available for the detail/form pane.
    pub(super) const fn calculate_pane_height(&self) -> usize {
        let body_height = self.visible_body_height();
        body_height.saturating_sub(self.review_list.visible_height())
    }

    /// Adjusts the scroll offset so the cursor remains visible.
    pub(super) const fn adjust_scroll_to_cursor(&mut self) {
        self.cursor.ensure_visible(self.review_list.visible_height());
    }
}
