//! Panel state for the review journal TUI.
//!
//! The visible panel is never stored directly: it is derived from the
//! combination of a form-visibility flag and the optional selection, both
//! encapsulated in [`PanelState`]. Every transition operation maintains the
//! exclusivity invariant: the form and a selection are never active at the
//! same time, on either path.

use crate::model::ReviewId;

/// Which panel the TUI is currently showing, derived from [`PanelState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    /// Neither the form nor a selection is active; only the list shows.
    Browsing,
    /// The new-review form is open.
    Editing,
    /// The detail pane shows the review with this identifier.
    Viewing(ReviewId),
}

/// Encapsulated form-visibility flag plus optional selection.
///
/// Invariant: `form_open` and `selected` are mutually exclusive. Opening
/// the form clears the selection, and selecting a review closes the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    form_open: bool,
    selected: Option<ReviewId>,
}

impl PanelState {
    /// Creates the initial panel state (browsing, nothing active).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            form_open: false,
            selected: None,
        }
    }

    /// Returns the derived panel mode.
    #[must_use]
    pub const fn mode(&self) -> PanelMode {
        if self.form_open {
            return PanelMode::Editing;
        }
        match self.selected {
            Some(id) => PanelMode::Viewing(id),
            None => PanelMode::Browsing,
        }
    }

    /// Returns the currently selected review, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<ReviewId> {
        self.selected
    }

    /// Returns whether the new-review form is open.
    #[must_use]
    pub const fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Opens the new-review form, clearing any existing selection.
    pub const fn open_form(&mut self) {
        self.form_open = true;
        self.selected = None;
    }

    /// Closes the new-review form.
    pub const fn close_form(&mut self) {
        self.form_open = false;
    }

    /// Toggles the selection for the given review.
    ///
    /// Selecting the already-selected review clears the selection;
    /// selecting any other review replaces it and closes the form if open.
    pub fn toggle_selection(&mut self, id: ReviewId) {
        if self.selected == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id);
            self.form_open = false;
        }
    }

    /// Clears the selection, returning to the list panel.
    pub const fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Clears the selection when it points at the given review.
    ///
    /// Called after a deletion so the detail pane never shows a review
    /// that no longer exists.
    pub fn clear_if_selected(&mut self, id: ReviewId) {
        if self.selected == Some(id) {
            self.selected = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::ReviewBook;

    use super::{PanelMode, PanelState};

    fn two_ids() -> (crate::model::ReviewId, crate::model::ReviewId) {
        let mut book = ReviewBook::new();
        let first = book.add("A".to_owned(), String::new(), 1.0);
        let second = book.add("B".to_owned(), String::new(), 2.0);
        (first, second)
    }

    #[test]
    fn initial_state_is_browsing() {
        let panel = PanelState::new();
        assert_eq!(panel.mode(), PanelMode::Browsing);
        assert!(panel.selected().is_none());
        assert!(!panel.is_form_open());
    }

    #[test]
    fn open_and_close_form_round_trip() {
        let mut panel = PanelState::new();

        panel.open_form();
        assert_eq!(panel.mode(), PanelMode::Editing);

        panel.close_form();
        assert_eq!(panel.mode(), PanelMode::Browsing);
    }

    #[test]
    fn toggling_same_review_returns_to_browsing() {
        let (first, _) = two_ids();
        let mut panel = PanelState::new();

        panel.toggle_selection(first);
        assert_eq!(panel.mode(), PanelMode::Viewing(first));

        panel.toggle_selection(first);
        assert_eq!(panel.mode(), PanelMode::Browsing);
    }

    #[test]
    fn toggling_other_review_replaces_selection() {
        let (first, second) = two_ids();
        let mut panel = PanelState::new();

        panel.toggle_selection(first);
        panel.toggle_selection(second);

        assert_eq!(panel.mode(), PanelMode::Viewing(second));
    }

    #[test]
    fn selecting_closes_an_open_form() {
        let (first, _) = two_ids();
        let mut panel = PanelState::new();
        panel.open_form();

        panel.toggle_selection(first);

        assert!(!panel.is_form_open());
        assert_eq!(panel.mode(), PanelMode::Viewing(first));
    }

    #[test]
    fn opening_form_clears_existing_selection() {
        let (first, _) = two_ids();
        let mut panel = PanelState::new();
        panel.toggle_selection(first);

        panel.open_form();

        assert!(panel.selected().is_none());
        assert_eq!(panel.mode(), PanelMode::Editing);
    }

    #[test]
    fn clear_if_selected_only_clears_matching_id() {
        let (first, second) = two_ids();
        let mut panel = PanelState::new();
        panel.toggle_selection(first);

        panel.clear_if_selected(second);
        assert_eq!(panel.selected(), Some(first));

        panel.clear_if_selected(first);
        assert!(panel.selected().is_none());
    }

    #[test]
    fn double_toggle_is_idempotent() {
        let (first, _) = two_ids();
        let before = PanelState::new();
        let mut panel = before;

        panel.toggle_selection(first);
        panel.toggle_selection(first);

        assert_eq!(panel, before);
    }
}
