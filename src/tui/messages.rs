//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions and
//! system events; every handler completes synchronously.

/// Messages for the review journal TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one item.
    CursorUp,
    /// Move cursor down one item.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to first item.
    Home,
    /// Move cursor to last item.
    End,

    // New-review form
    /// Open the new-review form, clearing any selection.
    OpenForm,
    /// Cancel the form, resetting the draft.
    CloseForm,
    /// Append the draft to the book and reset it.
    SaveDraft,
    /// Move focus to the next draft field.
    FocusNextField,
    /// Move focus to the previous draft field.
    FocusPreviousField,
    /// Insert one character into the focused draft field.
    DraftInsertChar(char),
    /// Delete one character from the focused draft field.
    DraftBackspace,

    // List actions
    /// Toggle the detail view for the review under the cursor.
    ToggleDetail,
    /// Clear the selection and return to the list.
    CloseDetail,
    /// Delete the review under the cursor.
    DeleteReview,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns whether this is a cursor navigation message.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns whether this is a new-review form message.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(
            self,
            Self::OpenForm
                | Self::CloseForm
                | Self::SaveDraft
                | Self::FocusNextField
                | Self::FocusPreviousField
                | Self::DraftInsertChar(_)
                | Self::DraftBackspace
        )
    }

    /// Returns whether this is a list action message.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::ToggleDetail | Self::CloseDetail | Self::DeleteReview)
    }
}
