//! Cursor state for the review list.
//!
//! Tracks the list position the next toggle or delete acts on, together with
//! a scroll offset so the cursor stays inside the visible window. Movement
//! is clamped to the collection bounds; the cursor is retained where
//! possible when the list shrinks.

/// Cursor position and scroll offset within the review list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    /// Current cursor position (0-indexed).
    pub position: usize,
    /// Number of rows scrolled from the top of the list.
    pub offset: usize,
}

impl CursorState {
    /// Creates a cursor at the top of the list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: 0,
            offset: 0,
        }
    }

    /// Clamps the cursor to the valid range for a list of `count` entries.
    ///
    /// An empty list resets both position and offset to zero; otherwise a
    /// position past the end moves to the last valid index.
    pub const fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.position = 0;
            self.offset = 0;
        } else if self.position >= count {
            self.position = count.saturating_sub(1);
        }
    }

    /// Moves the cursor up by `step` positions, stopping at the top.
    pub const fn move_up(&mut self, step: usize) {
        self.position = self.position.saturating_sub(step);
    }

    /// Moves the cursor down by `step` positions, stopping at the last
    /// valid index for a list of `count` entries.
    pub fn move_down(&mut self, step: usize, count: usize) {
        let max_index = count.saturating_sub(1);
        self.position = self.position.saturating_add(step).min(max_index);
    }

    /// Moves the cursor to the first entry and resets scrolling.
    pub const fn home(&mut self) {
        self.position = 0;
        self.offset = 0;
    }

    /// Moves the cursor to the last entry of a list of `count` entries.
    pub const fn end(&mut self, count: usize) {
        self.position = count.saturating_sub(1);
    }

    /// Adjusts the scroll offset so the cursor stays within a viewport of
    /// `visible_height` rows.
    pub const fn ensure_visible(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }

        if self.position < self.offset {
            self.offset = self.position;
            return;
        }

        let viewport_end = self.offset.saturating_add(visible_height);
        if self.position >= viewport_end {
            self.offset = self
                .position
                .saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
