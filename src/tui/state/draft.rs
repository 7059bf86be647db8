//! Draft state for the in-progress review form.
//!
//! The draft keeps all three fields as text buffers, including the score:
//! whatever the user types is stored verbatim, and the score is only coerced
//! to a number at the save boundary. Malformed score text coerces to `0.0`
//! rather than producing an error; input validation is deliberately out of
//! scope.

/// The form field that currently has input focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DraftField {
    /// Display name of the reviewed subject.
    #[default]
    Name,
    /// Free-text description.
    Description,
    /// Numeric score, kept as raw text until save.
    Score,
}

impl DraftField {
    /// Returns the next field in Tab order (wrapping).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Description => Self::Score,
            Self::Score => Self::Name,
        }
    }

    /// Returns the previous field in Tab order (wrapping).
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Score,
            Self::Description => Self::Name,
            Self::Score => Self::Description,
        }
    }

    /// Returns the label shown next to the field in the form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Description => "Description",
            Self::Score => "Score",
        }
    }
}

/// Mutable buffer for the in-progress review form.
///
/// Reset to empty after a save or an explicit cancel. The buffer survives
/// the form being forced closed by a selection, so reopening the form
/// resumes where the user left off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftReview {
    name: String,
    description: String,
    score: String,
    focus: DraftField,
}

impl DraftReview {
    /// Creates an empty draft focused on the name field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text of the given field.
    #[must_use]
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
            DraftField::Score => &self.score,
        }
    }

    /// Returns the field that currently has focus.
    #[must_use]
    pub const fn focused(&self) -> DraftField {
        self.focus
    }

    /// Replaces the text of the given field wholesale.
    ///
    /// No validation is performed; the value is stored as given.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Description => self.description = value,
            DraftField::Score => self.score = value,
        }
    }

    /// Appends one character to the focused field.
    pub fn push_char(&mut self, character: char) {
        match self.focus {
            DraftField::Name => self.name.push(character),
            DraftField::Description => self.description.push(character),
            DraftField::Score => self.score.push(character),
        }
    }

    /// Removes the last character from the focused field, if present.
    pub fn backspace(&mut self) {
        let buffer = match self.focus {
            DraftField::Name => &mut self.name,
            DraftField::Description => &mut self.description,
            DraftField::Score => &mut self.score,
        };
        let _ = buffer.pop();
    }

    /// Moves focus to the next field in Tab order.
    pub const fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field in Tab order.
    pub const fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Clears all fields and returns focus to the name field.
    pub fn reset(&mut self) {
        self.name.clear();
        self.description.clear();
        self.score.clear();
        self.focus = DraftField::Name;
    }

    /// Coerces the score text to a number at the save boundary.
    ///
    /// Malformed input coerces to `0.0`; this operation never fails.
    #[must_use]
    pub fn score_value(&self) -> f64 {
        self.score.trim().parse().unwrap_or(0.0)
    }
}
