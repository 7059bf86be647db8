//! New-review form component.
//!
//! Renders the draft's three fields with a focus marker and a trailing
//! cursor on the focused field. The form itself is stateless; all buffer
//! and focus state lives in the draft.

use crate::tui::state::{DraftField, DraftReview};

/// Fields in the order they appear on the form.
const FIELDS: [DraftField; 3] = [DraftField::Name, DraftField::Description, DraftField::Score];

/// Context for rendering the new-review form.
#[derive(Debug, Clone)]
pub struct ReviewFormViewContext<'a> {
    /// The draft buffer bound to the form.
    pub draft: &'a DraftReview,
    /// Maximum width for the separator line.
    pub max_width: usize,
}

/// Component for displaying the new-review form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewFormComponent;

impl ReviewFormComponent {
    /// Creates a new form component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the form as a string.
    #[must_use]
    pub fn view(ctx: &ReviewFormViewContext<'_>) -> String {
        let mut output = String::new();

        output.push_str(&"\u{2500}".repeat(ctx.max_width));
        output.push('\n');
        output.push_str("New review\n");

        for field in FIELDS {
            output.push_str(&render_field_line(ctx.draft, field));
            output.push('\n');
        }

        output
    }
}

/// Renders one labelled field line with focus marker and cursor.
fn render_field_line(draft: &DraftReview, field: DraftField) -> String {
    let focused = draft.focused() == field;
    let marker = if focused { ">" } else { " " };
    let cursor = if focused { "_" } else { "" };
    let value = draft.field(field);

    // Labels are padded so the values line up in a column.
    format!("{marker} {:<12} {value}{cursor}", format!("{}:", field.label()))
}
