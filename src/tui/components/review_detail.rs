//! Review detail component.
//!
//! Renders the selected review's name, score, and width-wrapped description
//! in the pane next to the list. A placeholder is shown when the selection
//! cannot be resolved.

use crate::model::Review;

use super::text_wrap::wrap_text;

/// Placeholder message when no review is selected.
const NO_SELECTION_PLACEHOLDER: &str = "(No review selected)";

/// Placeholder shown instead of an empty description.
const NO_DESCRIPTION_PLACEHOLDER: &str = "(No description)";

/// Context for rendering the review detail view.
#[derive(Debug, Clone)]
pub struct ReviewDetailViewContext<'a> {
    /// The selected review to display, if any.
    pub review: Option<&'a Review>,
    /// Maximum width for text wrapping.
    pub max_width: usize,
    /// Maximum height in rows for the pane (0 = unlimited).
    pub max_height: usize,
}

/// Component for displaying a single review in full.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewDetailComponent;

impl ReviewDetailComponent {
    /// Creates a new review detail component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the review detail as a string.
    ///
    /// Returns a separator line, the review header (name and score), and
    /// the wrapped description. Output is truncated to `max_height` rows
    /// when a limit is given.
    #[must_use]
    pub fn view(ctx: &ReviewDetailViewContext<'_>) -> String {
        let Some(review) = ctx.review else {
            return format!("{NO_SELECTION_PLACEHOLDER}\n");
        };

        let mut output = String::new();

        output.push_str(&render_separator(ctx.max_width));
        output.push('\n');
        output.push_str(&review.name);
        output.push('\n');
        output.push_str(&format!("Score: {}\n", review.score));

        if review.description.trim().is_empty() {
            output.push_str(NO_DESCRIPTION_PLACEHOLDER);
            output.push('\n');
        } else {
            output.push_str(&wrap_text(&review.description, ctx.max_width));
            output.push('\n');
        }

        if ctx.max_height > 0 {
            truncate_to_height(&mut output, ctx.max_height);
        }

        output
    }
}

/// Renders a horizontal separator line.
fn render_separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Truncates output to a maximum number of rows, marking the cut with "...".
fn truncate_to_height(output: &mut String, max_height: usize) {
    if output.lines().count() <= max_height {
        return;
    }

    let kept: Vec<&str> = output.lines().take(max_height.saturating_sub(1)).collect();
    let mut truncated = kept.join("\n");
    truncated.push_str("\n...\n");
    *output = truncated;
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use crate::model::{Review, ReviewBook};

    use super::{
        NO_DESCRIPTION_PLACEHOLDER, NO_SELECTION_PLACEHOLDER, ReviewDetailComponent,
        ReviewDetailViewContext,
    };

    #[fixture]
    fn sample_review() -> Review {
        let mut book = ReviewBook::new();
        book.add(
            "Outer Wilds".to_owned(),
            "A solar system on a 22-minute loop.".to_owned(),
            10.0,
        );
        book.entries()
            .first()
            .cloned()
            .unwrap_or_else(|| panic!("book should have one entry"))
    }

    fn render(review: Option<&Review>, max_height: usize) -> String {
        let ctx = ReviewDetailViewContext {
            review,
            max_width: 40,
            max_height,
        };
        ReviewDetailComponent::view(&ctx)
    }

    #[test]
    fn view_renders_placeholder_when_no_review() {
        let output = render(None, 0);
        assert!(output.contains(NO_SELECTION_PLACEHOLDER));
    }

    #[rstest]
    fn view_includes_name_score_and_description(sample_review: Review) {
        let output = render(Some(&sample_review), 0);

        assert!(output.contains("Outer Wilds"));
        assert!(output.contains("Score: 10"));
        assert!(output.contains("22-minute loop"));
    }

    #[rstest]
    fn view_wraps_description_to_max_width(sample_review: Review) {
        let mut review = sample_review;
        review.description = "word ".repeat(30);

        let output = render(Some(&review), 0);

        for line in output.lines() {
            assert!(line.chars().count() <= 40, "line '{line}' exceeds 40 chars");
        }
    }

    #[rstest]
    fn view_truncates_to_max_height(sample_review: Review) {
        let mut review = sample_review;
        review.description = "line\n".repeat(20);

        let output = render(Some(&review), 6);

        assert!(output.lines().count() <= 6);
        assert!(output.contains("..."));
    }

    #[test]
    fn empty_description_shows_placeholder() {
        let mut book = ReviewBook::new();
        book.add("Bare".to_owned(), "   ".to_owned(), 2.0);
        let review = book
            .entries()
            .first()
            .unwrap_or_else(|| panic!("book should have one entry"));

        let output = render(Some(review), 0);

        assert!(output.contains(NO_DESCRIPTION_PLACEHOLDER));
    }
}
