//! Review list component.
//!
//! Renders a scrollable window over the review book with a cursor marker
//! and a selection marker. Each row is produced by a stateless item
//! renderer that shows the review's name, score, and a truncated
//! single-line description preview.

use crate::model::{Review, ReviewId};

/// Default visible height for the review list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 10;

/// Maximum characters of description shown in a list row.
const PREVIEW_LENGTH: usize = 40;

/// Context for rendering the review list view.
///
/// Bundles the data needed to render the list without requiring per-frame
/// allocations beyond the output string itself.
#[derive(Debug, Clone)]
pub struct ReviewListViewContext<'a> {
    /// All reviews in insertion order.
    pub reviews: &'a [Review],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of rows scrolled from the top.
    pub scroll_offset: usize,
    /// Maximum visible height in rows.
    pub visible_height: usize,
    /// The review currently shown in the detail pane, if any.
    pub selected: Option<ReviewId>,
}

/// Component for displaying the review list.
#[derive(Debug, Clone)]
pub struct ReviewListComponent {
    /// Visible height in rows (for scrolling calculations).
    visible_height: usize,
}

impl Default for ReviewListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewListComponent {
    /// Creates a new review list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the review list as a string.
    ///
    /// Only rows within the visible window (scroll offset plus visible
    /// height) are rendered.
    #[must_use]
    pub fn view(&self, ctx: &ReviewListViewContext<'_>) -> String {
        if ctx.reviews.is_empty() {
            return "  No reviews yet. Press 'n' to add one.\n".to_owned();
        }

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let start = ctx.scroll_offset;
        let end = start.saturating_add(visible_height).min(ctx.reviews.len());

        let mut output = String::new();
        for (index, review) in ctx
            .reviews
            .iter()
            .enumerate()
            .skip(start)
            .take(end.saturating_sub(start))
        {
            let cursor = if index == ctx.cursor_position { ">" } else { " " };
            let marker = if ctx.selected == Some(review.id) {
                "*"
            } else {
                " "
            };
            output.push_str(&Self::format_review_line(review, cursor, marker));
            output.push('\n');
        }

        output
    }

    /// Formats a single review row for display.
    ///
    /// Stateless: purely a function of the review and the two markers
    /// supplied by the container.
    #[must_use]
    pub fn format_review_line(review: &Review, cursor: &str, marker: &str) -> String {
        let preview = truncate_preview(&review.description, PREVIEW_LENGTH);
        if preview.is_empty() {
            format!("{cursor}{marker} {} [{}]", review.name, review.score)
        } else {
            format!(
                "{cursor}{marker} {} [{}]  {preview}",
                review.name, review.score
            )
        }
    }
}

/// Truncates description text to a single-line preview.
fn truncate_preview(description: &str, max_len: usize) -> String {
    let first_line = description.lines().next().unwrap_or("").trim();

    if first_line.chars().count() <= max_len {
        return first_line.to_owned();
    }

    let kept: String = first_line
        .chars()
        .take(max_len.saturating_sub(3))
        .collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use crate::model::{Review, ReviewBook};

    use super::{ReviewListComponent, ReviewListViewContext, truncate_preview};

    #[fixture]
    fn two_reviews() -> Vec<Review> {
        let mut book = ReviewBook::new();
        book.add("Hades".to_owned(), "Roguelite with a story".to_owned(), 9.0);
        book.add("Rymdkapsel".to_owned(), "Minimalist strategy".to_owned(), 7.5);
        book.entries().to_vec()
    }

    fn context<'a>(reviews: &'a [Review]) -> ReviewListViewContext<'a> {
        ReviewListViewContext {
            reviews,
            cursor_position: 0,
            scroll_offset: 0,
            visible_height: 10,
            selected: None,
        }
    }

    #[test]
    fn view_shows_placeholder_when_empty() {
        let component = ReviewListComponent::new();
        let output = component.view(&context(&[]));
        assert!(output.contains("No reviews yet"));
    }

    #[rstest]
    fn view_marks_cursor_row(two_reviews: Vec<Review>) {
        let component = ReviewListComponent::new();
        let ctx = ReviewListViewContext {
            cursor_position: 1,
            ..context(&two_reviews)
        };

        let output = component.view(&ctx);

        assert!(output.contains("   Hades"), "first row has no cursor");
        assert!(output.contains(">  Rymdkapsel"), "second row has cursor");
    }

    #[rstest]
    fn view_marks_selected_row(two_reviews: Vec<Review>) {
        let selected = two_reviews.first().map(|review| review.id);
        let component = ReviewListComponent::new();
        let ctx = ReviewListViewContext {
            selected,
            ..context(&two_reviews)
        };

        let output = component.view(&ctx);

        assert!(output.contains(">* Hades"));
    }

    #[rstest]
    fn view_windows_rows_by_scroll_offset(two_reviews: Vec<Review>) {
        let component = ReviewListComponent::new();
        let ctx = ReviewListViewContext {
            scroll_offset: 1,
            visible_height: 1,
            cursor_position: 1,
            ..context(&two_reviews)
        };

        let output = component.view(&ctx);

        assert!(!output.contains("Hades"));
        assert!(output.contains("Rymdkapsel"));
    }

    #[rstest]
    fn format_review_line_includes_name_score_and_preview(two_reviews: Vec<Review>) {
        let first = two_reviews
            .first()
            .unwrap_or_else(|| panic!("fixture should have entries"));
        let line = ReviewListComponent::format_review_line(first, " ", " ");

        assert!(line.contains("Hades"));
        assert!(line.contains("[9]"));
        assert!(line.contains("Roguelite with a story"));
    }

    #[test]
    fn truncate_preview_shortens_long_text() {
        let long_text = "a description that keeps going well past the preview budget";
        let preview = truncate_preview(long_text, 20);

        assert_eq!(preview.chars().count(), 20);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn truncate_preview_takes_first_line_only() {
        let preview = truncate_preview("first line\nsecond line", 40);
        assert_eq!(preview, "first line");
    }
}
