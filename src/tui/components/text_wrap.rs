//! Text wrapping for the detail pane.
//!
//! Description prose is wrapped at word boundaries to the pane width.
//! Leading indentation is preserved on continuation lines, and words longer
//! than the available width are hard-wrapped rather than overflowing.

/// Wraps multi-line text to a maximum width.
///
/// Each input line is wrapped independently, so empty lines (paragraph
/// breaks) survive. Character counts are used rather than byte counts to
/// handle non-ASCII text.
#[must_use]
pub fn wrap_text(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return text.to_owned();
    }

    text.lines()
        .map(|line| wrap_line(line, max_width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps a single line, preserving its leading indentation.
fn wrap_line(line: &str, max_width: usize) -> String {
    if line.chars().count() <= max_width {
        return line.to_owned();
    }

    let trimmed = line.trim_start();
    let indent: String = line.chars().take_while(|ch| ch.is_whitespace()).collect();
    let indent_width = indent.chars().count();

    // An indent wider than the pane leaves no room for words.
    if indent_width >= max_width {
        return hard_wrap(line, max_width);
    }

    let available = max_width.saturating_sub(indent_width);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in trimmed.split_whitespace() {
        let word_width = word.chars().count();

        if current_width > 0 && current_width.saturating_add(1).saturating_add(word_width) > available {
            lines.push(format!("{indent}{current}"));
            current.clear();
            current_width = 0;
        }

        if current_width > 0 {
            current.push(' ');
            current_width = current_width.saturating_add(1);
        }

        if word_width > available && current_width == 0 {
            // Hard-wrap an overlong word; the final piece stays open so
            // following words can share its line.
            let wrapped_word = hard_wrap(word, available);
            let mut pieces = wrapped_word.lines().peekable();
            while let Some(piece) = pieces.next() {
                if pieces.peek().is_some() {
                    lines.push(format!("{indent}{piece}"));
                } else {
                    current.push_str(piece);
                    current_width = piece.chars().count();
                }
            }
        } else {
            current.push_str(word);
            current_width = current_width.saturating_add(word_width);
        }
    }

    if current_width > 0 {
        lines.push(format!("{indent}{current}"));
    }

    lines.join("\n")
}

/// Hard-wraps text at exactly `max_width` characters.
fn hard_wrap(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return text.to_owned();
    }

    let mut result = String::with_capacity(text.len());
    let mut width = 0usize;

    for ch in text.chars() {
        if width >= max_width {
            result.push('\n');
            width = 0;
        }
        result.push(ch);
        width = width.saturating_add(1);
    }

    result
}
