//! `Model` trait implementation for the review journal TUI.
//!
//! Handles initialisation, update dispatch, and view rendering for
//! `ReviewApp` under the bubbletea-rs runtime.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use crate::tui::components::ReviewListViewContext;
use crate::tui::input::{InputContext, map_key_to_message};
use crate::tui::messages::AppMsg;

use super::ReviewApp;

impl Model for ReviewApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve launch configuration from module-level storage; the
        // Model trait requires init() to be a static function.
        let (title, telemetry) = crate::tui::launch_context();
        let model = Self::with_context(title, telemetry);

        (model, None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs with context-aware mapping
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message(key_msg, self.input_context());
            if let Some(app_msg) = mapped {
                return self.handle_message(&app_msg);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        // If help is shown, render overlay instead
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push_str(&self.render_summary_bar());
        output.push('\n');

        let list_height = self.calculate_list_height();
        let list_ctx = ReviewListViewContext {
            reviews: self.book.entries(),
            cursor_position: self.cursor.position,
            scroll_offset: self.cursor.offset,
            visible_height: list_height,
            selected: self.panel.selected(),
        };
        output.push_str(&self.review_list.view(&list_ctx));

        output.push_str(&self.render_pane());
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl ReviewApp {
    /// Returns the current input context for context-aware key mapping.
    pub(super) const fn input_context(&self) -> InputContext {
        if self.panel.is_form_open() {
            InputContext::Editing
        } else {
            InputContext::Browsing
        }
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Component output can leave stale trailing cells behind when rows are
    /// shorter than previous frames, especially after resize. Rows are
    /// clamped to one column less than terminal width to avoid autowrap
    /// behaviour, while still padding with spaces to clear stale cells.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = self.width.max(1) as usize;
        let safe_width = width.saturating_sub(1).max(1);
        let height = self.height.max(1) as usize;

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Pads or truncates a line to an exact display width.
///
/// Widths are measured with `unicode-width` so wide characters do not
/// overflow the terminal row.
fn pad_or_truncate_line(line: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut output = String::new();
    let mut visible_width = 0usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if char_width == 0 {
            output.push(ch);
            continue;
        }

        if visible_width.saturating_add(char_width) > width {
            break;
        }

        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    if visible_width < width {
        output.push_str(&" ".repeat(width - visible_width));
    }

    output
}
