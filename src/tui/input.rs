//! Input handling for the TUI application.
//!
//! This module provides context-sensitive key-to-message mapping. While the
//! new-review form is open, printable characters feed the focused draft
//! field; everywhere else the same keys drive navigation and list actions.

use super::messages::AppMsg;

/// The input context the key map operates in.
///
/// Derived from the panel mode: `Editing` while the form is open, and
/// `Browsing` otherwise (the detail view shares the browsing key map).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// List or detail view: keys drive navigation and list actions.
    Browsing,
    /// New-review form: printable keys edit the focused field.
    Editing,
}

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    match context {
        InputContext::Browsing => map_browsing_key(key),
        InputContext::Editing => map_editing_key(key),
    }
}

fn map_browsing_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('n') => Some(AppMsg::OpenForm),
        KeyCode::Enter => Some(AppMsg::ToggleDetail),
        KeyCode::Char('d') | KeyCode::Delete => Some(AppMsg::DeleteReview),
        KeyCode::Esc => Some(AppMsg::CloseDetail),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

fn map_editing_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Esc => Some(AppMsg::CloseForm),
        KeyCode::Enter => Some(AppMsg::SaveDraft),
        KeyCode::Tab => Some(AppMsg::FocusNextField),
        KeyCode::BackTab => Some(AppMsg::FocusPreviousField),
        KeyCode::Backspace => Some(AppMsg::DraftBackspace),
        KeyCode::Char(character) => Some(AppMsg::DraftInsertChar(character)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::{AppMsg, InputContext, map_key_to_message};

    fn key_msg(key: KeyCode) -> bubbletea_rs::event::KeyMsg {
        bubbletea_rs::event::KeyMsg {
            key,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[rstest]
    #[case(KeyCode::Char('q'), AppMsg::Quit)]
    #[case(KeyCode::Char('j'), AppMsg::CursorDown)]
    #[case(KeyCode::Up, AppMsg::CursorUp)]
    #[case(KeyCode::Char('n'), AppMsg::OpenForm)]
    #[case(KeyCode::Enter, AppMsg::ToggleDetail)]
    #[case(KeyCode::Char('d'), AppMsg::DeleteReview)]
    #[case(KeyCode::Esc, AppMsg::CloseDetail)]
    fn browsing_keys_map_to_list_actions(#[case] key: KeyCode, #[case] expected: AppMsg) {
        let mapped = map_key_to_message(&key_msg(key), InputContext::Browsing);
        assert_eq!(mapped, Some(expected));
    }

    #[rstest]
    #[case(KeyCode::Esc, AppMsg::CloseForm)]
    #[case(KeyCode::Enter, AppMsg::SaveDraft)]
    #[case(KeyCode::Tab, AppMsg::FocusNextField)]
    #[case(KeyCode::BackTab, AppMsg::FocusPreviousField)]
    #[case(KeyCode::Backspace, AppMsg::DraftBackspace)]
    fn editing_keys_map_to_form_actions(#[case] key: KeyCode, #[case] expected: AppMsg) {
        let mapped = map_key_to_message(&key_msg(key), InputContext::Editing);
        assert_eq!(mapped, Some(expected));
    }

    #[test]
    fn editing_context_captures_printable_characters() {
        let mapped = map_key_to_message(&key_msg(KeyCode::Char('q')), InputContext::Editing);
        assert_eq!(mapped, Some(AppMsg::DraftInsertChar('q')));
    }

    #[test]
    fn unrecognised_keys_map_to_nothing() {
        assert!(map_key_to_message(&key_msg(KeyCode::F(5)), InputContext::Browsing).is_none());
        assert!(map_key_to_message(&key_msg(KeyCode::F(5)), InputContext::Editing).is_none());
    }
}
