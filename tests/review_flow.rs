//! End-to-end behaviour tests for the review journal flow.
//!
//! Drives the application model through its public message API, covering
//! the save/view/delete lifecycle and the panel state machine.

use bubbletea_rs::Model;
use rstest::{fixture, rstest};

use scorebook::tui::ReviewApp;
use scorebook::tui::messages::AppMsg;
use scorebook::tui::state::{DraftField, PanelMode};

/// Types text into the focused draft field one keystroke at a time.
fn type_text(app: &mut ReviewApp, text: &str) {
    for character in text.chars() {
        app.handle_message(&AppMsg::DraftInsertChar(character));
    }
}

/// Saves a review through the full form flow.
fn save_review(app: &mut ReviewApp, name: &str, description: &str, score: &str) {
    app.handle_message(&AppMsg::OpenForm);
    type_text(app, name);
    app.handle_message(&AppMsg::FocusNextField);
    type_text(app, description);
    app.handle_message(&AppMsg::FocusNextField);
    type_text(app, score);
    app.handle_message(&AppMsg::SaveDraft);
}

#[fixture]
fn journal() -> ReviewApp {
    let mut app = ReviewApp::new();
    save_review(&mut app, "A", "first", "1");
    save_review(&mut app, "B", "second", "2");
    app
}

#[test]
fn saving_a_draft_appends_one_entry_and_resets_the_draft() {
    let mut app = ReviewApp::new();

    save_review(&mut app, "N", "D", "5");

    assert_eq!(app.review_count(), 1);
    let entry = app
        .reviews()
        .first()
        .unwrap_or_else(|| panic!("one entry expected"));
    assert_eq!(
        (entry.name.as_str(), entry.description.as_str(), entry.score),
        ("N", "D", 5.0)
    );

    for field in [DraftField::Name, DraftField::Description, DraftField::Score] {
        assert_eq!(app.draft().field(field), "", "{field:?} should reset");
    }
}

#[test]
fn deletion_removes_exactly_one_entry_and_preserves_order() {
    let mut app = ReviewApp::new();
    save_review(&mut app, "A", "", "");
    save_review(&mut app, "B", "", "");

    // save A, save B, delete A -> collection == [B]
    app.handle_message(&AppMsg::Home);
    app.handle_message(&AppMsg::DeleteReview);

    let names: Vec<_> = app
        .reviews()
        .iter()
        .map(|review| review.name.as_str())
        .collect();
    assert_eq!(names, vec!["B"]);

    // Deleting from an empty book leaves the collection unchanged.
    let mut empty = ReviewApp::new();
    empty.handle_message(&AppMsg::DeleteReview);
    assert_eq!(empty.review_count(), 0);
}

#[rstest]
fn toggling_a_review_twice_returns_to_the_list_panel(mut journal: ReviewApp) {
    journal.handle_message(&AppMsg::Home);
    let before_mode = journal.mode();

    journal.handle_message(&AppMsg::ToggleDetail);
    assert!(matches!(journal.mode(), PanelMode::Viewing(_)));

    journal.handle_message(&AppMsg::ToggleDetail);
    assert_eq!(journal.mode(), before_mode);
    assert_eq!(journal.mode(), PanelMode::Browsing);
}

#[rstest]
fn selecting_a_review_clears_a_concurrently_open_form(mut journal: ReviewApp) {
    journal.handle_message(&AppMsg::OpenForm);
    assert_eq!(journal.mode(), PanelMode::Editing);

    journal.handle_message(&AppMsg::ToggleDetail);

    assert!(matches!(journal.mode(), PanelMode::Viewing(_)));
}

#[rstest]
fn opening_the_form_clears_an_existing_selection(mut journal: ReviewApp) {
    journal.handle_message(&AppMsg::ToggleDetail);
    assert!(journal.selected_review().is_some());

    journal.handle_message(&AppMsg::OpenForm);

    assert_eq!(journal.mode(), PanelMode::Editing);
    assert!(journal.selected_review().is_none());
}

#[rstest]
fn deleting_the_selected_review_clears_the_selection(mut journal: ReviewApp) {
    journal.handle_message(&AppMsg::Home);
    journal.handle_message(&AppMsg::ToggleDetail);

    journal.handle_message(&AppMsg::DeleteReview);

    assert_eq!(journal.mode(), PanelMode::Browsing);
    assert!(journal.selected_review().is_none());
}

#[test]
fn insertion_order_survives_mixed_saves_and_deletes() {
    let mut app = ReviewApp::new();
    save_review(&mut app, "A", "", "");
    save_review(&mut app, "B", "", "");
    save_review(&mut app, "C", "", "");

    // Delete the middle entry, then append another.
    app.handle_message(&AppMsg::Home);
    app.handle_message(&AppMsg::CursorDown);
    app.handle_message(&AppMsg::DeleteReview);
    save_review(&mut app, "D", "", "");

    let names: Vec<_> = app
        .reviews()
        .iter()
        .map(|review| review.name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "C", "D"]);
}

#[rstest]
#[case("8.5", 8.5)]
#[case("ten", 0.0)]
#[case("", 0.0)]
fn score_text_is_coerced_at_the_save_boundary(#[case] text: &str, #[case] expected: f64) {
    let mut app = ReviewApp::new();

    save_review(&mut app, "Scored", "", text);

    let entry = app
        .reviews()
        .first()
        .unwrap_or_else(|| panic!("one entry expected"));
    assert_eq!(entry.score, expected);
}

#[test]
fn every_panel_mode_renders_a_normalised_frame() {
    let mut app = ReviewApp::new();
    app.handle_message(&AppMsg::WindowResized {
        width: 60,
        height: 16,
    });

    // Browsing with an empty book.
    assert_eq!(app.view().lines().count(), 16);

    // Editing.
    app.handle_message(&AppMsg::OpenForm);
    type_text(&mut app, "Frame");
    assert_eq!(app.view().lines().count(), 16);

    // Viewing.
    app.handle_message(&AppMsg::SaveDraft);
    app.handle_message(&AppMsg::ToggleDetail);
    let frame = app.view();
    assert_eq!(frame.lines().count(), 16);
    assert!(frame.contains("Frame"));

    // Help overlay.
    app.handle_message(&AppMsg::ToggleHelp);
    assert_eq!(app.view().lines().count(), 16);
}

#[test]
fn structurally_identical_reviews_delete_independently() {
    let mut app = ReviewApp::new();
    save_review(&mut app, "Twin", "same", "5");
    save_review(&mut app, "Twin", "same", "5");

    app.handle_message(&AppMsg::Home);
    app.handle_message(&AppMsg::DeleteReview);

    assert_eq!(app.review_count(), 1, "only one twin is removed");
}
