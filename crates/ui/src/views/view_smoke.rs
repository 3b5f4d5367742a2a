use quiz_core::model::OptionLetter;

use crate::views::CopyState;
use crate::vm::map_result;

use super::test_harness::{setup_result_harness, setup_view_harness, test_session};

#[test]
fn empty_bank_renders_placeholder() {
    let harness = setup_view_harness(None);
    let html = harness.render();
    assert!(html.contains("No questions found."), "missing placeholder in {html}");
    assert!(!html.contains("fieldset"));
}

#[test]
fn partial_answers_render_form_without_result() {
    let harness = setup_view_harness(Some(test_session(&[(1, OptionLetter::B)])));
    let html = harness.render();

    assert!(html.contains("Work style check"), "missing title in {html}");
    assert!(html.contains("1 / 2 answered (50%)"), "missing progress in {html}");
    assert!(html.contains("1. Under pressure I"));
    assert!(html.contains("ask for data"));
    assert!(html.contains("q2-D"), "missing radio ids in {html}");
    assert!(html.contains("Show result"));
    assert!(html.contains("Reset answers"));
    assert!(!html.contains("Your result"));
}

#[test]
fn complete_answers_render_result_panel() {
    let harness = setup_view_harness(Some(test_session(&[
        (1, OptionLetter::A),
        (2, OptionLetter::A),
    ])));
    let html = harness.render();

    assert!(html.contains("2 / 2 answered"), "missing progress in {html}");
    assert!(html.contains("Your result"), "missing result panel in {html}");
    assert!(html.contains("Top: D (Dominance)"));
    assert!(html.contains("Pair: D + i"));
    assert!(html.contains("Decisive and persuasive."));
    assert!(html.contains("Copy result"));
    assert!(!html.contains("Show result"));
    assert!(!html.contains("result-fallback"));
}

#[test]
fn tied_top_renders_note_and_no_pair() {
    let harness = setup_view_harness(Some(test_session(&[
        (1, OptionLetter::C),
        (2, OptionLetter::D),
    ])));
    let html = harness.render();

    assert!(html.contains("Top: S, C (tie)"), "missing tie label in {html}");
    assert!(html.contains("no pair is shown"));
    assert!(!html.contains("Pair:"));
}

#[test]
fn clipboard_failure_shows_readonly_summary() {
    let session = test_session(&[(1, OptionLetter::A), (2, OptionLetter::A)]);
    let result = map_result(&session.report());
    let harness = setup_result_harness(result, CopyState::Manual);
    let html = harness.render();

    assert!(html.contains("Clipboard unavailable"), "missing status in {html}");
    assert!(html.contains("result-fallback"), "missing textarea in {html}");
    assert!(html.contains("readonly"), "textarea not read-only in {html}");
    // Only the textarea carries the summary's "label: count" lines.
    assert!(html.contains("D (Dominance): 2"), "missing summary text in {html}");
    assert!(html.contains("Pair: D + i"));
}

#[test]
fn successful_copy_shows_status_without_fallback() {
    let session = test_session(&[(1, OptionLetter::A), (2, OptionLetter::A)]);
    let result = map_result(&session.report());
    let harness = setup_result_harness(result, CopyState::Copied);
    let html = harness.render();

    assert!(html.contains("Copied"), "missing status in {html}");
    assert!(!html.contains("result-fallback"));
    assert!(!html.contains("D (Dominance): 2"));
}
