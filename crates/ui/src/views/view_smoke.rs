use kids_core::model::{AppState, GameKind, STORAGE_KEY};
use storage::repository::DocumentRepository;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_state};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_game_cards() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();

    for title in ["Colors &amp; Shapes", "Counting", "Letters", "Kindergarten Prep"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert_eq!(html.matches("0 done · 0 stars").count(), 4, "{html}");
    assert!(html.contains("Voice: On"), "{html}");
    assert!(html.contains("Test Voice"), "{html}");
    assert!(
        html.contains("Voice may not be available on this device."),
        "{html}"
    );
    assert!(!html.contains("Reset stars and progress"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_loaded_progress() {
    let mut state = AppState::default();
    state.record_correct(GameKind::Letters);
    state.record_correct(GameKind::Letters);
    state.toggle_voice();

    let mut harness = setup_view_harness_with_state(ViewKind::Home, state);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("2 done · 2 stars"), "{html}");
    assert!(html.contains("Voice: Off"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn colors_view_smoke_renders_four_shapes() {
    let mut harness = setup_view_harness(ViewKind::Colors);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Tap the "), "{html}");
    assert_eq!(html.matches("class=\"big-choice\"").count(), 4, "{html}");
    assert!(html.contains("Stars: ☆☆☆☆☆☆☆☆☆☆"), "{html}");
    assert!(html.contains("Home"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn counting_view_smoke_renders_board_and_numbers() {
    let mut state = AppState::default();
    state.record_correct(GameKind::Counting);

    let mut harness = setup_view_harness_with_state(ViewKind::Counting, state);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("How many do you see?"), "{html}");
    assert!(html.contains("counting-items"), "{html}");
    assert_eq!(html.matches("class=\"choice-btn\"").count(), 4, "{html}");
    assert!(html.contains("Stars: ★☆☆☆☆☆☆☆☆☆"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn letters_view_smoke_renders_prompt() {
    let mut harness = setup_view_harness(ViewKind::Letters);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Find the letter "), "{html}");
    assert_eq!(html.matches("class=\"choice-btn\"").count(), 4, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn prep_view_smoke_renders_first_step() {
    let mut harness = setup_view_harness(ViewKind::Prep);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Kindergarten Prep: Colors."), "{html}");
    assert!(html.contains("Find the color I ask for."), "{html}");
    assert!(html.contains("Start"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn prep_view_clamps_and_saves_stale_step() {
    let mut state = AppState::default();
    state.progress.prep.step_index = 99;

    let mut harness = setup_view_harness_with_state(ViewKind::Prep, state);
    harness.rebuild();
    // One pass runs the clamp, the next runs the save it schedules.
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Kindergarten Prep: Letters."), "{html}");

    let stored = harness.progress.load().await.expect("load");
    assert_eq!(stored.progress.prep.step_index, 2);
    let raw = harness
        .storage
        .documents
        .get_document(STORAGE_KEY)
        .await
        .expect("get");
    assert!(raw.is_some());
}
