use wasm_bindgen_test::*;

use loadboard_wasm::{get_listing_count, validate_form_field, LoadBoard};

fn ready_board() -> LoadBoard {
    #[cfg(target_arch = "wasm32")]
    loadboard_wasm::start();

    LoadBoard::new(Some(0)).unwrap_or_else(|_| panic!("embedded fixture should load"))
}

#[wasm_bindgen_test]
fn embedded_fixture_has_listings() {
    let count = get_listing_count();
    assert!(count > 0, "expected at least one listing, got {count}");
}

#[wasm_bindgen_test]
fn delayed_board_starts_loading() {
    let mut board = LoadBoard::new(Some(60_000)).unwrap_or_else(|_| panic!("fixture"));
    assert!(board.is_loading());
    assert!(!board.poll());
    assert!(board.finish_loading());
    assert!(!board.is_loading());
}

#[wasm_bindgen_test]
fn keyboard_commits_first_suggestion() {
    let mut board = ready_board();
    board.set_query("lah");
    assert_eq!(board.suggestions(), vec!["Lahore".to_string()]);
    assert_eq!(board.active_index(), -1);

    assert!(!board.key_down("ArrowDown"));
    assert_eq!(board.active_index(), 0);
    assert!(board.key_down("Enter"));
    assert_eq!(board.query(), "Lahore");
    assert!(board.suggestions().is_empty());
}

#[wasm_bindgen_test]
fn sort_and_page_are_clamped() {
    let mut board = ready_board();
    board.set_sort("weight-asc");
    assert_eq!(board.sort(), "weight-asc");
    board.set_sort("bogus");
    assert_eq!(board.sort(), "none");

    let total = board.total_pages();
    assert_eq!(board.set_page(total + 10), total);
    assert_eq!(board.set_page(0), 1);
}

#[wasm_bindgen_test]
fn booking_round_trip() {
    let mut board = ready_board();
    let message = board.book("1").unwrap_or_default();
    assert!(message.starts_with("Are you sure"), "got {message}");
    assert_eq!(board.booking_state("1"), "pendingConfirmation");

    assert!(board.confirm_booking("1"));
    assert_eq!(board.booking_state("1"), "booked");
    assert_eq!(board.pending_notifications(), 1);
    assert!(board.book("1").is_none());
}

#[wasm_bindgen_test]
fn view_json_reflects_session() {
    let mut board = ready_board();
    board.set_query("zzz-no-such-city");
    let json = board.view_json().unwrap_or_default();
    assert!(json.contains("\"noResults\":true"), "got {json}");
}

#[wasm_bindgen_test]
fn form_validation_messages() {
    assert_eq!(
        validate_form_field("email", "nope").as_deref(),
        Some("Invalid email format.")
    );
    assert_eq!(validate_form_field("phone", "03001234567"), None);
}
