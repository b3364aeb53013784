//! Behavioral tests for the header scroll style and mobile menu

use crate::config::SCROLL_THRESHOLD_PX;
use crate::models::HeaderState;

// ============================================================================
// MOBILE MENU BEHAVIORS
// ============================================================================

#[test]
fn given_closed_menu_when_button_pressed_then_opens() {
    let mut state = HeaderState::default();
    state.toggle_menu();
    assert!(state.is_menu_open());
}

#[test]
fn given_menu_when_button_pressed_repeatedly_then_alternates() {
    let mut state = HeaderState::default();
    for press in 1..=6 {
        state.toggle_menu();
        assert_eq!(state.is_menu_open(), press % 2 == 1, "after {press} presses");
    }
}

#[test]
fn given_open_menu_when_navigating_then_closes() {
    let mut state = HeaderState::default();
    state.toggle_menu();

    state.on_navigate();

    assert!(!state.is_menu_open());
}

#[test]
fn given_closed_menu_when_navigating_then_stays_closed() {
    let mut state = HeaderState::default();
    state.on_navigate();
    assert!(!state.is_menu_open());
}

// ============================================================================
// SCROLL STYLE BEHAVIORS
// ============================================================================

#[test]
fn given_top_of_page_when_scrolling_past_threshold_then_header_solid() {
    let mut state = HeaderState::default();
    state.on_scroll(SCROLL_THRESHOLD_PX + 1.0, SCROLL_THRESHOLD_PX);
    assert!(state.is_scrolled());
}

#[test]
fn given_scrolled_when_returning_to_top_then_header_transparent() {
    let mut state = HeaderState::default();
    state.on_scroll(600.0, SCROLL_THRESHOLD_PX);
    state.on_scroll(5.0, SCROLL_THRESHOLD_PX);
    assert!(!state.is_scrolled());
}
