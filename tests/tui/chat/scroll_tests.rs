//! Scroll behavior tests

use coursechat::tui::screens::chat::{ChatMessage, ChatState};

#[test]
fn test_scroll_up_saturates_at_zero() {
    let mut state = ChatState::new();
    state.scroll_offset = 0;

    state.scroll_up();
    assert_eq!(state.scroll_offset, 0);

    state.scroll_offset = 3;
    state.scroll_up();
    assert_eq!(state.scroll_offset, 2);
}

#[test]
fn test_scroll_down_respects_max() {
    let mut state = ChatState::new();
    state.scroll_offset = 4;

    state.scroll_down(5);
    assert_eq!(state.scroll_offset, 5);

    state.scroll_down(5);
    assert_eq!(state.scroll_offset, 5);
}

#[test]
fn test_new_message_jumps_to_bottom() {
    let mut state = ChatState::new();
    state.scroll_offset = 2;

    state.add_message(ChatMessage::user("hello"));

    // Sentinel clamped to the real bottom during render.
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn test_clear_resets_scroll() {
    let mut state = ChatState::new();
    state.add_message(ChatMessage::user("hello"));

    state.clear();
    assert_eq!(state.scroll_offset, 0);
}
