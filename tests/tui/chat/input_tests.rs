//! Input handling tests

use coursechat::tui::screens::chat::{ChatMessage, ChatState, Focus, InputAction, handle_input};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_insert_char() {
    let mut state = ChatState::new();

    state.insert_char('H');
    state.insert_char('i');

    assert_eq!(state.input, "Hi");
    assert_eq!(state.cursor_pos, 2);
}

#[test]
fn test_delete_char() {
    let mut state = ChatState::new();
    state.input = "Hello".to_string();
    state.cursor_pos = 5;

    state.delete_char();

    assert_eq!(state.input, "Hell");
    assert_eq!(state.cursor_pos, 4);
}

#[test]
fn test_delete_char_at_start() {
    let mut state = ChatState::new();
    state.input = "Hello".to_string();
    state.cursor_pos = 0;

    state.delete_char();

    assert_eq!(state.input, "Hello");
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_insert_after_multibyte_char() {
    let mut state = ChatState::new();

    state.insert_char('é');
    state.insert_char('x');

    assert_eq!(state.input, "éx");
    assert_eq!(state.cursor_pos, 2);
}

#[test]
fn test_insert_mid_string_with_multibyte_prefix() {
    let mut state = ChatState::new();
    for c in "café".chars() {
        state.insert_char(c);
    }
    state.move_cursor_left();

    state.insert_char('s');

    assert_eq!(state.input, "cafsé");
    assert_eq!(state.cursor_pos, 4);
}

#[test]
fn test_backspace_over_multibyte_char() {
    let mut state = ChatState::new();
    for c in "π²".chars() {
        state.insert_char(c);
    }

    state.delete_char();
    assert_eq!(state.input, "π");
    assert_eq!(state.cursor_pos, 1);

    state.delete_char();
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_delete_forward_over_multibyte_char() {
    let mut state = ChatState::new();
    for c in "éx".chars() {
        state.insert_char(c);
    }
    state.move_cursor_home();

    state.delete_char_forward();

    assert_eq!(state.input, "x");
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_cursor_moves_across_multibyte_chars() {
    let mut state = ChatState::new();
    for c in "aéb".chars() {
        state.insert_char(c);
    }

    state.move_cursor_home();
    state.move_cursor_right();
    state.move_cursor_right();
    assert_eq!(state.cursor_pos, 2);

    state.move_cursor_end();
    assert_eq!(state.cursor_pos, 3);

    state.move_cursor_right();
    assert_eq!(state.cursor_pos, 3);
}

#[test]
fn test_move_cursor_bounds() {
    let mut state = ChatState::new();
    state.input = "Hi".to_string();
    state.cursor_pos = 0;

    state.move_cursor_left();
    assert_eq!(state.cursor_pos, 0);

    state.move_cursor_right();
    state.move_cursor_right();
    state.move_cursor_right();
    assert_eq!(state.cursor_pos, 2);

    state.move_cursor_home();
    assert_eq!(state.cursor_pos, 0);

    state.move_cursor_end();
    assert_eq!(state.cursor_pos, 2);
}

#[test]
fn test_take_input() {
    let mut state = ChatState::new();
    state.input = "Test message".to_string();
    state.cursor_pos = 5;

    let input = state.take_input();

    assert_eq!(input, "Test message");
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_enter_submits_non_blank_input() {
    let mut state = ChatState::new();
    state.input = "What is a matrix?".to_string();

    let action = handle_input(&mut state, key(KeyCode::Enter));
    assert_eq!(action, InputAction::Submit);
}

#[test]
fn test_enter_on_whitespace_input_is_noop() {
    let mut state = ChatState::new();
    state.input = "   ".to_string();

    let action = handle_input(&mut state, key(KeyCode::Enter));
    assert_eq!(action, InputAction::None);
    assert_eq!(state.input, "   ");
}

#[test]
fn test_enter_on_command_input_returns_command() {
    let mut state = ChatState::new();
    state.input = "/help".to_string();

    let action = handle_input(&mut state, key(KeyCode::Enter));
    assert_eq!(action, InputAction::Command("/help".to_string()));
    assert!(state.input.is_empty());
}

#[test]
fn test_typing_while_loading_is_ignored() {
    let mut state = ChatState::new();
    state.loading = true;

    let action = handle_input(&mut state, key(KeyCode::Char('x')));
    assert_eq!(action, InputAction::None);
    assert!(state.input.is_empty());
}

#[test]
fn test_tab_moves_focus_to_newest_rating() {
    let mut state = ChatState::new();
    state.add_message(ChatMessage::user("hey"));
    state.add_message(ChatMessage::assistant("Hi!", "hey", "Hi!"));

    let action = handle_input(&mut state, key(KeyCode::Tab));
    assert_eq!(action, InputAction::None);
    assert_eq!(state.focus, Focus::Rating(1));
}

#[test]
fn test_digit_hovers_star_when_rating_focused() {
    let mut state = ChatState::new();
    state.add_message(ChatMessage::assistant("Hi!", "hey", "Hi!"));
    state.focus_rating();

    handle_input(&mut state, key(KeyCode::Char('3')));

    let exchange = state.messages[0].exchange.as_ref().unwrap();
    assert_eq!(exchange.rating.hover, Some(3));
    assert!(exchange.rating.selected.is_none());
}

#[test]
fn test_enter_commits_hovered_star() {
    let mut state = ChatState::new();
    state.add_message(ChatMessage::assistant("Hi!", "hey", "Hi!"));
    state.focus_rating();
    handle_input(&mut state, key(KeyCode::Char('5')));

    let action = handle_input(&mut state, key(KeyCode::Enter));

    match action {
        InputAction::Rate(payload) => {
            assert_eq!(payload.rating, 5);
            assert_eq!(payload.message_id, state.messages[0].id);
        }
        other => panic!("expected Rate action, got {:?}", other),
    }
    let exchange = state.messages[0].exchange.as_ref().unwrap();
    assert_eq!(exchange.rating.selected, Some(5));
}

#[test]
fn test_esc_returns_focus_to_input() {
    let mut state = ChatState::new();
    state.add_message(ChatMessage::assistant("Hi!", "hey", "Hi!"));
    state.focus_rating();

    handle_input(&mut state, key(KeyCode::Esc));
    assert_eq!(state.focus, Focus::Input);
}

#[test]
fn test_arrows_move_hover_when_rating_focused() {
    let mut state = ChatState::new();
    state.add_message(ChatMessage::assistant("Hi!", "hey", "Hi!"));
    state.focus_rating();

    handle_input(&mut state, key(KeyCode::Right));
    handle_input(&mut state, key(KeyCode::Right));
    handle_input(&mut state, key(KeyCode::Left));

    let exchange = state.messages[0].exchange.as_ref().unwrap();
    assert_eq!(exchange.rating.hover, Some(1));
}
