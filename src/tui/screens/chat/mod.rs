//! Full-screen chat interface

pub mod input;
pub mod markdown;
pub mod messaging;
pub mod runner;
pub mod state;
pub mod ui;

pub use input::{InputAction, handle_input, parse_command};
pub use runner::{ChatResult, run_chat};
pub use state::{ChatMessage, ChatState, Exchange, Focus, MessageRole};
