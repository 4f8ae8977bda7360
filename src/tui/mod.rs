pub mod screens;
pub mod terminal;
pub mod theme;
pub mod widgets;
