//! Reusable TUI widgets

pub mod rating;

pub use rating::{MAX_RATING, RatingWidget, TOOLTIPS};
