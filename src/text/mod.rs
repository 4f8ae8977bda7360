pub mod reflow;

pub use reflow::{reflow, split_sentences};
