//! Sentence-aware text reflow
//!
//! Assistant replies often arrive as one long paragraph. `reflow` inserts
//! line breaks after sentence boundaries so lines stay within a budget,
//! without ever splitting inside a sentence.

/// Split `text` into sentences.
///
/// A sentence is a run of characters up to and including a run of terminal
/// punctuation (`.`, `!`, `?`). A trailing remainder without terminal
/// punctuation forms one final sentence. Sentences are trimmed; empty
/// fragments are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev_was_terminator = false;

    for (idx, ch) in text.char_indices() {
        let is_terminator = matches!(ch, '.' | '!' | '?');
        if prev_was_terminator && !is_terminator {
            let sentence = text[start..idx].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = idx;
        }
        prev_was_terminator = is_terminator;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Re-wrap `text` so no emitted line exceeds `max_len` characters, except
/// when a single sentence alone exceeds the budget; such a sentence keeps
/// its own line intact. Sentence separators collapse to single spaces and
/// lines carry no trailing whitespace. Empty input yields empty output.
pub fn reflow(text: &str, max_len: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for sentence in split_sentences(text) {
        let sentence_len = sentence.chars().count();
        // +1 accounts for the separator space the sentence would bring.
        if line_len > 0 && line_len + 1 + sentence_len > max_len {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(sentence);
        line_len += sentence_len;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}
