//! Greedy word wrapping.

use crate::metrics::text_width;

/// Split `text` into logical lines on newlines, then wrap each to `max_width` mm.
///
/// An empty logical line yields one empty wrapped line.
pub fn wrap_text(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .flat_map(|line| wrap_line(line, max_width, font_size))
        .collect()
}

/// Wrap one logical line.
///
/// A line that already fits is kept as is. Otherwise words are appended while the
/// line stays within `max_width` and a new line is started when the next word would
/// overflow. A word wider than `max_width` on its own is broken at character
/// boundaries so no line runs past the right margin.
pub fn wrap_line(line: &str, max_width: f32, font_size: f32) -> Vec<String> {
    if text_width(line, font_size) <= max_width {
        return vec![line.to_string()];
    }

    let mut wrapped = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        if !current.is_empty() {
            let candidate = format!("{current} {word}");
            if text_width(&candidate, font_size) <= max_width {
                current = candidate;
                continue;
            }
            wrapped.push(std::mem::take(&mut current));
        }
        if text_width(word, font_size) <= max_width {
            current.push_str(word);
        } else {
            let mut pieces = break_word(word, max_width, font_size);
            current = pieces.pop().unwrap_or_default();
            wrapped.extend(pieces);
        }
    }
    if !current.is_empty() || wrapped.is_empty() {
        wrapped.push(current);
    }
    wrapped
}

/// Cut `word` into the longest prefixes that fit `max_width`, at least one
/// character each.
fn break_word(word: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for ch in word.chars() {
        piece.push(ch);
        if piece.chars().count() > 1 && text_width(&piece, font_size) > max_width {
            piece.pop();
            pieces.push(std::mem::replace(&mut piece, ch.to_string()));
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
