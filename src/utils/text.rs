//! Width fitting for list rows. Counts chars, not bytes, so catalog names with
//! accents or symbols are never split mid-character.

/// Cuts `input` to at most `max_chars` chars, ending in `…` when shortened.
pub fn truncate_with_ellipsis(input: &str, max_chars: usize) -> String {
    match max_chars {
        0 => String::new(),
        _ if input.chars().count() <= max_chars => input.to_string(),
        1 => ".".to_string(),
        _ => {
            let cut = input
                .char_indices()
                .nth(max_chars - 1)
                .map_or(input.len(), |(idx, _)| idx);
            format!("{}…", &input[..cut])
        }
    }
}
