//! Text helpers shared by the extraction heuristics.

/// Caps `text` at `max_len` characters.
///
/// Longer input is cut at `max_len` characters, trimmed, and suffixed with a
/// single `…`; shorter input is only trimmed. Empty input yields an empty string.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}…", text[..cut].trim()),
        None => text.trim().to_string(),
    }
}

/// Splits after `.`, `?` or `!` wherever a whitespace run follows; the run is consumed.
///
/// Best-effort segmentation only: abbreviations and decimals are not special-cased.
/// Pieces are returned untrimmed and may be empty (e.g. trailing whitespace).
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch.is_whitespace() && matches!(prev, Some('.' | '?' | '!')) {
            pieces.push(&text[start..idx]);
            let mut end = idx + ch.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = next_idx + next.len_utf8();
                chars.next();
            }
            start = end;
            prev = None;
            continue;
        }
        prev = Some(ch);
    }

    pieces.push(&text[start..]);
    pieces
}

/// Lines split on `\n` / `\r\n`, trimmed, empties dropped.
pub fn trimmed_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}
