pub(super) fn count_words(text: &str) -> usize {
    let mut count = 0usize;
    let mut cursor = 0usize;

    while let Some((_, next_cursor)) = next_word_at(text, cursor) {
        count += 1;
        cursor = next_cursor;
    }

    count
}

/// Returns the next whitespace-delimited word starting the scan at byte
/// `cursor`, together with the byte offset just past it.
///
/// `cursor` must sit on a char boundary.
pub(super) fn next_word_at(text: &str, cursor: usize) -> Option<(&str, usize)> {
    let rest = text.get(cursor..)?;
    let lead = rest.len() - rest.trim_start().len();
    let start = cursor + lead;
    if start >= text.len() {
        return None;
    }

    let tail = &text[start..];
    let end = tail
        .char_indices()
        .find(|(_, ch)| ch.is_whitespace())
        .map_or(text.len(), |(idx, _)| start + idx);

    Some((&text[start..end], end))
}
