//! Display sequences for RSVP rendering.

mod text_utils;

use alloc::{string::String, vec::Vec};

use text_utils::{count_words, next_word_at};

/// Byte range of one word inside the owned source text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct WordSpan {
    start: usize,
    end: usize,
}

/// Ordered, immutable list of display words produced by [`tokenize`].
///
/// Words keep their punctuation and never contain whitespace. The source text
/// is owned once and every word is a slice of it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordSequence {
    text: String,
    spans: Vec<WordSpan>,
}

/// Splits `text` on runs of whitespace. Total over all input; empty or blank
/// text yields an empty sequence.
pub fn tokenize(text: &str) -> WordSequence {
    let mut spans = Vec::with_capacity(count_words(text));
    let mut cursor = 0usize;

    while let Some((word, next_cursor)) = next_word_at(text, cursor) {
        spans.push(WordSpan {
            start: next_cursor - word.len(),
            end: next_cursor,
        });
        cursor = next_cursor;
    }

    WordSequence {
        text: String::from(text),
        spans,
    }
}

impl WordSequence {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            spans: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        let span = self.spans.get(index)?;
        self.text.get(span.start..span.end)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.range(0, self.len())
    }

    /// Words in `[start, start + count)`, clipped to the sequence.
    pub fn range(&self, start: usize, count: usize) -> impl Iterator<Item = &str> + '_ {
        let start = start.min(self.len());
        let end = start.saturating_add(count).min(self.len());
        self.spans[start..end]
            .iter()
            .map(|span| &self.text[span.start..span.end])
    }

    /// Space-joined text of the words in `[start, start + count)`.
    pub fn join(&self, start: usize, count: usize) -> String {
        let mut out = String::new();
        for (idx, word) in self.range(start, count).enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            out.push_str(word);
        }
        out
    }

    pub fn source_text(&self) -> &str {
        &self.text
    }
}

impl<'a> FromIterator<&'a str> for WordSequence {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut joined = String::new();
        for word in iter {
            if !joined.is_empty() {
                joined.push(' ');
            }
            joined.push_str(word);
        }
        tokenize(&joined)
    }
}
