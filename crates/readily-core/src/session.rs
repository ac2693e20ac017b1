//! Completed reading sessions and the persistence boundary.

use heapless::String as HeaplessString;

use crate::content::WordSequence;

pub const SESSION_SNIPPET_BYTES: usize = 96;
/// Sessions shorter than this are not reported.
pub const MIN_SESSION_SECONDS: u32 = 5;

const SNIPPET_WORDS: usize = 5;
const SNIPPET_SUFFIX: &str = "...";

/// Record handed to the history store when a reading run ends.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionRecord {
    pub word_count: usize,
    pub wpm: u16,
    pub duration_seconds: u32,
    /// First words of the text, used to identify the session.
    pub snippet: HeaplessString<SESSION_SNIPPET_BYTES>,
}

impl SessionRecord {
    pub fn is_reportable(&self) -> bool {
        self.duration_seconds >= MIN_SESSION_SECONDS
    }
}

/// Abstract sink for completed sessions (history/dashboard storage).
pub trait SessionSink {
    type Error;

    fn record(&mut self, session: &SessionRecord) -> Result<(), Self::Error>;
}

/// Sink that drops every record.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullSessionSink;

impl SessionSink for NullSessionSink {
    type Error = core::convert::Infallible;

    fn record(&mut self, _session: &SessionRecord) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// First words of `sequence` joined by single spaces, followed by `...`.
pub fn session_snippet(sequence: &WordSequence) -> HeaplessString<SESSION_SNIPPET_BYTES> {
    let mut out = HeaplessString::new();
    let budget = SESSION_SNIPPET_BYTES - SNIPPET_SUFFIX.len();

    'words: for (idx, word) in sequence.range(0, SNIPPET_WORDS).enumerate() {
        if idx > 0 {
            if out.len() + 1 > budget {
                break;
            }
            let _ = out.push(' ');
        }
        for ch in word.chars() {
            if out.len() + ch.len_utf8() > budget {
                break 'words;
            }
            let _ = out.push(ch);
        }
    }

    let _ = out.push_str(SNIPPET_SUFFIX);
    out
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;
    use crate::content::tokenize;

    #[test]
    fn snippet_takes_five_words() {
        let seq = tokenize("En un lugar de la Mancha, de cuyo nombre");
        assert_eq!(session_snippet(&seq).as_str(), "En un lugar de la...");
    }

    #[test]
    fn snippet_of_short_text_still_has_suffix() {
        let seq = tokenize("Hello");
        assert_eq!(session_snippet(&seq).as_str(), "Hello...");
    }

    #[test]
    fn snippet_is_bounded() {
        let long: String = core::iter::repeat('x').take(500).collect();
        let seq = tokenize(&long);
        let snippet = session_snippet(&seq);
        assert_eq!(snippet.len(), SESSION_SNIPPET_BYTES);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn short_sessions_are_not_reportable() {
        let mut record = SessionRecord {
            word_count: 10,
            wpm: 300,
            duration_seconds: 4,
            snippet: HeaplessString::new(),
        };
        assert!(!record.is_reportable());
        record.duration_seconds = MIN_SESSION_SECONDS;
        assert!(record.is_reportable());
    }
}
