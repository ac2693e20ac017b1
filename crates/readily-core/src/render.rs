//! App-level view models consumed by a renderer.

use crate::{content::WordSequence, split::OrpSplit};

/// Text shown in place of a unit once the sequence has been read to the end.
pub const FINISHED_TEXT: &str = "Done";

/// App-level view model consumed by a frontend renderer.
pub enum Screen<'a> {
    /// No text loaded.
    Idle { wpm: u16 },
    Reading {
        /// Display unit: one word, or a space-joined chunk.
        text: &'a str,
        orp: OrpSplit<'a>,
        /// Render `text` through [`crate::split::bionic_segments`].
        bionic: bool,
        /// Previous / next chunk, only in peripheral mode.
        prev: Option<&'a str>,
        next: Option<&'a str>,
        paused: bool,
        finished: bool,
        wpm: u16,
        /// 0.0..=100.0
        progress_pct: f32,
        words_left: usize,
        /// `current / total` with a 1-based current word.
        counter: &'a str,
        /// `mm:ss`
        elapsed: &'a str,
        /// Whole text around the reading position, when the context view is
        /// open. Its header reuses `elapsed` and `counter`.
        context: Option<ContextView<'a>>,
    },
}

/// Where a word sits relative to the reading position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WordState {
    Past,
    Current,
    Future,
}

impl WordState {
    pub fn classify(index: usize, position: usize) -> Self {
        if index < position {
            Self::Past
        } else if index == position {
            Self::Current
        } else {
            Self::Future
        }
    }
}

/// Every word of the loaded text, tagged with its [`WordState`].
#[derive(Clone, Copy, Debug)]
pub struct ContextView<'a> {
    words: &'a WordSequence,
    position: usize,
}

impl<'a> ContextView<'a> {
    pub fn new(words: &'a WordSequence, position: usize) -> Self {
        Self { words, position }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn words(&self) -> impl Iterator<Item = (&'a str, WordState)> + 'a {
        let (words, position) = (self.words, self.position);
        words
            .iter()
            .enumerate()
            .map(move |(idx, word)| (word, WordState::classify(idx, position)))
    }
}
