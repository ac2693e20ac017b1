//! Optical-recognition-point and bionic-emphasis splits of display text.

/// Three-part split of a display unit around its pivot character.
///
/// Renderers hold `pivot` at a fixed horizontal position: `prefix` is laid out
/// right-aligned to its left and `suffix` left-aligned to its right.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OrpSplit<'a> {
    pub prefix: &'a str,
    pub pivot: &'a str,
    pub suffix: &'a str,
}

/// Splits `text` at `floor((chars - 1) / 2)`, stepping right off a space.
pub fn orp_split(text: &str) -> OrpSplit<'_> {
    let char_count = text.chars().count();
    if char_count == 0 {
        return OrpSplit::default();
    }

    let mut pivot_index = (char_count - 1) / 2;
    if text.chars().nth(pivot_index) == Some(' ') {
        pivot_index = (pivot_index + 1).min(char_count - 1);
    }

    // char_count > 0 guarantees the index exists.
    let Some((start, ch)) = text.char_indices().nth(pivot_index) else {
        return OrpSplit::default();
    };
    let end = start + ch.len_utf8();

    OrpSplit {
        prefix: &text[..start],
        pivot: &text[start..end],
        suffix: &text[end..],
    }
}

/// Number of leading characters of `word` rendered bold.
pub fn bionic_split(word: &str) -> usize {
    match word.chars().count() {
        0 => 0,
        1..=3 => 1,
        // ceil(len * 0.4) in integer arithmetic.
        len => (len * 2).div_ceil(5),
    }
}

/// Byte offset splitting `word` into its bold head and plain tail.
pub fn bionic_boundary(word: &str) -> usize {
    let bold = bionic_split(word);
    word.char_indices()
        .nth(bold)
        .map_or(word.len(), |(idx, _)| idx)
}

/// One piece of a display text prepared for bionic rendering.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BionicSegment<'a> {
    Word { bold: &'a str, rest: &'a str },
    Gap(&'a str),
}

/// Iterates `text` word by word so emphasis never crosses a word gap.
/// Concatenating every segment reproduces `text` exactly.
pub fn bionic_segments(text: &str) -> BionicSegments<'_> {
    BionicSegments { rest: text }
}

#[derive(Clone, Debug)]
pub struct BionicSegments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for BionicSegments<'a> {
    type Item = BionicSegment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let in_gap = first.is_whitespace();
        let end = self
            .rest
            .char_indices()
            .find(|(_, ch)| ch.is_whitespace() != in_gap)
            .map_or(self.rest.len(), |(idx, _)| idx);

        let (piece, rest) = self.rest.split_at(end);
        self.rest = rest;

        if in_gap {
            return Some(BionicSegment::Gap(piece));
        }

        let (bold, rest) = piece.split_at(bionic_boundary(piece));
        Some(BionicSegment::Word { bold, rest })
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};

    use super::*;

    fn parts(split: OrpSplit<'_>) -> (&str, &str, &str) {
        (split.prefix, split.pivot, split.suffix)
    }

    #[test]
    fn pivot_is_left_of_center() {
        assert_eq!(parts(orp_split("Reader")), ("Re", "a", "der"));
        assert_eq!(parts(orp_split("four")), ("f", "o", "ur"));
        assert_eq!(parts(orp_split("a")), ("", "a", ""));
    }

    #[test]
    fn pivot_steps_off_a_space() {
        assert_eq!(parts(orp_split("cat dog")), ("cat ", "d", "og"));
    }

    #[test]
    fn pivot_on_trailing_space_clamps_to_last_char() {
        // Chunk joins never produce these, but the clamp must still hold.
        assert_eq!(parts(orp_split("a ")), ("", "a", " "));
        assert_eq!(parts(orp_split("  ")), (" ", " ", ""));
    }

    #[test]
    fn empty_text_splits_to_empties() {
        assert_eq!(parts(orp_split("")), ("", "", ""));
    }

    #[test]
    fn pivot_counts_characters() {
        assert_eq!(parts(orp_split("señor")), ("se", "ñ", "or"));
    }

    #[test]
    fn bionic_lengths() {
        assert_eq!(bionic_split(""), 0);
        assert_eq!(bionic_split("a"), 1);
        assert_eq!(bionic_split("cat"), 1);
        assert_eq!(bionic_split("four"), 2);
        assert_eq!(bionic_split("reading"), 3);
        assert_eq!(bionic_split("extraordinary"), 6);
    }

    #[test]
    fn bionic_segments_respect_word_gaps() {
        let segments: Vec<_> = bionic_segments("reading  is fun").collect();
        assert_eq!(
            segments,
            [
                BionicSegment::Word {
                    bold: "rea",
                    rest: "ding"
                },
                BionicSegment::Gap("  "),
                BionicSegment::Word { bold: "i", rest: "s" },
                BionicSegment::Gap(" "),
                BionicSegment::Word { bold: "f", rest: "un" },
            ]
        );

        let mut rebuilt = String::new();
        for segment in segments {
            match segment {
                BionicSegment::Word { bold, rest } => {
                    rebuilt.push_str(bold);
                    rebuilt.push_str(rest);
                }
                BionicSegment::Gap(gap) => rebuilt.push_str(gap),
            }
        }
        assert_eq!(rebuilt, "reading  is fun");
    }

    #[test]
    fn bionic_boundary_is_char_aligned() {
        assert_eq!(bionic_boundary("ñandú"), "ña".len());
        assert_eq!(bionic_boundary(""), 0);
    }
}
