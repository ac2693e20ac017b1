//! Display-duration model for words and chunks.

/// Multipliers applied on top of the `60000 / wpm` base delay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayProfile {
    /// Applied when a word ends with `,`.
    pub clause_factor: f32,
    /// Applied when a word ends with one of `. ? ! ; :`.
    pub sentence_factor: f32,
    /// Words with more characters than this get `long_word_factor`.
    pub long_word_chars: usize,
    pub long_word_factor: f32,
    /// Applied to the summed delay of a multi-word chunk.
    pub chunk_factor: f32,
}

impl Default for DelayProfile {
    fn default() -> Self {
        Self {
            clause_factor: 1.5,
            sentence_factor: 2.0,
            long_word_chars: 12,
            long_word_factor: 1.2,
            chunk_factor: 0.95,
        }
    }
}

impl DelayProfile {
    pub fn base_delay_ms(&self, wpm: u16) -> f32 {
        assert!(wpm > 0, "wpm must be positive");
        60_000.0 / wpm as f32
    }

    pub fn word_delay_ms(&self, word: &str, wpm: u16) -> f32 {
        let mut delay = self.base_delay_ms(wpm);

        match word.chars().next_back() {
            Some(',') => delay *= self.clause_factor,
            Some('.' | '?' | '!' | ';' | ':') => delay *= self.sentence_factor,
            _ => {}
        }

        if word.chars().count() > self.long_word_chars {
            delay *= self.long_word_factor;
        }

        delay
    }

    /// Summed word delays scaled by `chunk_factor`. An empty chunk falls back
    /// to the base single-word delay.
    pub fn chunk_delay_ms<'a, I>(&self, words: I, wpm: u16) -> f32
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut total = 0.0f32;
        let mut any = false;
        for word in words {
            total += self.word_delay_ms(word, wpm);
            any = true;
        }

        if any {
            total * self.chunk_factor
        } else {
            self.base_delay_ms(wpm)
        }
    }
}

pub fn word_delay_ms(word: &str, wpm: u16) -> f32 {
    DelayProfile::default().word_delay_ms(word, wpm)
}

pub fn chunk_delay_ms<'a, I>(words: I, wpm: u16) -> f32
where
    I: IntoIterator<Item = &'a str>,
{
    DelayProfile::default().chunk_delay_ms(words, wpm)
}

/// Rounds a model delay to the whole milliseconds a hold is armed with.
pub fn hold_ms(delay_ms: f32) -> u64 {
    if delay_ms <= 0.0 {
        return 0;
    }
    (delay_ms + 0.5) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f32, expected: f32) -> bool {
        let diff = actual - expected;
        diff > -1e-3 && diff < 1e-3
    }

    #[test]
    fn plain_word_uses_base_delay() {
        for wpm in [1u16, 100, 300, 600, 1000] {
            assert_eq!(word_delay_ms("cat", wpm), 60_000.0 / wpm as f32);
        }
    }

    #[test]
    fn comma_scales_by_one_and_a_half() {
        assert!(close(word_delay_ms("wait,", 300), 300.0));
        assert!(close(word_delay_ms("wait,", 600), 150.0));
    }

    #[test]
    fn only_last_character_counts() {
        assert!(close(word_delay_ms("Really?!", 300), 400.0));
        assert!(close(word_delay_ms("a,b", 300), 200.0));
        assert!(close(word_delay_ms("end;", 300), 400.0));
        assert!(close(word_delay_ms("note:", 300), 400.0));
    }

    #[test]
    fn long_word_multiplier_stacks() {
        assert!(close(word_delay_ms("extraordinary", 300), 240.0));
        assert!(close(word_delay_ms("twelve_chars", 300), 200.0));
        assert!(close(word_delay_ms("extraordinary.", 300), 480.0));
    }

    #[test]
    fn long_word_counts_characters_not_bytes() {
        // 12 characters, 14 bytes.
        assert!(close(word_delay_ms("acompañadíto", 300), 200.0));
    }

    #[test]
    fn chunk_sums_then_scales() {
        let expected = (word_delay_ms("a", 300) + word_delay_ms("b", 300)) * 0.95;
        assert_eq!(chunk_delay_ms(["a", "b"], 300), expected);
        assert!(close(chunk_delay_ms(["Hello,", "world."], 600), (150.0 + 200.0) * 0.95));
    }

    #[test]
    fn empty_chunk_falls_back_to_base() {
        assert_eq!(chunk_delay_ms([], 300), 200.0);
    }

    #[test]
    fn custom_profile_is_respected() {
        let profile = DelayProfile {
            chunk_factor: 1.0,
            sentence_factor: 3.0,
            ..DelayProfile::default()
        };
        assert!(close(profile.word_delay_ms("stop.", 600), 300.0));
        assert!(close(profile.chunk_delay_ms(["a", "b"], 600), 200.0));
    }

    #[test]
    fn hold_rounds_to_nearest_millisecond() {
        assert_eq!(hold_ms(99.4), 99);
        assert_eq!(hold_ms(99.5), 100);
        assert_eq!(hold_ms(0.0), 0);
    }

    #[test]
    #[should_panic(expected = "wpm must be positive")]
    fn zero_wpm_is_rejected() {
        let _ = word_delay_ms("cat", 0);
    }
}
