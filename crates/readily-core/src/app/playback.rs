//! Timed playback state machine.
//!
//! Timers are deadlines polled through [`PlaybackController::tick`]. Arming a
//! hold always replaces the previous deadline, so at most one hold is ever
//! pending; the elapsed-seconds ticker runs beside it on its own deadline.

use alloc::string::String;

use log::debug;

use crate::{
    content::WordSequence,
    render::WordState,
    session::{SessionRecord, session_snippet},
    timing::{DelayProfile, hold_ms},
};

use super::TickResult;

const SECOND_MS: u64 = 1_000;

/// Word index for `percent` of a sequence whose last index is `last`.
///
/// The product is taken in `f64` so indices past 2^24 stay exact. Truncation
/// floors the non-negative product and NaN maps to 0.
pub fn seek_target(percent: f32, last: usize) -> usize {
    let percent = f64::from(percent).clamp(0.0, 100.0);
    let target = (percent / 100.0 * last as f64) as usize;
    target.min(last)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlayState {
    Stopped,
    Playing,
}

/// Externally visible controller state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackState {
    /// No sequence loaded.
    Idle,
    /// Sequence present, not advancing. May be finished.
    Stopped,
    /// A hold is armed.
    Playing,
}

/// Speed and chunking read whenever a hold is armed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlaybackSettings {
    pub wpm: u16,
    pub chunk_mode: bool,
    pub chunk_size: u8,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            wpm: 300,
            chunk_mode: false,
            chunk_size: 2,
        }
    }
}

impl PlaybackSettings {
    pub fn effective_chunk_size(&self) -> usize {
        if self.chunk_mode {
            self.chunk_size as usize
        } else {
            1
        }
    }
}

pub struct PlaybackController {
    sequence: WordSequence,
    position: usize,
    play_state: PlayState,
    settings: PlaybackSettings,
    profile: DelayProfile,
    hold_deadline_ms: Option<u64>,
    next_second_ms: Option<u64>,
    elapsed_secs: u32,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(PlaybackSettings::default(), DelayProfile::default())
    }
}

impl PlaybackController {
    pub fn new(settings: PlaybackSettings, profile: DelayProfile) -> Self {
        assert!(settings.wpm > 0, "wpm must be positive");
        assert!(settings.chunk_size > 0, "chunk size must be at least 1");

        Self {
            sequence: WordSequence::new(),
            position: 0,
            play_state: PlayState::Stopped,
            settings,
            profile,
            hold_deadline_ms: None,
            next_second_ms: None,
            elapsed_secs: 0,
        }
    }

    /// Replaces the sequence and rewinds. An empty sequence is rejected.
    pub fn load(&mut self, sequence: WordSequence) -> bool {
        if sequence.is_empty() {
            debug!("playback: load rejected empty sequence");
            return false;
        }

        self.cancel_timers();
        self.play_state = PlayState::Stopped;
        self.sequence = sequence;
        self.position = 0;
        self.elapsed_secs = 0;
        debug!("playback: loaded words={}", self.sequence.len());
        true
    }

    /// Drops the sequence and returns to [`PlaybackState::Idle`].
    pub fn unload(&mut self) {
        self.cancel_timers();
        self.play_state = PlayState::Stopped;
        self.sequence = WordSequence::new();
        self.position = 0;
        self.elapsed_secs = 0;
    }

    /// Flips between stopped and playing. Starting is refused when there is
    /// nothing left to play; returns whether the state changed.
    pub fn toggle_play(&mut self, now_ms: u64) -> bool {
        match self.play_state {
            PlayState::Playing => self.pause(),
            PlayState::Stopped => {
                if self.is_finished() {
                    debug!(
                        "playback: play ignored position={}/{}",
                        self.position,
                        self.len()
                    );
                    return false;
                }

                self.play_state = PlayState::Playing;
                self.next_second_ms = Some(now_ms + SECOND_MS);
                self.arm_hold(now_ms);
                debug!(
                    "playback: playing position={}/{} wpm={} chunk={}",
                    self.position,
                    self.len(),
                    self.settings.wpm,
                    self.effective_chunk_size()
                );
                true
            }
        }
    }

    /// Stops a running playback; returns whether it was running.
    pub fn pause(&mut self) -> bool {
        if self.play_state != PlayState::Playing {
            return false;
        }
        self.stop();
        debug!("playback: paused position={}/{}", self.position, self.len());
        true
    }

    /// Poll entry point: fires the elapsed ticker and an expired hold.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        let mut result = TickResult::NoRender;

        // Seconds before a due hold count first; the hold may stop playback.
        if let Some(deadline) = self.hold_deadline_ms
            && now_ms >= deadline
        {
            if self.advance_elapsed(deadline) {
                result = TickResult::RenderRequested;
            }
            if self.expire_hold(now_ms) {
                result = TickResult::RenderRequested;
            }
        }

        if self.advance_elapsed(now_ms) {
            result = TickResult::RenderRequested;
        }

        result
    }

    /// Counts every whole second due at or before `until_ms`. The ticker is
    /// only armed while playing.
    fn advance_elapsed(&mut self, until_ms: u64) -> bool {
        let mut advanced = false;
        while let Some(deadline) = self.next_second_ms {
            if until_ms < deadline {
                break;
            }
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
            self.next_second_ms = Some(deadline + SECOND_MS);
            advanced = true;
        }
        advanced
    }

    /// Handles expiry of the armed hold: advances by the effective chunk size
    /// and re-arms, or stops at the end. No-op unless playing.
    pub fn expire_hold(&mut self, now_ms: u64) -> bool {
        self.hold_deadline_ms = None;
        if self.play_state != PlayState::Playing || self.is_finished() {
            return false;
        }

        let next = self.position + self.effective_chunk_size();
        if next >= self.len() {
            self.position = next.min(self.len());
            self.stop();
            debug!("playback: finished words={}", self.len());
        } else {
            self.position = next;
            self.arm_hold(now_ms);
        }
        true
    }

    /// Jumps to `percent` of the sequence without changing the play state.
    pub fn seek(&mut self, percent: f32, now_ms: u64) {
        if self.sequence.is_empty() {
            return;
        }

        self.hold_deadline_ms = None;
        self.position = seek_target(percent, self.len() - 1);
        debug!("playback: seek percent={} position={}", percent, self.position);

        if self.play_state == PlayState::Playing {
            self.arm_hold(now_ms);
        }
    }

    /// Rewinds to the first word and clears elapsed time. A running playback
    /// keeps running from the start.
    pub fn restart(&mut self, now_ms: u64) {
        self.hold_deadline_ms = None;
        self.position = 0;
        self.elapsed_secs = 0;
        debug!("playback: restart words={}", self.len());

        if self.play_state == PlayState::Playing {
            self.next_second_ms = Some(now_ms + SECOND_MS);
            self.arm_hold(now_ms);
        }
    }

    pub fn set_wpm(&mut self, wpm: u16) {
        assert!(wpm > 0, "wpm must be positive");
        self.settings.wpm = wpm;
    }

    pub fn set_chunk_mode(&mut self, enabled: bool) {
        self.settings.chunk_mode = enabled;
    }

    pub fn set_chunk_size(&mut self, size: u8) {
        assert!(size > 0, "chunk size must be at least 1");
        self.settings.chunk_size = size;
    }

    pub fn state(&self) -> PlaybackState {
        if self.sequence.is_empty() {
            PlaybackState::Idle
        } else if self.play_state == PlayState::Playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Stopped
        }
    }

    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    pub fn is_playing(&self) -> bool {
        self.play_state == PlayState::Playing
    }

    pub fn settings(&self) -> PlaybackSettings {
        self.settings
    }

    pub fn sequence(&self) -> &WordSequence {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.len()
    }

    pub fn words_left(&self) -> usize {
        self.len().saturating_sub(self.position)
    }

    pub fn effective_chunk_size(&self) -> usize {
        self.settings.effective_chunk_size()
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// Deadline of the pending hold, if one is armed.
    pub fn hold_deadline_ms(&self) -> Option<u64> {
        self.hold_deadline_ms
    }

    pub fn progress_percent(&self) -> f32 {
        let len = self.len();
        if len <= 1 {
            return 0.0;
        }
        let last = len - 1;
        self.position.min(last) as f32 / last as f32 * 100.0
    }

    /// Classifies word `index` against the reading position. Once finished,
    /// every word is past.
    pub fn word_state(&self, index: usize) -> WordState {
        WordState::classify(index, self.position)
    }

    /// Words displayed at the current position.
    pub fn current_chunk(&self) -> impl Iterator<Item = &str> + '_ {
        self.sequence
            .range(self.position, self.effective_chunk_size())
    }

    /// Space-joined display text of the chunk starting at `start`.
    pub fn chunk_text(&self, start: usize) -> Option<String> {
        if start >= self.len() {
            return None;
        }
        Some(self.sequence.join(start, self.effective_chunk_size()))
    }

    pub fn prev_chunk_text(&self) -> Option<String> {
        let size = self.effective_chunk_size();
        let start = self.position.checked_sub(size)?;
        Some(self.sequence.join(start, self.position - start))
    }

    pub fn next_chunk_text(&self) -> Option<String> {
        self.chunk_text(self.position + self.effective_chunk_size())
    }

    /// Hold duration of the unit at the current position before rounding.
    pub fn current_delay_ms(&self) -> f32 {
        let wpm = self.settings.wpm;
        if self.settings.chunk_mode {
            self.profile.chunk_delay_ms(self.current_chunk(), wpm)
        } else {
            match self.sequence.get(self.position) {
                Some(word) => self.profile.word_delay_ms(word, wpm),
                None => self.profile.base_delay_ms(wpm),
            }
        }
    }

    pub fn session_record(&self) -> SessionRecord {
        SessionRecord {
            word_count: self.position.min(self.len()),
            wpm: self.settings.wpm,
            duration_seconds: self.elapsed_secs,
            snippet: session_snippet(&self.sequence),
        }
    }

    fn arm_hold(&mut self, now_ms: u64) {
        let hold = hold_ms(self.current_delay_ms());
        self.hold_deadline_ms = Some(now_ms + hold);
    }

    fn stop(&mut self) {
        self.play_state = PlayState::Stopped;
        self.cancel_timers();
    }

    fn cancel_timers(&mut self) {
        self.hold_deadline_ms = None;
        self.next_second_ms = None;
    }
}
