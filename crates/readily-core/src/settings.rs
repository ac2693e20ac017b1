//! Reader configuration and the user-tunable settings snapshot.

use crate::timing::DelayProfile;

/// Bounds and defaults for a [`crate::app::ReaderApp`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReaderConfig {
    pub wpm: u16,
    pub min_wpm: u16,
    pub max_wpm: u16,
    pub wpm_step: u16,
    pub chunk_mode: bool,
    pub chunk_size: u8,
    pub min_chunk_size: u8,
    pub max_chunk_size: u8,
    pub bionic: bool,
    pub peripheral: bool,
    /// Open the whole-text context view alongside the reading unit.
    pub context: bool,
    pub delay: DelayProfile,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            min_wpm: 100,
            max_wpm: 1000,
            wpm_step: 10,
            chunk_mode: false,
            chunk_size: 2,
            min_chunk_size: 2,
            max_chunk_size: 5,
            bionic: false,
            peripheral: false,
            context: true,
            delay: DelayProfile::default(),
        }
    }
}

impl ReaderConfig {
    /// Repairs inverted or zero bounds and clamps the current values into
    /// them.
    pub fn normalized(mut self) -> Self {
        if self.max_wpm < self.min_wpm {
            core::mem::swap(&mut self.max_wpm, &mut self.min_wpm);
        }
        self.min_wpm = self.min_wpm.max(1);
        self.max_wpm = self.max_wpm.max(self.min_wpm);
        self.wpm = self.wpm.clamp(self.min_wpm, self.max_wpm);
        self.wpm_step = self.wpm_step.max(1);

        if self.max_chunk_size < self.min_chunk_size {
            core::mem::swap(&mut self.max_chunk_size, &mut self.min_chunk_size);
        }
        self.min_chunk_size = self.min_chunk_size.max(1);
        self.max_chunk_size = self.max_chunk_size.max(self.min_chunk_size);
        self.chunk_size = self
            .chunk_size
            .clamp(self.min_chunk_size, self.max_chunk_size);
        self
    }

    pub fn clamp_wpm(&self, wpm: u16) -> u16 {
        wpm.clamp(self.min_wpm, self.max_wpm)
    }

    pub fn clamp_chunk_size(&self, size: u8) -> u8 {
        size.clamp(self.min_chunk_size, self.max_chunk_size)
    }
}

/// User-tunable settings that an embedding may persist across runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PersistedSettings {
    pub wpm: u16,
    pub chunk_mode: bool,
    pub chunk_size: u8,
    pub bionic: bool,
    pub peripheral: bool,
    pub context: bool,
}

impl PersistedSettings {
    pub const fn new(wpm: u16) -> Self {
        Self {
            wpm,
            chunk_mode: false,
            chunk_size: 2,
            bionic: false,
            peripheral: false,
            context: true,
        }
    }

    pub const fn with_chunking(mut self, chunk_mode: bool, chunk_size: u8) -> Self {
        self.chunk_mode = chunk_mode;
        self.chunk_size = chunk_size;
        self
    }
}
