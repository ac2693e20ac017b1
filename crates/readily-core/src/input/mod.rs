//! Input abstraction layer.

pub mod mock;

use alloc::string::String;

/// Logical commands consumed by the reader app.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Replace the loaded text. Blank text is ignored.
    Submit(String),
    TogglePlay,
    /// Jump to a percentage (0..=100) of the sequence.
    Seek(f32),
    Restart,
    /// Leave the reader: pause, report the session and unload the text.
    Close,
    SetWpm(u16),
    /// Step wpm up (`true`) or down by the configured step.
    StepWpm(bool),
    SetChunkMode(bool),
    SetChunkSize(u8),
    SetBionic(bool),
    SetPeripheral(bool),
    /// Show or hide the whole-text context view.
    SetContext(bool),
}

/// Polled command provider.
pub trait InputProvider {
    type Error;

    fn poll_command(&mut self) -> Result<Option<Command>, Self::Error>;
}
