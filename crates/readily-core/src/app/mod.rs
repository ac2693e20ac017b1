//! Application state machine for RSVP reading.

use alloc::string::String;

use log::{debug, warn};

use crate::{
    content::tokenize,
    input::{Command, InputProvider},
    render::{ContextView, FINISHED_TEXT, Screen},
    session::SessionSink,
    settings::{PersistedSettings, ReaderConfig},
    split::orp_split,
    text_policy::{counter_label, elapsed_label},
};

mod playback;

pub use playback::{PlayState, PlaybackController, PlaybackSettings, PlaybackState};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Display-side toggles that do not affect timing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ViewOptions {
    bionic: bool,
    peripheral: bool,
    context: bool,
}

/// Text staged for the renderer, rebuilt whenever the position or chunking
/// changes.
#[derive(Debug, Default)]
struct DisplayBuffer {
    current: String,
    prev: Option<String>,
    next: Option<String>,
}

pub struct ReaderApp<IN, SS>
where
    IN: InputProvider,
    SS: SessionSink,
{
    input: IN,
    sessions: SS,
    config: ReaderConfig,
    playback: PlaybackController,
    view: ViewOptions,
    display: DisplayBuffer,
    pending_redraw: bool,
    sessions_reported: u32,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
