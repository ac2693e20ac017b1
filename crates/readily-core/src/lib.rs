#![no_std]

//! Host-agnostic RSVP presentation engine.
//!
//! Tokenizes text into a [`content::WordSequence`], times every displayed unit
//! with [`timing`], splits it for fixed-point rendering with [`split`], and
//! drives playback through [`app::PlaybackController`].

extern crate alloc;

pub mod app;
pub mod content;
pub mod input;
pub mod render;
pub mod session;
pub mod settings;
pub mod split;
pub mod text_policy;
pub mod timing;
