use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use readily_core::settings::ReaderConfig;

/// Read text one word at a time in the terminal.
#[derive(Parser, Debug)]
#[command(name = "readily", version)]
pub(super) struct Cli {
    /// Text file to read; stdin when omitted
    pub(super) path: Option<PathBuf>,

    /// Reading speed in words per minute (100-1000)
    #[arg(short, long, default_value_t = 300)]
    pub(super) wpm: u16,

    /// Show this many words at once (2-5)
    #[arg(short, long)]
    pub(super) chunk: Option<u8>,

    /// Bold the leading part of every word
    #[arg(long)]
    pub(super) bionic: bool,

    /// Show the previous and next chunk beside the current one
    #[arg(long)]
    pub(super) peripheral: bool,

    /// Show the surrounding words on a second line
    #[arg(long)]
    pub(super) context: bool,

    /// Columns reserved left of the pivot character
    #[arg(long, default_value_t = 24)]
    pub(super) column: usize,
}

impl Cli {
    pub(super) fn reader_config(&self) -> ReaderConfig {
        let defaults = ReaderConfig::default();
        ReaderConfig {
            wpm: self.wpm,
            chunk_mode: self.chunk.is_some(),
            chunk_size: self.chunk.unwrap_or(defaults.chunk_size),
            bionic: self.bionic,
            peripheral: self.peripheral,
            context: self.context,
            ..defaults
        }
    }

    pub(super) fn read_text(&self) -> Result<String> {
        match &self.path {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            None => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read stdin")?;
                Ok(text)
            }
        }
    }
}
