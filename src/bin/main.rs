//! Terminal RSVP reader.

use std::{
    io,
    thread,
    time::{Duration, Instant},
};

use anyhow::{Result, bail};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use readily_core::{
    app::{ReaderApp, TickResult},
    content::tokenize,
    input::{Command, mock::QueuedInput},
};

use cli::Cli;
use terminal::{LogSessionSink, TerminalRenderer};

#[path = "main/cli.rs"]
mod cli;
#[path = "main/terminal.rs"]
mod terminal;

const POLL_INTERVAL_MS: u64 = 5;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let text = cli.read_text()?;
    let word_total = tokenize(&text).len();
    if word_total == 0 {
        bail!("input contains no words");
    }

    let config = cli.reader_config();
    info!(
        "readily: words={} wpm={} chunk={:?} bionic={} peripheral={}",
        word_total, config.wpm, cli.chunk, config.bionic, config.peripheral
    );

    let input: QueuedInput = [Command::Submit(text), Command::TogglePlay]
        .into_iter()
        .collect();
    let mut app = ReaderApp::new(input, LogSessionSink, config);
    let mut renderer = TerminalRenderer::new(io::stdout().lock(), cli.column);

    let started = Instant::now();
    let mut now_ms = 0u64;
    loop {
        if app.tick(now_ms) == TickResult::RenderRequested {
            let mut drawn = Ok(());
            app.with_screen(|screen| drawn = renderer.draw(&screen));
            drawn?;
        }

        let playback = app.playback();
        if !playback.is_playing() && playback.is_finished() {
            break;
        }

        thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
        now_ms = started.elapsed().as_millis() as u64;
    }

    renderer.finish()?;
    debug!(
        "readily: finished elapsed_s={} wall_ms={}",
        app.playback().elapsed_secs(),
        now_ms
    );
    app.apply_command(Command::Close, now_ms);
    Ok(())
}
