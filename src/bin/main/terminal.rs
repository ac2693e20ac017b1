use std::io::{self, Write};

use log::info;
use readily_core::{
    render::{ContextView, Screen, WordState},
    session::{SessionRecord, SessionSink},
    split::{BionicSegment, bionic_segments},
};

const CLEAR_LINE: &str = "\x1b[2K\r";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const PIVOT: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";
const LINE_UP: &str = "\x1b[1A\r";

/// Words shown on each side of the current one in the context line.
const CONTEXT_RADIUS: usize = 6;

/// Single-line renderer holding the pivot at a fixed column.
pub(super) struct TerminalRenderer<W: Write> {
    out: W,
    column: usize,
    context_drawn: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub(super) fn new(out: W, column: usize) -> Self {
        Self {
            out,
            column,
            context_drawn: false,
        }
    }

    pub(super) fn draw(&mut self, screen: &Screen<'_>) -> io::Result<()> {
        match screen {
            Screen::Idle { wpm } => write!(self.out, "{CLEAR_LINE}{DIM}no text ({wpm} wpm){RESET}")?,
            Screen::Reading {
                text,
                orp,
                bionic,
                prev,
                next,
                paused,
                wpm,
                progress_pct,
                counter,
                elapsed,
                context,
                ..
            } => {
                let pad = self.column.saturating_sub(orp.prefix.chars().count());
                write!(self.out, "{CLEAR_LINE}{:pad$}", "")?;

                if *bionic {
                    for segment in bionic_segments(text) {
                        match segment {
                            BionicSegment::Word { bold, rest } => {
                                write!(self.out, "{BOLD}{bold}{RESET}{DIM}{rest}{RESET}")?
                            }
                            BionicSegment::Gap(gap) => write!(self.out, "{gap}")?,
                        }
                    }
                } else {
                    write!(
                        self.out,
                        "{}{PIVOT}{}{RESET}{}",
                        orp.prefix, orp.pivot, orp.suffix
                    )?;
                }

                let used = text.chars().count().saturating_sub(orp.prefix.chars().count());
                let tail = self.column.saturating_sub(used);
                write!(
                    self.out,
                    "{:tail$}{DIM}{counter}  {elapsed}  {progress_pct:.0}%  {wpm} wpm{}{RESET}",
                    "",
                    if *paused { "  paused" } else { "" },
                )?;

                if prev.is_some() || next.is_some() {
                    write!(
                        self.out,
                        "{DIM}  [{} | {}]{RESET}",
                        prev.unwrap_or(""),
                        next.unwrap_or("")
                    )?;
                }

                if let Some(context) = context {
                    self.draw_context(context)?;
                } else if self.context_drawn {
                    write!(self.out, "\n{CLEAR_LINE}{LINE_UP}")?;
                    self.context_drawn = false;
                }
            }
        }

        self.out.flush()
    }

    /// Second line: the words around the current one, past words dimmed.
    fn draw_context(&mut self, context: &ContextView<'_>) -> io::Result<()> {
        let first = context.position().saturating_sub(CONTEXT_RADIUS);
        write!(self.out, "\n{CLEAR_LINE}{DIM}")?;
        if first > 0 {
            write!(self.out, "... ")?;
        }
        write!(self.out, "{RESET}")?;

        for (word, state) in context.words().skip(first).take(CONTEXT_RADIUS * 2 + 1) {
            match state {
                WordState::Past => write!(self.out, "{DIM}{word}{RESET} ")?,
                WordState::Current => write!(self.out, "{PIVOT}{word}{RESET} ")?,
                WordState::Future => write!(self.out, "{word} ")?,
            }
        }

        self.context_drawn = true;
        write!(self.out, "{LINE_UP}")
    }

    pub(super) fn finish(&mut self) -> io::Result<()> {
        if self.context_drawn {
            writeln!(self.out)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Reports completed sessions to the log.
#[derive(Default, Debug, Clone, Copy)]
pub(super) struct LogSessionSink;

impl SessionSink for LogSessionSink {
    type Error = core::convert::Infallible;

    fn record(&mut self, session: &SessionRecord) -> Result<(), Self::Error> {
        info!(
            "session: words={} wpm={} duration_s={} snippet={:?}",
            session.word_count,
            session.wpm,
            session.duration_seconds,
            session.snippet.as_str()
        );
        Ok(())
    }
}
