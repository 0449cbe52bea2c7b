//! TerminalRenderer: flushes text frames and messages to a console sink.
//!
//! Output is line-based: the game never enters raw mode or the alternate
//! screen, because input is read one line at a time. Everything is encoded
//! into an internal buffer with crossterm commands and flushed in one write.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{style::Print, QueueableCommand};

use crate::frame::TextFrame;

pub struct TerminalRenderer<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    /// Renderer bound to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Draw a full frame.
    pub fn draw(&mut self, frame: &TextFrame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    /// Print one line followed by a newline.
    pub fn line(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.buf.queue(Print('\n'))?;
        self.flush_buf()
    }

    /// Print a prompt without a trailing newline so the cursor waits after it.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.flush_buf()
    }

    /// Print an outcome message and the blank separator line.
    pub fn message(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.buf.queue(Print("\n\n"))?;
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full frame into `out`, one newline-terminated line per frame line.
///
/// This builds a sequence of crossterm commands without writing to the sink.
pub fn encode_frame_into(frame: &TextFrame, out: &mut Vec<u8>) -> Result<()> {
    for line in frame.lines() {
        out.queue(Print(line))?;
        out.queue(Print('\n'))?;
    }
    Ok(())
}
