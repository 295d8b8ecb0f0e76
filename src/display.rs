//! Flushes frames to a real terminal.
//!
//! Every frame is a full redraw of every row, followed by the overlay labels.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::framebuffer::FrameBuffer;
use crate::state::AppState;

/// Text drawn over the frame at a grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub col: u16,
    pub row: u16,
    pub text: String,
}

/// Debug overlay and pause banner for the current state
pub fn overlay(state: &AppState, fps: f64, columns: usize, rows: usize) -> Vec<Label> {
    let mut labels = Vec::new();

    if state.debug {
        let lines = [
            format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            format!(
                "Angle: {:.2} {:.2} {:.2}",
                state.rotation.x, state.rotation.y, state.rotation.z
            ),
            format!("FPS: {:.2}", fps),
            format!("Mode: {:?}", state.mode()),
        ];
        for (row, text) in lines.into_iter().enumerate() {
            labels.push(Label {
                col: 1,
                row: row as u16,
                text,
            });
        }
    }

    if state.paused {
        let text = "Paused";
        labels.push(Label {
            col: (columns.saturating_sub(text.len()) / 2) as u16,
            row: (rows / 2) as u16,
            text: text.to_string(),
        });
    }

    labels
}

/// Queues one frame plus its labels onto `writer` and flushes it.
///
/// Labels are cut at the right edge so nothing wraps onto the next row.
pub fn draw_frame<W: Write>(
    writer: &mut W,
    frame: &FrameBuffer,
    labels: &[Label],
) -> io::Result<()> {
    let mut text = String::with_capacity(frame.columns());
    for (row, line) in frame.lines().enumerate() {
        text.clear();
        text.extend(line.iter());
        writer.queue(cursor::MoveTo(0, row as u16))?;
        writer.queue(Print(&text))?;
    }

    for label in labels {
        if label.row as usize >= frame.rows() {
            continue;
        }
        let room = frame.columns().saturating_sub(label.col as usize);
        let visible: String = label.text.chars().take(room).collect();
        if visible.is_empty() {
            continue;
        }
        writer.queue(cursor::MoveTo(label.col, label.row))?;
        writer.queue(Print(visible))?;
    }

    writer.flush()
}

/// Terminal session: raw mode, alternate screen and a hidden cursor while
/// active.
pub struct TerminalDisplay {
    stdout: io::Stdout,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.flush()?;
        log::debug!("entered terminal session");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        log::debug!("left terminal session");
        Ok(())
    }

    pub fn draw(&mut self, frame: &FrameBuffer, labels: &[Label]) -> Result<()> {
        draw_frame(&mut self.stdout, frame, labels)?;
        Ok(())
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}
