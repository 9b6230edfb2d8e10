//! Crossterm-backed output sink.
//!
//! The only crate that touches OS terminal APIs. Writes are queued and
//! flushed once per frame; the per-frame event drain turns a terminal
//! resize into the abort signal and `q`/`Esc`/`Ctrl-C` into the shared
//! interrupt latch.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::debug;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    style::Print,
    terminal, QueueableCommand,
};

use tui_anim_render::OutputSink;
use tui_anim_types::Cell;

pub struct CrosstermSink {
    stdout: io::Stdout,
    width: u16,
    height: u16,
    resized: bool,
    interrupt: Arc<AtomicBool>,
}

impl CrosstermSink {
    /// Capture the terminal size at construction; all grids are sized from
    /// it and a later resize aborts the run instead of reflowing.
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            width,
            height,
            resized: false,
            interrupt: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Latch set from the event drain; hand it to the runner.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn is_stop_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('q') | KeyCode::Esc)
            || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
    }
}

impl OutputSink for CrosstermSink {
    fn write_cell(&mut self, value: Cell, x: u16, y: u16, _display_width: u8) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(x, y))?;
        self.stdout.queue(Print(value.display_char()))?;
        Ok(())
    }

    fn report_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn poll_resized(&mut self) -> bool {
        // Drain everything queued since the last frame without blocking.
        while event::poll(Duration::ZERO).unwrap_or(false) {
            match event::read() {
                Ok(Event::Resize(w, h)) => {
                    debug!("resize event: {w}x{h}");
                    self.resized = true;
                }
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if Self::is_stop_key(key.code, key.modifiers) {
                        self.interrupt.store(true, Ordering::Relaxed);
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
        std::mem::take(&mut self.resized)
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}
