//! Output sink abstraction.
//!
//! The render loop never talks to OS terminal APIs; it writes changed cells
//! through this trait. The crossterm-backed implementation lives in the
//! `tui-anim-term` crate; the recording double here backs tests and benches.

use anyhow::Result;

use tui_anim_types::Cell;

pub trait OutputSink {
    /// Write one cell at (x, y). `display_width` is the glyph's width in
    /// terminal columns.
    fn write_cell(&mut self, value: Cell, x: u16, y: u16, display_width: u8) -> Result<()>;

    /// Dimensions the animation grids were created with.
    fn report_size(&self) -> (u16, u16);

    /// Drain any pending external signals; true if the terminal was resized
    /// since the last poll.
    fn poll_resized(&mut self) -> bool;

    /// Mark a frame boundary for buffered terminals.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Records every write, batched per flush, for loop-level tests.
pub struct RecordingSink {
    width: u16,
    height: u16,
    pending: Vec<(u16, u16, Cell)>,
    /// One entry per flush, in order.
    pub frames: Vec<Vec<(u16, u16, Cell)>>,
    /// Set by a test to simulate a resize signal on the next poll.
    pub resized: bool,
}

impl RecordingSink {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pending: Vec::new(),
            frames: Vec::new(),
            resized: false,
        }
    }
}

impl OutputSink for RecordingSink {
    fn write_cell(&mut self, value: Cell, x: u16, y: u16, _display_width: u8) -> Result<()> {
        self.pending.push((x, y, value));
        Ok(())
    }

    fn report_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn poll_resized(&mut self) -> bool {
        std::mem::take(&mut self.resized)
    }

    fn flush(&mut self) -> Result<()> {
        self.frames.push(std::mem::take(&mut self.pending));
        Ok(())
    }
}
