//! Grid module - fixed-size 2D cell storage
//!
//! Dimensions are fixed at construction. Uses a flat array for cache locality;
//! coordinates are (x, y) with x ranging left to right and y top to bottom.
//! Every point write silently drops out-of-bounds coordinates; only operations
//! that pair two grids of different sizes can fail.

use thiserror::Error;

use tui_anim_types::Cell;

/// Contract violation when two grids of different sizes are paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimension mismatch: {left_width}x{left_height} vs {right_width}x{right_height}")]
    DimensionMismatch {
        left_width: u16,
        left_height: u16,
        right_width: u16,
        right_height: u16,
    },
}

/// Fixed-size 2D grid of cells, row-major flat storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell blank.
    pub fn new(width: u16, height: u16) -> Self {
        Self::filled(width, height, Cell::Blank)
    }

    /// Create a grid with every cell set to `fill` (e.g. all-unset for an
    /// overlay image buffer).
    pub fn filled(width: u16, height: u16, fill: Cell) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![fill; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Calculate flat index from (x, y); None if out of bounds.
    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get cell at (x, y); None if out of bounds (never panics).
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write one cell. With `transparent` set, blank writes are suppressed
    /// and the prior content survives. Out-of-bounds writes are dropped.
    pub fn put(&mut self, x: i32, y: i32, value: Cell, transparent: bool) {
        if transparent && value.is_blank() {
            return;
        }
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = value;
        }
    }

    /// Write a run of cells starting at x, clipped at both edges. A negative
    /// x drops the front of the text so only the in-bounds suffix lands.
    pub fn put_text(&mut self, x: i32, y: i32, text: &str, transparent: bool) {
        let mut cx = x;
        for ch in text.chars() {
            if cx >= self.width as i32 {
                break;
            }
            self.put(cx, y, Cell::from_char(ch), transparent);
            cx += 1;
        }
    }

    /// [`put_text`](Self::put_text) with x chosen to center the text.
    pub fn put_centered(&mut self, y: i32, text: &str, transparent: bool) {
        let len = text.chars().count() as i32;
        let x = self.width as i32 / 2 - len / 2;
        self.put_text(x, y, text, transparent);
    }

    /// Reset every cell to blank. Allocation-free.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Blank);
    }

    /// Reset a sub-rectangle to `fill`; the parts outside the grid are
    /// silently clipped.
    pub fn clear_rect(&mut self, x: i32, y: i32, w: u16, h: u16, fill: Cell) {
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                if let Some(i) = self.idx(x + dx, y + dy) {
                    self.cells[i] = fill;
                }
            }
        }
    }

    /// Move all rows by `n`: positive moves rows toward index 0 (scroll up),
    /// negative scrolls down. Vacated rows become blank; |n| >= height
    /// clamps to a full clear.
    pub fn scroll(&mut self, n: i32) {
        let w = self.width as usize;
        let h = self.height as usize;
        let m = (n.unsigned_abs() as usize).min(h);
        if m == 0 || w == 0 {
            return;
        }
        if m == h {
            self.clear();
            return;
        }
        if n > 0 {
            self.cells.copy_within(m * w.., 0);
            self.cells[(h - m) * w..].fill(Cell::Blank);
        } else {
            self.cells.copy_within(..(h - m) * w, m * w);
            self.cells[..m * w].fill(Cell::Blank);
        }
    }

    /// Rotate every row horizontally by `n` columns. Circular: cells leaving
    /// one edge re-enter at the other, so `shift(n)` then `shift(-n)` is the
    /// identity.
    pub fn shift(&mut self, n: i32) {
        let w = self.width as usize;
        if w == 0 {
            return;
        }
        let k = (n.rem_euclid(w as i32)) as usize;
        if k == 0 {
            return;
        }
        for row in self.cells.chunks_exact_mut(w) {
            row.rotate_right(k);
        }
    }

    /// Row-major lazy sequence of `(row, col, value)` for every coordinate
    /// where `self` and `other` differ; `value` is taken from `other`, so
    /// applying the diff to `self` reproduces `other`.
    pub fn diff<'a>(&'a self, other: &'a Grid) -> Result<Diff<'a>, GridError> {
        self.check_dims(other)?;
        Ok(Diff {
            left: self,
            right: other,
            pos: 0,
        })
    }

    /// Copy every non-unset cell of `other` onto `self`; unset cells leave
    /// the existing content visible underneath.
    pub fn overlay_nonempty(&mut self, other: &Grid) -> Result<(), GridError> {
        self.check_dims(other)?;
        for (dst, src) in self.cells.iter_mut().zip(other.cells.iter()) {
            if !src.is_unset() {
                *dst = *src;
            }
        }
        Ok(())
    }

    /// Unconditional full-grid overwrite from `other`.
    pub fn copy_from(&mut self, other: &Grid) -> Result<(), GridError> {
        self.check_dims(other)?;
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    fn check_dims(&self, other: &Grid) -> Result<(), GridError> {
        if self.width != other.width || self.height != other.height {
            return Err(GridError::DimensionMismatch {
                left_width: self.width,
                left_height: self.height,
                right_width: other.width,
                right_height: other.height,
            });
        }
        Ok(())
    }
}

/// Single-pass iterator over the cells where two equal-sized grids differ.
/// Finite (bounded by height * width) and not restartable.
#[derive(Debug)]
pub struct Diff<'a> {
    left: &'a Grid,
    right: &'a Grid,
    pos: usize,
}

impl Iterator for Diff<'_> {
    type Item = (u16, u16, Cell);

    fn next(&mut self) -> Option<Self::Item> {
        let w = self.left.width as usize;
        while self.pos < self.left.cells.len() {
            let i = self.pos;
            self.pos += 1;
            if self.left.cells[i] != self.right.cells[i] {
                return Some(((i / w) as u16, (i % w) as u16, self.right.cells[i]));
            }
        }
        None
    }
}
