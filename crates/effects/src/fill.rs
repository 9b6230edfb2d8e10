//! Constant-fill effect.
//!
//! Paints the whole buffer with one glyph on frame 0 and never touches it
//! again, so after the first flush the diff against the front buffer is
//! empty. Useful as a background layer and as the stabilization fixture in
//! the end-to-end tests.

use tui_anim_grid::Grid;
use tui_anim_types::Cell;

use crate::effect::Effect;

pub struct FillEffect {
    grid: Grid,
    fill: Cell,
}

impl FillEffect {
    pub fn new(width: u16, height: u16, fill: Cell) -> Self {
        Self {
            grid: Grid::new(width, height),
            fill,
        }
    }
}

impl Effect for FillEffect {
    fn render_frame(&mut self, frame: u64) {
        if frame == 0 {
            let (w, h) = (self.grid.width(), self.grid.height());
            self.grid.clear_rect(0, 0, w, h, self.fill);
        }
    }

    fn buffer(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_settles_after_frame_zero() {
        let mut fx = FillEffect::new(4, 3, Cell::from_char('#'));
        fx.render_frame(0);
        let snapshot = fx.buffer().clone();
        assert!(snapshot.cells().iter().all(|c| *c == Cell::from_char('#')));

        fx.render_frame(1);
        fx.render_frame(2);
        assert_eq!(*fx.buffer(), snapshot);
    }
}
