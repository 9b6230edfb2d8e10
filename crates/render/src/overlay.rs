//! Overlay collaborators.
//!
//! An overlay source owns the image buffer's content: the runner hands it
//! the buffer once per frame and the source decides whether anything
//! changes. Static placements settle after the first frame.

use tui_anim_grid::Grid;
use tui_anim_types::{Cell, Transparency};

use crate::compositor::{naive_transparency, smart_transparency};

pub trait OverlaySource {
    /// Update the image buffer for this frame. No-op once a static
    /// placement has settled.
    fn update(&mut self, frame: u64, image: &mut Grid);
}

/// Leaves the image buffer fully unset; the effect layer shows unobstructed.
pub struct NoOverlay;

impl OverlaySource for NoOverlay {
    fn update(&mut self, _frame: u64, _image: &mut Grid) {}
}

/// A block of ASCII-art lines placed once, centered or at a fixed offset,
/// with the configured transparency applied at placement time.
pub struct StaticOverlay {
    lines: Vec<String>,
    offset: Option<(i32, i32)>,
    transparency: Transparency,
    placed: bool,
}

impl StaticOverlay {
    /// Centered placement.
    pub fn new(lines: Vec<String>, transparency: Transparency) -> Self {
        Self {
            lines,
            offset: None,
            transparency,
            placed: false,
        }
    }

    /// Placement at a fixed top-left offset.
    pub fn at(lines: Vec<String>, x: i32, y: i32, transparency: Transparency) -> Self {
        Self {
            lines,
            offset: Some((x, y)),
            transparency,
            placed: false,
        }
    }

    /// Bounding rectangle of the art block.
    fn rect_size(&self) -> (u16, u16) {
        let w = self
            .lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u16;
        (w, self.lines.len() as u16)
    }
}

impl OverlaySource for StaticOverlay {
    fn update(&mut self, _frame: u64, image: &mut Grid) {
        if self.placed {
            return;
        }
        let (w, h) = self.rect_size();
        let (x, y) = self.offset.unwrap_or((
            image.width() as i32 / 2 - w as i32 / 2,
            image.height() as i32 / 2 - h as i32 / 2,
        ));

        // Blank the rectangle first so short lines are padded opaque, then
        // let the transparency pass carve the silhouette back out.
        image.clear_rect(x, y, w, h, Cell::Blank);
        for (i, line) in self.lines.iter().enumerate() {
            image.put_text(x, y + i as i32, line, false);
        }
        match self.transparency {
            Transparency::Opaque => {}
            Transparency::Naive => naive_transparency(image, x, y, w, h),
            Transparency::Smart => smart_transparency(image, x, y, w, h),
        }
        self.placed = true;
    }
}
