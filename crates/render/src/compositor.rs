//! Layer composition.
//!
//! Each frame the back buffer becomes: effect buffer, then every non-unset
//! cell of the image buffer on top. The transparency scans run once per
//! overlay placement, not per frame - they rewrite blank cells of the placed
//! rectangle to unset so the effect shows through.

use tui_anim_grid::{Grid, GridError};
use tui_anim_types::Cell;

/// Produce the back buffer for one frame from the two layers.
pub fn compose(back: &mut Grid, effect: &Grid, image: &Grid) -> Result<(), GridError> {
    back.copy_from(effect)?;
    back.overlay_nonempty(image)
}

/// Rewrite every blank in the rectangle to unset, interior blanks included.
pub fn naive_transparency(image: &mut Grid, x: i32, y: i32, w: u16, h: u16) {
    for dy in 0..h as i32 {
        for dx in 0..w as i32 {
            if image.get(x + dx, y + dy) == Some(Cell::Blank) {
                image.put(x + dx, y + dy, Cell::Unset, false);
            }
        }
    }
}

/// Boundary scan: walk each row inward from both edges of the rectangle,
/// rewriting blanks to unset until the first glyph. Blanks between glyphs
/// stay opaque, so an overlay keeps its interior whitespace while its
/// silhouette lets the effect through. Rows with no glyph at all end up
/// fully unset.
pub fn smart_transparency(image: &mut Grid, x: i32, y: i32, w: u16, h: u16) {
    for dy in 0..h as i32 {
        let ry = y + dy;
        for dx in 0..w as i32 {
            if !erase_if_exterior(image, x + dx, ry) {
                break;
            }
        }
        for dx in (0..w as i32).rev() {
            if !erase_if_exterior(image, x + dx, ry) {
                break;
            }
        }
    }
}

/// True while the scan should continue: blanks become unset, already-unset
/// cells pass through, the first glyph stops the scan.
fn erase_if_exterior(image: &mut Grid, x: i32, y: i32) -> bool {
    match image.get(x, y) {
        Some(Cell::Blank) => {
            image.put(x, y, Cell::Unset, false);
            true
        }
        Some(Cell::Unset) | None => true,
        Some(Cell::Glyph(_)) => false,
    }
}
