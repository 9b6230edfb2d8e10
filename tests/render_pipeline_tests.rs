//! Composition pipeline tests - overlay placement, transparency, layering

use tui_anim::grid::Grid;
use tui_anim::render::{compose, smart_transparency, OverlaySource, StaticOverlay};
use tui_anim::types::{Cell, Transparency};

#[test]
fn test_smart_transparency_spec_example() {
    // Overlay rectangle ["  X  "]: only the glyph cell stays opaque.
    let mut image = Grid::filled(5, 1, Cell::Unset);
    image.clear_rect(0, 0, 5, 1, Cell::Blank);
    image.put_text(0, 0, "  X  ", false);

    smart_transparency(&mut image, 0, 0, 5, 1);

    assert_eq!(image.get(0, 0), Some(Cell::Unset));
    assert_eq!(image.get(1, 0), Some(Cell::Unset));
    assert_eq!(image.get(2, 0), Some(Cell::from_char('X')));
    assert_eq!(image.get(3, 0), Some(Cell::Unset));
    assert_eq!(image.get(4, 0), Some(Cell::Unset));
}

#[test]
fn test_effect_shows_through_smart_overlay() {
    let mut effect = Grid::new(5, 3);
    for y in 0..3 {
        effect.put_text(0, y, "~~~~~", false);
    }

    let mut overlay = StaticOverlay::at(vec![" O ".into()], 1, 1, Transparency::Smart);
    let mut image = Grid::filled(5, 3, Cell::Unset);
    overlay.update(0, &mut image);

    let mut back = Grid::new(5, 3);
    compose(&mut back, &effect, &image).unwrap();

    // Exterior blanks of the overlay let the effect through.
    assert_eq!(back.get(1, 1), Some(Cell::from_char('~')));
    assert_eq!(back.get(2, 1), Some(Cell::from_char('O')));
    assert_eq!(back.get(3, 1), Some(Cell::from_char('~')));
    // Rows the overlay never touched are pure effect.
    assert_eq!(back.get(2, 0), Some(Cell::from_char('~')));
}

#[test]
fn test_opaque_overlay_covers_the_effect() {
    let mut effect = Grid::new(5, 1);
    effect.put_text(0, 0, "~~~~~", false);

    let mut overlay = StaticOverlay::at(vec![" O ".into()], 1, 0, Transparency::Opaque);
    let mut image = Grid::filled(5, 1, Cell::Unset);
    overlay.update(0, &mut image);

    let mut back = Grid::new(5, 1);
    compose(&mut back, &effect, &image).unwrap();

    assert_eq!(back.get(0, 0), Some(Cell::from_char('~')));
    assert_eq!(back.get(1, 0), Some(Cell::Blank));
    assert_eq!(back.get(2, 0), Some(Cell::from_char('O')));
    assert_eq!(back.get(3, 0), Some(Cell::Blank));
    assert_eq!(back.get(4, 0), Some(Cell::from_char('~')));
}

#[test]
fn test_interior_whitespace_stays_opaque() {
    // The hole of the "letter" keeps its blank, the silhouette does not.
    let art = vec!["#####".to_string(), "# # #".to_string(), "#####".to_string()];
    let mut overlay = StaticOverlay::at(art, 0, 0, Transparency::Smart);
    let mut image = Grid::filled(5, 3, Cell::Unset);
    overlay.update(0, &mut image);

    assert_eq!(image.get(1, 1), Some(Cell::Blank));
    assert_eq!(image.get(3, 1), Some(Cell::Blank));
    assert_eq!(image.get(0, 1), Some(Cell::from_char('#')));
}

#[test]
fn test_naive_mode_erases_interior_whitespace() {
    let art = vec!["# #".to_string()];
    let mut overlay = StaticOverlay::at(art, 0, 0, Transparency::Naive);
    let mut image = Grid::filled(3, 1, Cell::Unset);
    overlay.update(0, &mut image);

    assert_eq!(image.get(1, 0), Some(Cell::Unset));
}
