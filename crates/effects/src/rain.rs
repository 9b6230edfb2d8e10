//! Falling-drop effect with landing stacks.
//!
//! Drops spawn at the top row, fall one row per frame with optional
//! horizontal wind drift, and accumulate into per-column stacks when they
//! land. Invariant: a column's stack height never exceeds the grid height;
//! landing on a full column is absorbed, never indexed past the top.
//! Particle storage is a fixed-capacity `ArrayVec` - when it is full,
//! spawning is suppressed for the frame rather than growing the list.

use arrayvec::ArrayVec;

use tui_anim_grid::{Grid, SimpleRng};
use tui_anim_types::Cell;

use crate::effect::Effect;

/// Upper bound on simultaneously falling drops.
const MAX_DROPS: usize = 1024;

#[derive(Debug, Clone, Copy)]
struct Drop {
    x: i32,
    y: i32,
}

pub struct RainEffect {
    grid: Grid,
    drops: ArrayVec<Drop, MAX_DROPS>,
    /// Stack height per column, clamped to the grid height.
    stack_heights: Vec<u16>,
    drop_glyph: Cell,
    stack_glyph: Cell,
    /// Columns of horizontal drift applied to every drop each frame.
    wind: i32,
    /// Per-column spawn probability per frame, numerator over denominator.
    spawn_chance: (u32, u32),
    rng: SimpleRng,
}

impl RainEffect {
    pub fn new(width: u16, height: u16, wind: i32, seed: u32) -> Self {
        Self {
            grid: Grid::new(width, height),
            drops: ArrayVec::new(),
            stack_heights: vec![0; width as usize],
            drop_glyph: Cell::from_char('|'),
            stack_glyph: Cell::from_char('='),
            wind,
            spawn_chance: (1, 20),
            rng: SimpleRng::new(seed),
        }
    }

    fn advance(&mut self) {
        let w = self.grid.width() as i32;
        let h = self.grid.height();
        let wind = self.wind;
        let heights = &mut self.stack_heights;
        self.drops.retain(|d| {
            d.y += 1;
            d.x += wind;
            // Wind can carry a drop off either side.
            if d.x < 0 || d.x >= w {
                return false;
            }
            let floor = h as i32 - 1 - heights[d.x as usize] as i32;
            if d.y >= floor {
                let stack = &mut heights[d.x as usize];
                *stack = (*stack + 1).min(h);
                return false;
            }
            true
        });
    }

    fn spawn(&mut self) {
        let (num, den) = self.spawn_chance;
        for x in 0..self.grid.width() as i32 {
            if self.drops.is_full() {
                break;
            }
            if self.rng.chance(num, den) {
                self.drops.push(Drop { x, y: 0 });
            }
        }
    }

    fn redraw(&mut self) {
        self.grid.clear();
        let h = self.grid.height() as i32;
        for (x, &stack) in self.stack_heights.iter().enumerate() {
            for y in (h - stack as i32)..h {
                self.grid.put(x as i32, y, self.stack_glyph, false);
            }
        }
        for d in &self.drops {
            self.grid.put(d.x, d.y, self.drop_glyph, false);
        }
    }
}

impl Effect for RainEffect {
    fn render_frame(&mut self, frame: u64) {
        if frame == 0 {
            self.drops.clear();
            self.stack_heights.fill(0);
        } else {
            self.advance();
        }
        self.spawn();
        self.redraw();
    }

    fn buffer(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_rain(w: u16, h: u16) -> RainEffect {
        let mut rain = RainEffect::new(w, h, 0, 1);
        rain.spawn_chance = (0, 1); // manual drops only
        rain
    }

    #[test]
    fn test_drop_lands_and_stacks() {
        let mut rain = still_rain(1, 4);
        rain.drops.push(Drop { x: 0, y: 0 });
        // Floor is row 3; the drop lands after three advances.
        rain.advance();
        rain.advance();
        rain.advance();
        assert!(rain.drops.is_empty());
        assert_eq!(rain.stack_heights[0], 1);

        rain.redraw();
        assert_eq!(rain.grid.get(0, 3), Some(rain.stack_glyph));
    }

    #[test]
    fn test_stack_height_clamped_to_grid() {
        let mut rain = still_rain(1, 3);
        for _ in 0..10 {
            rain.drops.push(Drop { x: 0, y: -1 });
            for _ in 0..5 {
                rain.advance();
            }
        }
        assert_eq!(rain.stack_heights[0], 3);
        rain.redraw(); // full column must not index out of range
        assert_eq!(rain.grid.get(0, 0), Some(rain.stack_glyph));
    }

    #[test]
    fn test_wind_carries_drops_off_the_edge() {
        let mut rain = still_rain(3, 10);
        rain.wind = 1;
        rain.drops.push(Drop { x: 2, y: 0 });
        rain.advance();
        assert!(rain.drops.is_empty());
        assert_eq!(rain.stack_heights, vec![0, 0, 0]);
    }

    #[test]
    fn test_spawn_respects_capacity() {
        let mut rain = RainEffect::new(4, 4, 0, 1);
        rain.spawn_chance = (1, 1);
        for _ in 0..MAX_DROPS {
            rain.spawn();
        }
        assert!(rain.drops.len() <= MAX_DROPS);
    }

    #[test]
    fn test_frame_zero_resets_state() {
        let mut rain = RainEffect::new(4, 4, 0, 1);
        rain.spawn_chance = (1, 1);
        for frame in 0..8 {
            rain.render_frame(frame);
        }
        rain.render_frame(0);
        assert!(rain.stack_heights.iter().all(|&s| s == 0));
    }
}
