//! Game of Life effect with greyscale decay.
//!
//! Automaton state (a decay stage per cell) is stored separately from the
//! grid, which only ever holds presentation glyphs. A cell is fully alive at
//! the palette's top stage and fully dead at 0; leaving the alive state walks
//! the cell one stage toward 0 per frame instead of blanking it outright.

use log::debug;

use tui_anim_grid::{Grid, SimpleRng};
use tui_anim_types::{LifeRules, Palette, CHANCE_DENOMINATOR, LIFE_SEED_CHANCE};

use crate::effect::Effect;

pub struct LifeEffect {
    grid: Grid,
    rules: LifeRules,
    palette: Palette,
    rng: SimpleRng,
    /// Decay stage per cell, row-major, 0 (dead) to palette max (alive).
    stages: Vec<u8>,
    scratch: Vec<u8>,
}

impl LifeEffect {
    pub fn new(width: u16, height: u16, rules: LifeRules, palette: Palette, seed: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            grid: Grid::new(width, height),
            rules,
            palette,
            rng: SimpleRng::new(seed),
            stages: vec![0; len],
            scratch: vec![0; len],
        }
    }

    /// Frame-0 population: each cell independently starts alive with the
    /// configured probability.
    fn seed_population(&mut self) {
        let alive = self.palette.max_stage();
        let mut count = 0usize;
        for stage in self.stages.iter_mut() {
            if self.rng.chance(LIFE_SEED_CHANCE, CHANCE_DENOMINATOR) {
                *stage = alive;
                count += 1;
            } else {
                *stage = 0;
            }
        }
        debug!("life: seeded {} live cells of {}", count, self.stages.len());
    }

    /// Live (fully-alive) 8-neighbor count; edges do not wrap.
    fn live_neighbors(&self, x: i32, y: i32) -> u8 {
        let w = self.grid.width() as i32;
        let h = self.grid.height() as i32;
        let alive = self.palette.max_stage();
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x + dx;
                let ny = y + dy;
                if nx < 0 || nx >= w || ny < 0 || ny >= h {
                    continue;
                }
                if self.stages[(ny * w + nx) as usize] == alive {
                    count += 1;
                }
            }
        }
        count
    }

    fn step(&mut self) {
        let w = self.grid.width() as i32;
        let h = self.grid.height() as i32;
        let alive = self.palette.max_stage();
        for y in 0..h {
            for x in 0..w {
                let i = (y * w + x) as usize;
                let n = self.live_neighbors(x, y);
                let stage = self.stages[i];
                self.scratch[i] = if stage == alive {
                    if self.rules.survive.contains(n) {
                        alive
                    } else {
                        alive - 1
                    }
                } else if self.rules.birth.contains(n) {
                    alive
                } else {
                    stage.saturating_sub(1)
                };
            }
        }
        std::mem::swap(&mut self.stages, &mut self.scratch);
    }

    fn redraw(&mut self) {
        let w = self.grid.width() as i32;
        let h = self.grid.height() as i32;
        for y in 0..h {
            for x in 0..w {
                let stage = self.stages[(y * w + x) as usize];
                self.grid.put(x, y, self.palette.cell_for(stage), false);
            }
        }
    }

    #[cfg(test)]
    fn stage_at(&self, x: i32, y: i32) -> u8 {
        self.stages[(y * self.grid.width() as i32 + x) as usize]
    }

    #[cfg(test)]
    fn set_alive(&mut self, x: i32, y: i32) {
        let i = (y * self.grid.width() as i32 + x) as usize;
        self.stages[i] = self.palette.max_stage();
    }
}

impl Effect for LifeEffect {
    fn render_frame(&mut self, frame: u64) {
        if frame == 0 {
            self.seed_population();
        } else {
            self.step();
        }
        self.redraw();
    }

    fn buffer(&self) -> &Grid {
        &self.grid
    }
}
