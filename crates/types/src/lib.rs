//! Core types shared across the animation engine
//! This crate contains pure data types with no external dependencies

/// Default inter-frame delay (milliseconds)
pub const DEFAULT_FRAME_DELAY_MS: u64 = 50;

/// Default probability (numerator over [`CHANCE_DENOMINATOR`]) that a cell
/// starts alive when the Game of Life effect seeds itself
pub const LIFE_SEED_CHANCE: u32 = 1;
pub const CHANCE_DENOMINATOR: u32 = 10;

/// An opaque printable unit occupying one or more terminal columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    /// Display width in terminal columns (1 for ordinary ASCII).
    pub width: u8,
}

impl Glyph {
    pub const fn new(ch: char) -> Self {
        Self { ch, width: 1 }
    }

    pub const fn wide(ch: char, width: u8) -> Self {
        Self { ch, width }
    }
}

/// One grid position's content.
///
/// `Unset` means "do not touch this position during composition" and is
/// distinct from a blank: a blank is an opaque space, an unset cell lets
/// the layer underneath show through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    Unset,
    #[default]
    Blank,
    Glyph(Glyph),
}

impl Cell {
    /// Canonical conversion: the space character is always `Blank`, so a
    /// `Glyph` variant never holds a space.
    pub fn from_char(ch: char) -> Self {
        if ch == ' ' {
            Cell::Blank
        } else {
            Cell::Glyph(Glyph::new(ch))
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Cell::Unset)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }

    /// Character to emit for this cell; unset positions have no character
    /// of their own and display as a space if forced to the screen.
    pub fn display_char(&self) -> char {
        match self {
            Cell::Glyph(g) => g.ch,
            Cell::Blank | Cell::Unset => ' ',
        }
    }

    /// Display width in terminal columns.
    pub fn display_width(&self) -> u8 {
        match self {
            Cell::Glyph(g) => g.width,
            Cell::Blank | Cell::Unset => 1,
        }
    }
}

/// Immutable glyph lookup by decay stage, stage 0 (dead) to `max_stage()`
/// (fully alive). Passed into effect constructors; never a global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<char>,
}

impl Palette {
    /// Build a palette from a dead-to-alive character ramp.
    /// Returns None for ramps shorter than two stages or longer than 256,
    /// so every stage fits a u8.
    pub fn new(ramp: &str) -> Option<Self> {
        let glyphs: Vec<char> = ramp.chars().collect();
        if glyphs.len() < 2 || glyphs.len() > 256 {
            return None;
        }
        Some(Self { glyphs })
    }

    /// Default greyscale ramp: blank when dead, denser toward alive.
    pub fn greyscale() -> Self {
        Self {
            glyphs: vec![' ', '.', ':', '*', '#', '@'],
        }
    }

    /// Highest decay stage (palette length minus one).
    pub fn max_stage(&self) -> u8 {
        (self.glyphs.len() - 1) as u8
    }

    /// Cell for a decay stage; stages past the end clamp to fully alive.
    pub fn cell_for(&self, stage: u8) -> Cell {
        let idx = (stage as usize).min(self.glyphs.len() - 1);
        Cell::from_char(self.glyphs[idx])
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::greyscale()
    }
}

/// A closed integer range used for cellular-automaton rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleRange {
    pub low: u8,
    pub high: u8,
}

impl RuleRange {
    /// Returns None unless `low <= high`.
    pub fn new(low: u8, high: u8) -> Option<Self> {
        if low <= high {
            Some(Self { low, high })
        } else {
            None
        }
    }

    /// Parse "low,high" or "low-high" (e.g. "2,3").
    pub fn parse(s: &str) -> Option<Self> {
        let (a, b) = s.split_once([',', '-'])?;
        let low = a.trim().parse().ok()?;
        let high = b.trim().parse().ok()?;
        Self::new(low, high)
    }

    pub fn contains(&self, n: u8) -> bool {
        self.low <= n && n <= self.high
    }
}

/// Survive/birth rule ranges for the Game of Life effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeRules {
    /// Neighbor counts that keep a live cell alive.
    pub survive: RuleRange,
    /// Neighbor counts that revive a dead cell.
    pub birth: RuleRange,
}

impl Default for LifeRules {
    fn default() -> Self {
        Self {
            survive: RuleRange { low: 2, high: 3 },
            birth: RuleRange { low: 3, high: 3 },
        }
    }
}

/// How an overlay's blank cells behave during composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transparency {
    /// Blanks stay opaque and cover the effect layer.
    Opaque,
    /// Every blank becomes transparent, interior whitespace included.
    Naive,
    /// Boundary scan: only exterior blanks become transparent.
    #[default]
    Smart,
}

impl Transparency {
    /// Parse mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "opaque" => Some(Transparency::Opaque),
            "naive" => Some(Transparency::Naive),
            "smart" => Some(Transparency::Smart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Transparency::Opaque => "opaque",
            Transparency::Naive => "naive",
            Transparency::Smart => "smart",
        }
    }
}
