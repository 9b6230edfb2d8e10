//! Grid crate - pure, deterministic, and testable
//!
//! The 2D cell grid every other layer of the engine is built on, plus the
//! deterministic RNG effects seed from. Zero I/O dependencies:
//!
//! - **Deterministic**: same seed produces identical animations
//! - **Testable**: every operation has a silent-clipping or error contract
//! - **Portable**: runs in any environment (terminal, headless, tests)
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size row-major grid of cells with write, scroll, shift,
//!   overlay and diff operations
//! - [`rng`]: small LCG for deterministic effect seeding

pub mod grid;
pub mod rng;

pub use grid::{Diff, Grid, GridError};
pub use rng::SimpleRng;
