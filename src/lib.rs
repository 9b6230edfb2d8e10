//! Flicker-free ASCII animation (workspace facade crate).
//!
//! This package keeps the `tui_anim::{types,grid,effects,render,term}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_anim_effects as effects;
pub use tui_anim_grid as grid;
pub use tui_anim_render as render;
pub use tui_anim_term as term;
pub use tui_anim_types as types;
