//! The effect state-machine contract.

use tui_anim_grid::Grid;

/// A polymorphic animation unit owning one grid.
///
/// The render loop calls [`render_frame`](Effect::render_frame) with a
/// strictly increasing frame number starting at 0 and no gaps. Frame 0 is
/// the initialization frame (seed state, first draw); every later frame
/// updates internal state plus the previous buffer contents.
///
/// Implementations must not block: anything long-running belongs on a
/// [`BackgroundTask`](crate::background::BackgroundTask) whose completion
/// is polled here.
pub trait Effect {
    fn render_frame(&mut self, frame: u64);

    /// The effect-owned buffer, read by the compositor after each frame.
    fn buffer(&self) -> &Grid;
}
