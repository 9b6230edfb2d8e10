//! Compositing and frame scheduling.
//!
//! Ties the layers together once per frame: the active effect mutates its
//! buffer, the compositor folds it with the overlay image into the back
//! buffer, the diff against the front buffer goes to the output sink, and
//! the buffers swap. The sink is a trait so the loop runs identically
//! against a real terminal or a recording double in tests.
//!
//! # Module Structure
//!
//! - [`compositor`]: layer composition and the transparency scans
//! - [`overlay`]: overlay-collaborator trait and the static placement impl
//! - [`sink`]: output sink trait plus the recording test double
//! - [`runner`]: the per-frame loop, termination and the exit banner

pub mod compositor;
pub mod overlay;
pub mod runner;
pub mod sink;

pub use compositor::{compose, naive_transparency, smart_transparency};
pub use overlay::{NoOverlay, OverlaySource, StaticOverlay};
pub use runner::{AbortCause, RenderConfig, RunOutcome, Runner};
pub use sink::{OutputSink, RecordingSink};
