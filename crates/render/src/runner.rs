//! The frame-scheduling loop.
//!
//! Single-threaded and cooperative: the only suspension point per frame is
//! the inter-frame sleep. Resize and interrupt are checked at the top of
//! each frame so a frame's composition is never torn; both abort paths and
//! normal completion converge on one exit-banner flush.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};
use log::{info, warn};

use tui_anim_effects::Effect;
use tui_anim_grid::Grid;
use tui_anim_types::{Cell, DEFAULT_FRAME_DELAY_MS};

use crate::compositor::compose;
use crate::overlay::OverlaySource;
use crate::sink::OutputSink;

/// Scalar render parameters, fixed at construction.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Stop after this many frames; None runs until aborted.
    pub frames: Option<u64>,
    pub frame_delay: Duration,
    /// Exit-banner text; None composes a default status line.
    pub banner: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frames: None,
            frame_delay: Duration::from_millis(DEFAULT_FRAME_DELAY_MS),
            banner: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortCause {
    Resized,
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Finished,
    Aborted(AbortCause),
}

/// Owns the four grids and drives effect, compositor, diff and sink once
/// per frame.
pub struct Runner<S: OutputSink> {
    effect: Box<dyn Effect>,
    overlay: Box<dyn OverlaySource>,
    pub sink: S,
    config: RenderConfig,
    back: Grid,
    front: Grid,
    image: Grid,
    interrupt: Arc<AtomicBool>,
}

impl<S: OutputSink> Runner<S> {
    /// All grids take their dimensions from the sink's reported size; the
    /// effect must have been built to match.
    pub fn new(
        effect: Box<dyn Effect>,
        overlay: Box<dyn OverlaySource>,
        sink: S,
        config: RenderConfig,
    ) -> Result<Self> {
        let (width, height) = sink.report_size();
        if effect.buffer().width() != width || effect.buffer().height() != height {
            bail!(
                "effect buffer is {}x{} but the sink reports {}x{}",
                effect.buffer().width(),
                effect.buffer().height(),
                width,
                height
            );
        }
        Ok(Self {
            effect,
            overlay,
            sink,
            config,
            back: Grid::new(width, height),
            front: Grid::new(width, height),
            image: Grid::filled(width, height, Cell::Unset),
            interrupt: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Shared graceful-stop latch; the terminal backend or a signal handler
    /// sets it, the loop checks it at the top of each frame.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    /// Adopt an externally owned interrupt latch (e.g. the one the terminal
    /// backend sets from its event drain).
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = flag;
        self
    }

    /// Drive frames until finished or aborted, then compose the exit banner.
    pub fn run(&mut self) -> Result<RunOutcome> {
        info!(
            "render loop starting: {}x{}, frames={:?}, delay={:?}",
            self.back.width(),
            self.back.height(),
            self.config.frames,
            self.config.frame_delay
        );

        let mut frame: u64 = 0;
        let outcome = loop {
            if self.config.frames == Some(frame) {
                break RunOutcome::Finished;
            }
            if self.sink.poll_resized() {
                warn!("terminal resized after {frame} frames, aborting");
                break RunOutcome::Aborted(AbortCause::Resized);
            }
            if self.interrupt.load(Ordering::Relaxed) {
                info!("interrupt requested after {frame} frames");
                break RunOutcome::Aborted(AbortCause::Interrupted);
            }

            thread::sleep(self.config.frame_delay);

            self.overlay.update(frame, &mut self.image);
            self.effect.render_frame(frame);
            compose(&mut self.back, self.effect.buffer(), &self.image)?;
            self.flush_frame()?;

            frame += 1;
        };

        self.exit_banner(frame, outcome)?;
        info!("render loop done: {outcome:?}");
        Ok(outcome)
    }

    /// Emit the front-vs-back diff row-major, flush, then front := back.
    fn flush_frame(&mut self) -> Result<()> {
        for (row, col, value) in self.front.diff(&self.back)? {
            self.sink.write_cell(value, col, row, value.display_width())?;
        }
        self.sink.flush()?;
        self.front.copy_from(&self.back)?;
        Ok(())
    }

    fn exit_banner(&mut self, frames: u64, outcome: RunOutcome) -> Result<()> {
        let text = self.config.banner.clone().unwrap_or_else(|| match outcome {
            RunOutcome::Finished => format!(" finished after {frames} frames "),
            RunOutcome::Aborted(AbortCause::Resized) => " resize detected - stopping ".into(),
            RunOutcome::Aborted(AbortCause::Interrupted) => {
                format!(" interrupted after {frames} frames ")
            }
        });
        let row = self.back.height() as i32 - 1;
        self.back.put_centered(row, &text, false);
        self.flush_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_anim_effects::FillEffect;
    use crate::overlay::NoOverlay;
    use crate::sink::RecordingSink;

    fn quick_config(frames: u64) -> RenderConfig {
        RenderConfig {
            frames: Some(frames),
            frame_delay: Duration::ZERO,
            banner: None,
        }
    }

    fn fill_runner(w: u16, h: u16, frames: u64) -> Runner<RecordingSink> {
        Runner::new(
            Box::new(FillEffect::new(w, h, Cell::from_char('#'))),
            Box::new(NoOverlay),
            RecordingSink::new(w, h),
            quick_config(frames),
        )
        .unwrap()
    }

    #[test]
    fn test_static_effect_stabilizes_after_first_frame() {
        let mut runner = fill_runner(8, 4, 3);
        assert_eq!(runner.run().unwrap(), RunOutcome::Finished);

        // Three frame flushes plus the exit banner.
        let frames = &runner.sink.frames;
        assert_eq!(frames.len(), 4);
        assert!(frames[0].len() <= 8 * 4);
        assert!(!frames[0].is_empty());
        assert!(frames[1].is_empty());
        assert!(frames[2].is_empty());
        assert!(!frames[3].is_empty());
    }

    #[test]
    fn test_zero_frame_run_emits_only_the_banner() {
        let mut runner = fill_runner(8, 4, 0);
        assert_eq!(runner.run().unwrap(), RunOutcome::Finished);
        // No frame is rendered; the only flush is the exit banner.
        assert_eq!(runner.sink.frames.len(), 1);
        assert!(!runner.sink.frames[0].is_empty());
    }

    #[test]
    fn test_front_buffer_tracks_emitted_state() {
        let mut runner = fill_runner(4, 2, 2);
        runner.run().unwrap();
        assert_eq!(runner.front, runner.back);
    }

    #[test]
    fn test_resize_aborts_before_any_frame() {
        let mut runner = fill_runner(4, 2, 10);
        runner.sink.resized = true;
        assert_eq!(
            runner.run().unwrap(),
            RunOutcome::Aborted(AbortCause::Resized)
        );
        // Only the exit banner was flushed.
        assert_eq!(runner.sink.frames.len(), 1);
    }

    #[test]
    fn test_interrupt_runs_exit_banner() {
        let mut runner = fill_runner(12, 3, 100);
        runner.interrupt_flag().store(true, Ordering::Relaxed);
        assert_eq!(
            runner.run().unwrap(),
            RunOutcome::Aborted(AbortCause::Interrupted)
        );
        let banner = runner.sink.frames.last().unwrap();
        assert!(!banner.is_empty());
        // Banner lands on the bottom status row.
        assert!(banner.iter().all(|&(_, y, _)| y == 2));
    }

    #[test]
    fn test_dimension_mismatch_rejected_at_construction() {
        let result = Runner::new(
            Box::new(FillEffect::new(5, 5, Cell::from_char('#'))),
            Box::new(NoOverlay),
            RecordingSink::new(8, 4),
            quick_config(1),
        );
        assert!(result.is_err());
    }
}
