//! Marquee text effect.
//!
//! The text comes from a caller-supplied source running on a background
//! task; until it lands the effect shows a placeholder and returns
//! immediately every frame. Once the text settles it is scrolled with the
//! grid's circular row rotation, so the marquee loops forever.

use tui_anim_grid::Grid;

use crate::background::BackgroundTask;
use crate::effect::Effect;

pub struct TickerEffect {
    grid: Grid,
    row: i32,
    task: Option<BackgroundTask<String>>,
    settled: bool,
}

impl TickerEffect {
    pub fn new<F>(width: u16, height: u16, source: F) -> Self
    where
        F: FnOnce() -> String + Send + 'static,
    {
        Self {
            grid: Grid::new(width, height),
            row: height as i32 / 2,
            task: Some(BackgroundTask::spawn(move |_cancel| source())),
            settled: false,
        }
    }

    /// Whether the text source has delivered.
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

impl Effect for TickerEffect {
    fn render_frame(&mut self, _frame: u64) {
        if !self.settled {
            let ready = self.task.as_mut().and_then(|t| t.try_take());
            match ready {
                Some(text) => {
                    self.grid.clear();
                    self.grid.put_centered(self.row, &text, false);
                    self.settled = true;
                    self.task = None;
                }
                None => {
                    self.grid.clear();
                    self.grid.put_centered(self.row, "...", false);
                }
            }
            return;
        }
        self.grid.shift(-1);
    }

    fn buffer(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;
    use tui_anim_types::Cell;

    #[test]
    fn test_ticker_settles_then_scrolls() {
        let mut ticker = TickerEffect::new(9, 3, || "hi".to_string());

        let mut frame = 0u64;
        while !ticker.is_settled() {
            ticker.render_frame(frame);
            frame += 1;
            assert!(frame < 1000, "source never delivered");
            thread::sleep(Duration::from_millis(1));
        }

        // "hi" centered on row 1 of a 9-wide grid starts at column 3.
        assert_eq!(ticker.buffer().get(3, 1), Some(Cell::from_char('h')));
        assert_eq!(ticker.buffer().get(4, 1), Some(Cell::from_char('i')));

        ticker.render_frame(frame);
        assert_eq!(ticker.buffer().get(2, 1), Some(Cell::from_char('h')));
        assert_eq!(ticker.buffer().get(3, 1), Some(Cell::from_char('i')));
    }

    #[test]
    fn test_pending_ticker_shows_placeholder() {
        // A source that blocks until we drop the effect.
        let (tx, rx) = std::sync::mpsc::channel::<()>();
        let mut ticker = TickerEffect::new(9, 3, move || {
            let _ = rx.recv();
            "late".to_string()
        });

        ticker.render_frame(0);
        assert!(!ticker.is_settled());
        assert_eq!(ticker.buffer().get(3, 1), Some(Cell::from_char('.')));

        let _ = tx.send(()); // unblock so drop can join
    }
}
