//! Cancellable worker-thread helper for effects with slow content sources.
//!
//! `render_frame` must never block, so an effect that needs long-running
//! work hands it to a `BackgroundTask` and polls `try_take` each frame.
//! Completion is published through an atomic flag, the value through a
//! channel; dropping the task requests cancellation and joins the worker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};

use log::warn;

pub struct BackgroundTask<T> {
    handle: Option<JoinHandle<()>>,
    rx: mpsc::Receiver<T>,
    done: Arc<AtomicBool>,
    cancel: Arc<AtomicBool>,
}

impl<T: Send + 'static> BackgroundTask<T> {
    /// Run `work` on a worker thread. The closure receives the cancellation
    /// flag and should return early when it flips, if it can.
    pub fn spawn<F>(work: F) -> Self
    where
        F: FnOnce(&AtomicBool) -> T + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let done = Arc::new(AtomicBool::new(false));
        let cancel = Arc::new(AtomicBool::new(false));
        let worker_done = Arc::clone(&done);
        let worker_cancel = Arc::clone(&cancel);
        let handle = thread::spawn(move || {
            let value = work(&worker_cancel);
            // The receiver is gone if the owner was dropped mid-run.
            let _ = tx.send(value);
            worker_done.store(true, Ordering::Release);
        });
        Self {
            handle: Some(handle),
            rx,
            done,
            cancel,
        }
    }

    /// Whether the worker has finished (its value may still be pending in
    /// the channel).
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Non-blocking: the result if it is ready, None otherwise.
    pub fn try_take(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    /// Ask the worker to stop early.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Release);
    }
}

impl<T> Drop for BackgroundTask<T> {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("background worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_value_arrives_without_blocking() {
        let mut task = BackgroundTask::spawn(|_| 42u32);
        let mut polls = 0;
        let value = loop {
            if let Some(v) = task.try_take() {
                break v;
            }
            polls += 1;
            assert!(polls < 1000, "worker never finished");
            thread::sleep(Duration::from_millis(1));
        };
        assert_eq!(value, 42);
        assert!(task.is_done());
    }

    #[test]
    fn test_cancel_reaches_the_worker() {
        let task = BackgroundTask::spawn(|cancel: &AtomicBool| {
            while !cancel.load(Ordering::Acquire) {
                thread::sleep(Duration::from_millis(1));
            }
            true
        });
        task.cancel();
        // Drop joins; the loop above only exits via the flag.
        drop(task);
    }
}
