//! Single-slot deferred task scheduler
//!
//! A [`Debouncer`] holds at most one pending task: scheduling a new one
//! replaces any task that has not yet run. The task fires once the quiet
//! period elapses without a replacement arriving.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

type Task = Box<dyn FnOnce() + Send>;

enum Msg {
    Run(Task),
    Cancel,
}

/// Debounced task runner with a single pending slot
pub struct Debouncer {
    tx: Sender<Msg>,
    worker: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::channel::<Msg>();
        let worker = thread::spawn(move || {
            while let Ok(msg) = rx.recv() {
                let mut task = match msg {
                    Msg::Run(t) => t,
                    Msg::Cancel => continue,
                };
                // Wait out the quiet period, replacing the pending task
                // whenever a newer one arrives.
                loop {
                    match rx.recv_timeout(delay) {
                        Ok(Msg::Run(t)) => task = t,
                        Ok(Msg::Cancel) => break,
                        Err(RecvTimeoutError::Timeout) => {
                            task();
                            break;
                        }
                        Err(RecvTimeoutError::Disconnected) => {
                            // Shutting down with a task pending: run it
                            // rather than lose the write.
                            task();
                            return;
                        }
                    }
                }
            }
        });
        Self {
            tx,
            worker: Some(worker),
        }
    }

    /// Schedule `task`, replacing any pending not-yet-run task
    pub fn schedule<F: FnOnce() + Send + 'static>(&self, task: F) {
        // Send only fails if the worker is gone, which means we are
        // already shutting down.
        let _ = self.tx.send(Msg::Run(Box::new(task)));
    }

    /// Discard any pending task without running it
    pub fn cancel(&self) {
        let _ = self.tx.send(Msg::Cancel);
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain its pending slot.
        let (dead_tx, _) = mpsc::channel();
        drop(std::mem::replace(&mut self.tx, dead_tx));
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_coalesces_rapid_schedules() {
        let debouncer = Debouncer::new(Duration::from_millis(50));
        let runs = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(AtomicUsize::new(0));

        for i in 1..=5 {
            let runs = runs.clone();
            let last = last.clone();
            debouncer.schedule(move || {
                runs.fetch_add(1, Ordering::SeqCst);
                last.store(i, Ordering::SeqCst);
            });
        }

        thread::sleep(Duration::from_millis(300));
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(last.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_cancel_discards_pending() {
        let debouncer = Debouncer::new(Duration::from_millis(50));
        let runs = Arc::new(AtomicUsize::new(0));

        let r = runs.clone();
        debouncer.schedule(move || {
            r.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        thread::sleep(Duration::from_millis(300));
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_runs_after_quiet_period() {
        let debouncer = Debouncer::new(Duration::from_millis(20));
        let runs = Arc::new(AtomicUsize::new(0));

        let r = runs.clone();
        debouncer.schedule(move || {
            r.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(200));

        let r = runs.clone();
        debouncer.schedule(move || {
            r.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(200));

        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
