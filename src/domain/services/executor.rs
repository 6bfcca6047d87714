//! Bounded executor
//!
//! Runs one homogeneous batch over a fixed pool of worker threads. Results are
//! delivered in completion order. The first failing task stops the dispatch of
//! further tasks; tasks already running are allowed to finish, then the first
//! error is returned.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

/// Worker count used when nothing else is configured
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Fixed-size worker pool over a task list
#[derive(Debug, Clone, Copy)]
pub struct BoundedExecutor {
    concurrency: usize,
}

impl Default for BoundedExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_CONCURRENCY)
    }
}

impl BoundedExecutor {
    /// Create a pool of `concurrency` workers (at least one)
    pub fn new(concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Run `action` over every task.
    ///
    /// `on_complete` is called on the calling thread for each successful result,
    /// as results arrive. Returns all successful results in completion order, or
    /// the first error.
    pub fn run<T, R, E, F, C>(
        &self,
        tasks: &[T],
        action: F,
        mut on_complete: C,
    ) -> Result<Vec<R>, E>
    where
        T: Sync,
        R: Send,
        E: Send,
        F: Fn(&T) -> Result<R, E> + Sync,
        C: FnMut(&R),
    {
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        let workers = self.concurrency.min(tasks.len());
        let next = AtomicUsize::new(0);
        let aborted = AtomicBool::new(false);
        let (tx, rx) = mpsc::channel::<Result<R, E>>();

        thread::scope(|scope| {
            for _ in 0..workers {
                let tx = tx.clone();
                let (next, aborted, action) = (&next, &aborted, &action);
                scope.spawn(move || {
                    while !aborted.load(Ordering::SeqCst) {
                        let index = next.fetch_add(1, Ordering::SeqCst);
                        let Some(task) = tasks.get(index) else {
                            break;
                        };
                        let result = action(task);
                        if result.is_err() {
                            aborted.store(true, Ordering::SeqCst);
                        }
                        if tx.send(result).is_err() {
                            break;
                        }
                    }
                });
            }
            // Only worker senders remain, so the loop ends once every worker exits.
            drop(tx);

            let mut results = Vec::with_capacity(tasks.len());
            let mut first_error = None;
            for result in rx {
                match result {
                    Ok(value) => {
                        on_complete(&value);
                        results.push(value);
                    }
                    Err(e) => {
                        if first_error.is_none() {
                            first_error = Some(e);
                        }
                    }
                }
            }

            match first_error {
                Some(e) => Err(e),
                None => Ok(results),
            }
        })
    }
}
