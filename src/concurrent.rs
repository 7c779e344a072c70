use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Bounded worker pool: one spawned task per item, at most `concurrency` running.
///
/// Outputs are handed back in completion order. Dropping an `execute` future
/// aborts whatever is still queued or in flight.
pub struct ConcurrentProbe {
    semaphore: Arc<Semaphore>,
    completed: Arc<AtomicUsize>,
    errors: Arc<AtomicUsize>,
}

impl ConcurrentProbe {
    pub fn new(concurrency: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(concurrency.max(1))),
            completed: Arc::new(AtomicUsize::new(0)),
            errors: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Run `task_fn` over every task, calling `on_complete` as each finishes.
    ///
    /// `on_complete` receives `None` for a task that panicked or was cancelled.
    pub async fn execute<T, F, Fut, C>(&self, tasks: Vec<T>, task_fn: F, mut on_complete: C)
    where
        F: Fn(T) -> Fut + Clone + Send + 'static,
        Fut: Future + Send + 'static,
        Fut::Output: Send + 'static,
        T: Send + 'static,
        C: FnMut(Option<Fut::Output>),
    {
        let mut set = JoinSet::new();

        for task in tasks {
            let semaphore = self.semaphore.clone();
            let task_fn = task_fn.clone();
            let completed = self.completed.clone();

            set.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok()?;
                let result = task_fn(task).await;
                completed.fetch_add(1, Ordering::Relaxed);
                Some(result)
            });
        }

        while let Some(joined) = set.join_next().await {
            match joined {
                Ok(Some(output)) => on_complete(Some(output)),
                Ok(None) => {
                    self.errors.fetch_add(1, Ordering::Relaxed);
                    on_complete(None);
                }
                Err(e) => {
                    tracing::warn!("Worker task failed: {}", e);
                    self.errors.fetch_add(1, Ordering::Relaxed);
                    on_complete(None);
                }
            }
        }
    }

    /// (completed, errors)
    pub fn get_stats(&self) -> (usize, usize) {
        (
            self.completed.load(Ordering::Relaxed),
            self.errors.load(Ordering::Relaxed),
        )
    }
}
