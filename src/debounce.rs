use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Collapses rapid repeated triggers into the last one.
///
/// Each trigger cancels any pending scheduled action and schedules the new
/// one `window` after the latest call. Only the last call in a burst fires,
/// exactly once, after the window elapses with no further calls. A
/// cancelled action has produced no side effects: the action only runs
/// once the full window has passed.
///
/// Cancellation is an explicit transition on the pending slot (generation
/// bump plus task abort), so at most one scheduled action exists at a time.
pub struct Debouncer {
    window: Duration,
    inner: Arc<Mutex<Pending>>,
}

#[derive(Default)]
struct Pending {
    /// Incremented on every trigger; a scheduled task only fires if it
    /// still owns the latest generation when its window elapses.
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            inner: Arc::new(Mutex::new(Pending::default())),
        }
    }

    /// Schedule `action` to run after the debounce window, cancelling any
    /// previously pending action.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.inner.lock();

        pending.generation = pending.generation.wrapping_add(1);
        let generation = pending.generation;

        if let Some(task) = pending.task.take() {
            task.abort();
        }

        let inner = Arc::clone(&self.inner);
        let window = self.window;

        pending.task = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;

            {
                let mut pending = inner.lock();
                if pending.generation != generation {
                    // Superseded while we raced the abort.
                    return;
                }
                pending.task = None;
            }

            action.await;
        }));
    }

    /// Whether an action is currently scheduled and waiting out the window.
    pub fn is_pending(&self) -> bool {
        self.inner.lock().task.is_some()
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}
