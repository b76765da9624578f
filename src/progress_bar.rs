//! Delayed fill of the progress bar.
//!
//! The bar starts empty and jumps to its target after a fixed delay so the
//! page shows a visible fill transition. Once the bar is torn down (or
//! dropped) a pending fill never lands.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::debug;

pub const DEFAULT_FILL_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct ProgressBar {
    width: Arc<watch::Sender<f64>>,
    pending: Mutex<Pending>,
}

#[derive(Debug, Default)]
struct Pending {
    handle: Option<AbortHandle>,
    torn_down: bool,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBar {
    pub fn new() -> Self {
        let (width, _) = watch::channel(0.0);
        Self {
            width: Arc::new(width),
            pending: Mutex::new(Pending::default()),
        }
    }

    pub fn width(&self) -> f64 {
        *self.width.borrow()
    }

    /// True while a fill is scheduled but has not landed yet.
    pub fn is_pending(&self) -> bool {
        self.lock()
            .handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn is_torn_down(&self) -> bool {
        self.lock().torn_down
    }

    pub fn subscribe(&self) -> watch::Receiver<f64> {
        self.width.subscribe()
    }

    /// Reset the bar to empty and fill it to `target` once `delay` elapses.
    ///
    /// Must be called from within a tokio runtime. Replaces any fill that is
    /// still pending; does nothing after teardown.
    pub fn animate_to(&self, target: f64, delay: Duration) {
        let mut pending = self.lock();
        if pending.torn_down {
            return;
        }
        if let Some(previous) = pending.handle.take() {
            previous.abort();
        }

        self.width.send_replace(0.0);
        let width = Arc::clone(&self.width);
        let task = tokio::spawn(async move {
            sleep(delay).await;
            width.send_replace(target);
            debug!("progress bar filled to {target}%");
        });
        pending.handle = Some(task.abort_handle());
        debug!("progress bar fill to {target}% scheduled in {delay:?}");
    }

    pub fn tear_down(&self) {
        let mut pending = self.lock();
        pending.torn_down = true;
        if let Some(handle) = pending.handle.take() {
            handle.abort();
            debug!("progress bar torn down, pending fill cancelled");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Pending> {
        // Poisoning cannot leave the flags half-written.
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for ProgressBar {
    fn drop(&mut self) {
        self.tear_down();
    }
}
