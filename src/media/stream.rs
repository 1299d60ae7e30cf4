//! A single media stream and its periodic worker
//!
//! A stream owns its descriptor and an optional capture worker. Starting the
//! stream registers a periodic task at `1 / framerate`; every tick runs the
//! worker unless the previous invocation is still in progress, in which case
//! the tick is dropped.
//!
//! ```text
//!            start() ok
//!   Stopped ───────────► Running ──┐ start(): no-op
//!     ▲  │                 │  ▲    │
//!     │  └─ stop(): no-op  │  └────┘
//!     └────────────────────┘
//!           stop() / kill()
//! ```
//!
//! Stopping does not join a worker invocation that is already running; it
//! finishes on the scheduler's thread and releases the busy flag itself.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::scheduler::{Scheduler, TaskHandle};

use super::info::StreamInfo;

/// Capture worker invoked once per frame period
pub type Worker = Arc<dyn Fn(&StreamInfo) + Send + Sync>;

/// Non-blocking flag guarding worker invocations
///
/// Released by the RAII [`BusyToken`], so release happens exactly once per
/// successful acquire, including when the worker panics.
#[derive(Debug, Default)]
struct BusyFlag(AtomicBool);

impl BusyFlag {
    fn try_acquire(&self) -> Option<BusyToken<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| BusyToken(self))
    }

    fn is_held(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

struct BusyToken<'a>(&'a BusyFlag);

impl Drop for BusyToken<'_> {
    fn drop(&mut self) {
        (self.0).0.store(false, Ordering::Release);
    }
}

/// One media stream
pub struct Stream {
    info: Arc<StreamInfo>,
    worker: Option<Worker>,
    scheduler: Arc<dyn Scheduler>,
    /// Present exactly while running
    handle: Option<TaskHandle>,
    busy: Arc<BusyFlag>,
}

impl Stream {
    /// Create a stream.
    ///
    /// Returns `None` if the descriptor does not fit the information message.
    /// Without a worker the stream can never be started.
    pub fn create(
        info: StreamInfo,
        worker: Option<Worker>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Option<Self> {
        if !info.is_valid() {
            tracing::warn!(
                name = %info.name,
                name_len = info.name.len(),
                uri_len = info.uri.len(),
                "Stream descriptor does not fit the wire format"
            );
            return None;
        }

        Some(Self {
            info: Arc::new(info),
            worker,
            scheduler,
            handle: None,
            busy: Arc::new(BusyFlag::default()),
        })
    }

    /// Stream descriptor
    pub fn info(&self) -> &StreamInfo {
        &self.info
    }

    /// Whether the stream has a capture worker
    pub fn has_worker(&self) -> bool {
        self.worker.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether a worker invocation is in progress right now
    pub fn is_busy(&self) -> bool {
        self.busy.is_held()
    }

    /// Start invoking the worker periodically.
    ///
    /// Returns the running state afterwards. Already running, or having no
    /// worker, makes this a no-op. If the scheduler refuses the task the
    /// stream stays stopped and this returns false.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return true;
        }

        let worker = match &self.worker {
            Some(worker) => Arc::clone(worker),
            None => return false,
        };

        let period = match Duration::try_from_secs_f64(1.0 / f64::from(self.info.framerate)) {
            Ok(period) => period,
            Err(_) => {
                tracing::warn!(
                    stream = %self.info.name,
                    framerate = self.info.framerate,
                    "Cannot derive frame period"
                );
                return false;
            }
        };

        let info = Arc::clone(&self.info);
        let busy = Arc::clone(&self.busy);
        let task = Arc::new(move || {
            // Previous invocation still running: drop this tick
            let Some(_token) = busy.try_acquire() else {
                return;
            };
            worker(&info);
        });

        self.handle = self.scheduler.add_periodic(Duration::ZERO, period, task);
        self.is_running()
    }

    /// Stop the stream if it is running
    pub fn stop(&mut self) {
        if self.is_running() {
            self.kill();
        }
    }

    /// Cancel the periodic task unconditionally.
    ///
    /// Safe to call when nothing is registered. An invocation already in
    /// flight is not waited for.
    pub fn kill(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !self.scheduler.remove(handle) {
                tracing::debug!(stream = %self.info.name, "Scheduler did not know the stream task");
            }
        }
    }
}

impl Drop for Stream {
    fn drop(&mut self) {
        self.kill();
    }
}

impl std::fmt::Debug for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stream")
            .field("info", &self.info)
            .field("has_worker", &self.has_worker())
            .field("running", &self.is_running())
            .finish()
    }
}
