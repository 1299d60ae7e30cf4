//! Periodic task scheduling
//!
//! Streams drive their capture workers through a [`Scheduler`]. The trait is
//! the whole contract: register a task with a phase and period, get a handle
//! back, and later hand that handle in to cancel it.
//!
//! Two implementations ship with the crate:
//!
//! - [`TokioScheduler`] runs every task on a tokio runtime. Each tick is
//!   dispatched to the blocking pool, so a slow worker can still be running
//!   when its next tick fires.
//! - [`ManualScheduler`] never fires on its own; the caller triggers ticks.
//!   Useful for embedding into an existing loop and for tests.
//!
//! Cancellation is fire-and-forget. Removing a task stops future ticks but
//! does not wait for an invocation that is already running.

pub mod manual;
pub mod periodic;

use std::sync::Arc;
use std::time::Duration;

pub use manual::ManualScheduler;
pub use periodic::TokioScheduler;

/// Body of a periodic task
pub type PeriodicTask = Arc<dyn Fn() + Send + Sync>;

/// Opaque handle to a registered periodic task
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    pub(crate) fn id(&self) -> u64 {
        self.0
    }
}

/// Registration and cancellation of periodic tasks
pub trait Scheduler: Send + Sync {
    /// Register `task` to run every `period`, first after `phase`.
    ///
    /// Returns `None` if the task could not be registered.
    fn add_periodic(
        &self,
        phase: Duration,
        period: Duration,
        task: PeriodicTask,
    ) -> Option<TaskHandle>;

    /// Cancel a task. Returns false if the handle is unknown.
    fn remove(&self, handle: TaskHandle) -> bool;
}
