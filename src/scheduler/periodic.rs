//! Tokio-backed periodic scheduler

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{PeriodicTask, Scheduler, TaskHandle};

/// Scheduler that runs each periodic task as a tokio task
///
/// The timer loop lives on the async runtime; every tick hands the task body
/// to `spawn_blocking` without awaiting it, so ticks never queue behind a
/// slow invocation.
pub struct TokioScheduler {
    runtime: Handle,
    next_id: AtomicU64,
    tasks: Mutex<HashMap<u64, JoinHandle<()>>>,
}

impl TokioScheduler {
    /// Create a scheduler on the given runtime
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            next_id: AtomicU64::new(1),
            tasks: Mutex::new(HashMap::new()),
        }
    }

    /// Create a scheduler on the runtime of the calling context, if any
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }

    /// Number of registered tasks
    pub fn task_count(&self) -> usize {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Scheduler for TokioScheduler {
    fn add_periodic(
        &self,
        phase: Duration,
        period: Duration,
        task: PeriodicTask,
    ) -> Option<TaskHandle> {
        if period.is_zero() {
            tracing::warn!("Refusing periodic task with zero period");
            return None;
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let join = self.runtime.spawn(async move {
            tokio::time::sleep(phase).await;

            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                let task = Arc::clone(&task);
                // Detached: the next tick does not wait for this one
                tokio::task::spawn_blocking(move || task());
            }
        });

        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, join);

        tracing::trace!(task = id, period_us = period.as_micros() as u64, "Periodic task added");

        Some(TaskHandle::new(id))
    }

    fn remove(&self, handle: TaskHandle) -> bool {
        let removed = self
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&handle.id());

        match removed {
            Some(join) => {
                join.abort();
                tracing::trace!(task = handle.id(), "Periodic task removed");
                true
            }
            None => false,
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        let tasks = self.tasks.get_mut().unwrap_or_else(PoisonError::into_inner);
        for (_, join) in tasks.drain() {
            join.abort();
        }
    }
}
