//! Caller-driven scheduler

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use super::{PeriodicTask, Scheduler, TaskHandle};

#[derive(Clone)]
struct Registration {
    period: Duration,
    task: PeriodicTask,
}

/// Scheduler whose tasks only run when [`ManualScheduler::tick`] is called
///
/// Keeps counts of registrations and removals so callers can verify how a
/// stream used it.
#[derive(Default)]
pub struct ManualScheduler {
    next_id: AtomicU64,
    tasks: Mutex<BTreeMap<u64, Registration>>,
    added: AtomicUsize,
    removed: AtomicUsize,
    reject: AtomicBool,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent registrations fail (or succeed again)
    pub fn reject_registrations(&self, reject: bool) {
        self.reject.store(reject, Ordering::SeqCst);
    }

    /// Run every registered task once, in registration order.
    ///
    /// Returns the number of tasks run.
    pub fn tick(&self) -> usize {
        // Snapshot so a task may call back into the scheduler
        let tasks: Vec<PeriodicTask> = self
            .lock()
            .values()
            .map(|r| r.task.clone())
            .collect();

        for task in &tasks {
            task();
        }
        tasks.len()
    }

    /// Run a single task once. Returns false if it is not registered.
    pub fn tick_task(&self, id: u64) -> bool {
        let task = self.lock().get(&id).map(|r| r.task.clone());
        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Ids of registered tasks, oldest first
    pub fn task_ids(&self) -> Vec<u64> {
        self.lock().keys().copied().collect()
    }

    /// Period of a registered task
    pub fn period(&self, id: u64) -> Option<Duration> {
        self.lock().get(&id).map(|r| r.period)
    }

    pub fn task_count(&self) -> usize {
        self.lock().len()
    }

    /// Successful registrations so far
    pub fn added(&self) -> usize {
        self.added.load(Ordering::SeqCst)
    }

    /// Successful removals so far
    pub fn removed(&self) -> usize {
        self.removed.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<u64, Registration>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn add_periodic(
        &self,
        _phase: Duration,
        period: Duration,
        task: PeriodicTask,
    ) -> Option<TaskHandle> {
        if self.reject.load(Ordering::SeqCst) {
            return None;
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.lock().insert(id, Registration { period, task });
        self.added.fetch_add(1, Ordering::SeqCst);
        Some(TaskHandle::new(id))
    }

    fn remove(&self, handle: TaskHandle) -> bool {
        let found = self.lock().remove(&handle.id()).is_some();
        if found {
            self.removed.fetch_add(1, Ordering::SeqCst);
        }
        found
    }
}
