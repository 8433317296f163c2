//! Deferred tasks with cancellable handles.
//!
//! [`Scheduler`] is the seam between notification logic and the event loop.
//! The browser implementation wraps `gloo-timers`; [`ManualScheduler`] runs on
//! a virtual clock that tests advance explicitly.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Longest delay `setTimeout` honours; larger values overflow and fire at once.
pub const MAX_TIMEOUT_MS: u32 = 2_147_483_647;

/// A one-shot deferred task.
pub type Task = Box<dyn FnOnce()>;

/// Runs tasks after a delay on the current thread.
///
/// Implementations are cheap handles; clones share one timer queue.
pub trait Scheduler: Clone + 'static {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle;
}

/// `delay` in whole milliseconds, clamped to [`MAX_TIMEOUT_MS`].
#[must_use]
pub fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).map_or(MAX_TIMEOUT_MS, |ms| ms.min(MAX_TIMEOUT_MS))
}

/// Cancels a scheduled task. Dropping the handle leaves the task scheduled.
#[must_use = "dropping a TimerHandle does not cancel the task"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// Handle for a task that cannot be cancelled (already ran, or never
    /// scheduled).
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    /// Cancel the task. No-op when it already ran.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle").field("cancellable", &self.cancel.is_some()).finish()
    }
}

struct Entry {
    id: u64,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    queue: Vec<Entry>,
}

/// Virtual-clock scheduler. Nothing runs until [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Move the clock forward by `by`, running every task that falls due in
    /// deadline order (ties in scheduling order). Tasks scheduled by running
    /// tasks also fire if they fall inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.clock.borrow_mut().now = target;
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut clock = self.clock.borrow_mut();
        let idx = clock
            .queue
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= target)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(i, _)| i)?;
        let entry = clock.queue.remove(idx);
        clock.now = entry.due;
        Some(entry.task)
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("ManualScheduler").field("now", &clock.now).field("pending", &clock.queue.len()).finish()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let id = {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.queue.push(Entry { id, due, task });
            id
        };
        let clock = Rc::downgrade(&self.clock);
        TimerHandle::new(move || {
            if let Some(clock) = clock.upgrade() {
                clock.borrow_mut().queue.retain(|e| e.id != id);
            }
        })
    }
}
