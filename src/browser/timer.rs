//! `Scheduler` over `gloo-timers`.

use std::time::Duration;

use gloo_timers::callback::Timeout;

use crate::timer::{Scheduler, Task, TimerHandle, timeout_millis};

/// Schedules on the page's `setTimeout`.
///
/// Each `Timeout` is forgotten so it outlives the call; the raw timer id it
/// yields is what the handle hands to `clearTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebScheduler;

impl Scheduler for WebScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let id = Timeout::new(timeout_millis(delay), task).forget();
        let Some(id) = id.as_f64() else {
            return TimerHandle::inert();
        };
        TimerHandle::new(move || {
            if let Some(window) = web_sys::window() {
                #[allow(clippy::cast_possible_truncation)]
                window.clear_timeout_with_handle(id as i32);
            }
        })
    }
}
