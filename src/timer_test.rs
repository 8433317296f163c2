use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_for_task = Rc::clone(&log);
    let make = move |label: &'static str| -> Task {
        let log = Rc::clone(&log_for_task);
        Box::new(move || log.borrow_mut().push(label))
    };
    (log, make)
}

// =============================================================
// ManualScheduler
// =============================================================

#[test]
fn nothing_runs_before_deadline() {
    let sched = ManualScheduler::new();
    let (log, task) = recorder();
    let _ = sched.schedule(ms(100), task("a"));
    sched.advance(ms(99));
    assert!(log.borrow().is_empty());
    assert_eq!(sched.pending(), 1);
    sched.advance(ms(1));
    assert_eq!(*log.borrow(), vec!["a"]);
    assert_eq!(sched.pending(), 0);
}

#[test]
fn tasks_run_in_deadline_order_with_ties_in_schedule_order() {
    let sched = ManualScheduler::new();
    let (log, task) = recorder();
    let _ = sched.schedule(ms(30), task("late"));
    let _ = sched.schedule(ms(10), task("early"));
    let _ = sched.schedule(ms(10), task("early-2"));
    sched.advance(ms(50));
    assert_eq!(*log.borrow(), vec!["early", "early-2", "late"]);
    assert_eq!(sched.now(), ms(50));
}

#[test]
fn tasks_scheduled_by_tasks_fire_within_the_same_advance() {
    let sched = ManualScheduler::new();
    let (log, task) = recorder();
    let inner_sched = sched.clone();
    let follow_up = task("second");
    let first = task("first");
    let _ = sched.schedule(
        ms(100),
        Box::new(move || {
            first();
            let _ = inner_sched.schedule(ms(50), follow_up);
        }),
    );
    sched.advance(ms(150));
    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn chained_task_is_relative_to_its_parent_deadline() {
    let sched = ManualScheduler::new();
    let (log, task) = recorder();
    let inner_sched = sched.clone();
    let follow_up = task("second");
    let _ = sched.schedule(
        ms(100),
        Box::new(move || {
            let _ = inner_sched.schedule(ms(50), follow_up);
        }),
    );
    sched.advance(ms(149));
    assert!(log.borrow().is_empty());
    sched.advance(ms(1));
    assert_eq!(*log.borrow(), vec!["second"]);
}

// =============================================================
// TimerHandle
// =============================================================

#[test]
fn cancel_prevents_the_task() {
    let sched = ManualScheduler::new();
    let (log, task) = recorder();
    let handle = sched.schedule(ms(10), task("a"));
    handle.cancel();
    sched.advance(ms(100));
    assert!(log.borrow().is_empty());
    assert_eq!(sched.pending(), 0);
}

#[test]
fn dropping_the_handle_keeps_the_task() {
    let sched = ManualScheduler::new();
    let (log, task) = recorder();
    drop(sched.schedule(ms(10), task("a")));
    sched.advance(ms(10));
    assert_eq!(*log.borrow(), vec!["a"]);
}

#[test]
fn cancel_after_run_is_a_noop() {
    let sched = ManualScheduler::new();
    let (log, task) = recorder();
    let handle = sched.schedule(ms(10), task("a"));
    let _ = sched.schedule(ms(20), task("b"));
    sched.advance(ms(10));
    handle.cancel();
    sched.advance(ms(10));
    assert_eq!(*log.borrow(), vec!["a", "b"]);
}

#[test]
fn inert_handle_cancels_nothing() {
    TimerHandle::inert().cancel();
}

// =============================================================
// timeout_millis
// =============================================================

#[test]
fn timeout_millis_passes_ordinary_delays() {
    assert_eq!(timeout_millis(ms(0)), 0);
    assert_eq!(timeout_millis(ms(3000)), 3000);
}

#[test]
fn timeout_millis_clamps_to_signed_range() {
    assert_eq!(timeout_millis(ms(u64::from(MAX_TIMEOUT_MS))), MAX_TIMEOUT_MS);
    assert_eq!(timeout_millis(ms(u64::from(MAX_TIMEOUT_MS) + 1)), MAX_TIMEOUT_MS);
    assert_eq!(timeout_millis(ms(u64::from(u32::MAX))), MAX_TIMEOUT_MS);
    assert_eq!(timeout_millis(Duration::MAX), MAX_TIMEOUT_MS);
}
