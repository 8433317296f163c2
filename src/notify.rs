//! Transient toast notifications.
//!
//! A notification is a fixed-position `div` in the top-right corner. After
//! `display_ms` it gets the `notification-exit` class and its inline
//! animation switches to `slideOut`; `exit_ms` later it is removed.
//!
//! DESIGN
//! ======
//! Exactly one timer is pending per notification at any time: the exit timer
//! first, then the removal timer it schedules. [`NotificationHandle`] shares
//! that slot, so `cancel` and `dismiss` always reach whichever stage is live.
//! Concurrent notifications are not queued or stacked; they overlap.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::NotificationConfig;
use crate::dom::{DomElement, ElementFactory};
use crate::error::DomError;
use crate::timer::{Scheduler, TimerHandle};

pub const NOTIFICATION_CLASS: &str = "notification";
pub const EXIT_CLASS: &str = "notification-exit";

/// Visual treatment of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    /// Parse a page-script kind tag. Only `"success"` is success; every other
    /// tag, including unknown ones, renders as an error.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag == "success" { Self::Success } else { Self::Error }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Modifier class, e.g. `notification-success`.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notification-success",
            Self::Error => "notification-error",
        }
    }

    fn background(self, config: &NotificationConfig) -> &str {
        match self {
            Self::Success => &config.success_color,
            Self::Error => &config.error_color,
        }
    }
}

/// `animation` shorthand for the entry slide.
#[must_use]
pub fn enter_animation(config: &NotificationConfig) -> String {
    format!("slideIn {}s ease-out", secs(config.exit_ms))
}

/// `animation` shorthand for the exit slide.
#[must_use]
pub fn exit_animation(config: &NotificationConfig) -> String {
    format!("slideOut {}s ease-in forwards", secs(config.exit_ms))
}

fn secs(ms: u64) -> f64 {
    Duration::from_millis(ms).as_secs_f64()
}

/// Inline style for a notification box running `animation`.
///
/// The animation is inline, so the exit stage must rewrite this attribute to
/// replace `slideIn`.
#[must_use]
pub fn inline_style(kind: NotificationKind, config: &NotificationConfig, animation: &str) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; border-radius: 8px; \
         color: white; font-weight: 500; z-index: 1000; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); \
         animation: {animation}; background: {};",
        kind.background(config)
    )
}

type PendingTimer = Rc<RefCell<Option<TimerHandle>>>;

/// Control over one displayed notification.
///
/// Dropping the handle leaves the notification on its normal schedule.
#[derive(Debug)]
pub struct NotificationHandle<E> {
    element: E,
    pending: PendingTimer,
}

impl<E: DomElement> NotificationHandle<E> {
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Whether a removal stage is still scheduled.
    pub fn is_scheduled(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// Stop the automatic removal. The notification stays where it is.
    pub fn cancel(&self) {
        let pending = self.pending.borrow_mut().take();
        if let Some(timer) = pending {
            timer.cancel();
        }
    }

    /// Cancel the automatic removal and remove the notification now.
    pub fn dismiss(&self) {
        self.cancel();
        self.element.remove();
    }
}

/// Show `message` and schedule its removal.
///
/// Fails only when the backend cannot build the node or there is no body.
pub fn show_notification<F, S>(
    doc: &F,
    scheduler: &S,
    config: &NotificationConfig,
    message: &str,
    kind: NotificationKind,
) -> Result<NotificationHandle<F::Element>, DomError>
where
    F: ElementFactory,
    F::Element: 'static,
    S: Scheduler,
{
    let body = doc.body().ok_or(DomError::MissingBody)?;
    let element = doc.create_element("div")?;
    element.set_attribute("class", &format!("{NOTIFICATION_CLASS} {}", kind.css_class()))?;
    element.set_attribute("style", &inline_style(kind, config, &enter_animation(config)))?;
    element.set_text_content(message);
    body.append_child(&element)?;
    log::debug!("notification shown: kind={} message={message:?}", kind.as_str());

    let pending: PendingTimer = Rc::new(RefCell::new(None));
    let exit_delay = Duration::from_millis(config.exit_ms);
    let exit_style = inline_style(kind, config, &exit_animation(config));

    let el = element.clone();
    let slot = Rc::clone(&pending);
    let sched = scheduler.clone();
    let exit_timer = scheduler.schedule(
        Duration::from_millis(config.display_ms),
        Box::new(move || {
            let _ = el.add_class(EXIT_CLASS);
            let _ = el.set_attribute("style", &exit_style);
            let slot_for_removal = Rc::clone(&slot);
            let removal = sched.schedule(
                exit_delay,
                Box::new(move || {
                    el.remove();
                    slot_for_removal.borrow_mut().take();
                }),
            );
            *slot.borrow_mut() = Some(removal);
        }),
    );
    *pending.borrow_mut() = Some(exit_timer);

    Ok(NotificationHandle { element, pending })
}
