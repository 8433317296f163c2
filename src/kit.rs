//! The context object page scripts talk to.
//!
//! [`PageKit`] bundles a document, a scheduler, a prompt and the config, and
//! exposes the five page operations on top of them. The browser entry point
//! builds one over `web-sys`; tests build one over the in-memory backends.

#[cfg(test)]
#[path = "kit_test.rs"]
mod kit_test;

use crate::config::UiConfig;
use crate::confirm::{self, Prompt};
use crate::date::{self, DateInput};
use crate::dom::{ElementFactory, ElementLocator};
use crate::error::DomError;
use crate::notify::{self, NotificationHandle, NotificationKind};
use crate::page;
use crate::style;
use crate::timer::Scheduler;
use crate::validate::{self, ValidationReport};

pub struct PageKit<D, S, P> {
    doc: D,
    scheduler: S,
    prompt: P,
    config: UiConfig,
}

impl<D, S, P> PageKit<D, S, P>
where
    D: ElementFactory + ElementLocator,
    D::Element: 'static,
    S: Scheduler,
    P: Prompt,
{
    pub fn new(doc: D, scheduler: S, prompt: P, config: UiConfig) -> Self {
        Self { doc, scheduler, prompt, config }
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Script-load step: inject the stylesheet notifications animate with.
    pub fn install(&self) -> Result<D::Element, DomError> {
        style::inject_styles(&self.doc, &self.config)
    }

    /// Content-loaded step: readiness log plus autofocus.
    pub fn on_content_loaded(&self) -> Option<D::Element> {
        page::on_content_loaded(&self.doc, &self.config.form.form_class)
    }

    pub fn format_date<'a>(&self, value: impl Into<DateInput<'a>>) -> String {
        date::format_date_with(value, &self.config.date)
    }

    pub fn format_date_time<'a>(&self, value: impl Into<DateInput<'a>>) -> String {
        date::format_date_time_with(value, &self.config.date)
    }

    pub fn show_notification(
        &self,
        message: &str,
        kind: NotificationKind,
    ) -> Result<NotificationHandle<D::Element>, DomError> {
        notify::show_notification(&self.doc, &self.scheduler, &self.config.notification, message, kind)
    }

    pub fn confirm_action(&self, message: &str) -> bool {
        confirm::confirm_action(&self.prompt, message)
    }

    pub fn validate_form(&self, form_id: &str) -> bool {
        self.validate_form_report(form_id).is_valid()
    }

    pub fn validate_form_report(&self, form_id: &str) -> ValidationReport<D::Element> {
        validate::validate_form_report(&self.doc, form_id, &self.config.form.error_class)
    }
}
