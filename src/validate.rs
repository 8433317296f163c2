//! Required-field form validation.
//!
//! Every descendant of the form carrying a `required` attribute must have a
//! non-blank value. Empty fields get the error class, filled fields lose it,
//! so validating again after the user fixes a field clears stale markers.
//! Submission is never blocked here; callers act on the result.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::config::DEFAULT_ERROR_CLASS;
use crate::dom::{DomElement, ElementLocator, Selector};

/// Outcome of one validation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport<E> {
    /// Whether the form was found at all.
    pub form_found: bool,
    /// Number of required fields inspected.
    pub checked: usize,
    /// Required fields that were blank, in document order.
    pub missing: Vec<E>,
}

impl<E> ValidationReport<E> {
    /// `false` for a missing form, otherwise whether no field was blank.
    pub fn is_valid(&self) -> bool {
        self.form_found && self.missing.is_empty()
    }
}

fn is_filled<E: DomElement>(field: &E) -> bool {
    field.value().is_some_and(|v| !v.trim().is_empty())
}

/// Validate the form with id `form_id`, marking blank fields with
/// `error_class`.
pub fn validate_form_report<L: ElementLocator>(
    doc: &L,
    form_id: &str,
    error_class: &str,
) -> ValidationReport<L::Element> {
    let Some(form) = doc.element_by_id(form_id) else {
        log::debug!("validate_form: no element #{form_id}");
        return ValidationReport { form_found: false, checked: 0, missing: Vec::new() };
    };

    let fields = doc.query_selector_all_in(&form, &Selector::attribute("required"));
    let checked = fields.len();
    let mut missing = Vec::new();
    for field in fields {
        if is_filled(&field) {
            let _ = field.remove_class(error_class);
        } else {
            let _ = field.add_class(error_class);
            missing.push(field);
        }
    }

    log::debug!("validate_form #{form_id}: {checked} required, {} blank", missing.len());
    ValidationReport { form_found: true, checked, missing }
}

/// `true` iff the form exists and every required field is non-blank.
pub fn validate_form<L: ElementLocator>(doc: &L, form_id: &str) -> bool {
    validate_form_report(doc, form_id, DEFAULT_ERROR_CLASS).is_valid()
}
