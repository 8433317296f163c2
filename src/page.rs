//! Page-content-loaded hook.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::dom::{DomElement, ElementLocator, Selector};

/// `.{form_class} input[type="text"]:not([readonly])`
#[must_use]
pub fn autofocus_selector(form_class: &str) -> Selector {
    Selector::tag("input")
        .with_attribute_value("type", "text")
        .without_attribute("readonly")
        .within_class(form_class)
}

/// Run once the document has loaded: log readiness and focus the first
/// editable text input inside a `form_class` container.
///
/// Returns the element that received focus.
pub fn on_content_loaded<L: ElementLocator>(doc: &L, form_class: &str) -> Option<L::Element> {
    log::info!("page utilities ready");

    let field = doc.query_selector(&autofocus_selector(form_class))?;
    match field.focus() {
        Ok(()) => Some(field),
        Err(e) => {
            log::debug!("autofocus failed: {e}");
            None
        }
    }
}
