//! The stylesheet notifications and validation markers rely on.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::time::Duration;

use crate::config::UiConfig;
use crate::dom::{DomElement, ElementFactory, ElementLocator};
use crate::error::DomError;
use crate::notify::EXIT_CLASS;

/// Id of the injected `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "pagekit-styles";

/// Keyframes for the notification slide in/out plus the error-marker border.
#[must_use]
pub fn stylesheet(config: &UiConfig) -> String {
    let exit_secs = Duration::from_millis(config.notification.exit_ms).as_secs_f64();
    let error_class = &config.form.error_class;
    let error_color = &config.notification.error_color;
    [
        "@keyframes slideIn {".to_owned(),
        "    from { transform: translateX(100%); opacity: 0; }".to_owned(),
        "    to { transform: translateX(0); opacity: 1; }".to_owned(),
        "}".to_owned(),
        "@keyframes slideOut {".to_owned(),
        "    from { transform: translateX(0); opacity: 1; }".to_owned(),
        "    to { transform: translateX(100%); opacity: 0; }".to_owned(),
        "}".to_owned(),
        format!(".{EXIT_CLASS} {{ animation: slideOut {exit_secs}s ease-in forwards !important; }}"),
        format!(".{error_class} {{ border-color: {error_color} !important; }}"),
    ]
    .join("\n")
}

/// Append the stylesheet to `<head>` once.
///
/// A second call returns the element already in the document.
pub fn inject_styles<D>(doc: &D, config: &UiConfig) -> Result<D::Element, DomError>
where
    D: ElementFactory + ElementLocator,
{
    if let Some(existing) = doc.element_by_id(STYLE_ELEMENT_ID) {
        return Ok(existing);
    }
    let head = doc.head().ok_or(DomError::MissingHead)?;
    let style = doc.create_element("style")?;
    style.set_attribute("id", STYLE_ELEMENT_ID)?;
    style.set_text_content(&stylesheet(config));
    head.append_child(&style)?;
    log::debug!("stylesheet injected");
    Ok(style)
}
