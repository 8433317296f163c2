use super::*;
use crate::dom::memory::MemoryDocument;

#[test]
fn stylesheet_defines_both_animations_and_marker() {
    let css = stylesheet(&UiConfig::default());
    assert!(css.contains("@keyframes slideIn"));
    assert!(css.contains("@keyframes slideOut"));
    assert!(css.contains(".notification-exit { animation: slideOut 0.3s ease-in forwards !important; }"));
    assert!(css.contains(".error { border-color: #f44336 !important; }"));
}

#[test]
fn stylesheet_follows_config() {
    let mut config = UiConfig::default();
    config.form.error_class = "is-invalid".into();
    config.notification.exit_ms = 500;
    let css = stylesheet(&config);
    assert!(css.contains(".is-invalid {"));
    assert!(css.contains("slideOut 0.5s"));
}

#[test]
fn injects_into_head() {
    let doc = MemoryDocument::new();
    let style = inject_styles(&doc, &UiConfig::default()).unwrap();
    assert_eq!(style.tag_name(), "style");
    assert_eq!(doc.head().unwrap().children(), vec![style.clone()]);
    assert!(style.text_content().contains("slideIn"));
    assert_eq!(doc.element_by_id(STYLE_ELEMENT_ID), Some(style));
}

#[test]
fn second_injection_reuses_existing_element() {
    let doc = MemoryDocument::new();
    let first = inject_styles(&doc, &UiConfig::default()).unwrap();
    let second = inject_styles(&doc, &UiConfig::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(doc.head().unwrap().children().len(), 1);
}
