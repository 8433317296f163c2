use super::*;
use crate::dom::ElementFactory;
use crate::dom::memory::{MemoryDocument, MemoryElement};

fn text_input(doc: &MemoryDocument) -> MemoryElement {
    doc.element("input").with_attribute("type", "text")
}

fn mount_in_form_container(doc: &MemoryDocument, children: &[&MemoryElement]) {
    let container = doc.element("div").with_attribute("class", "form");
    for child in children {
        container.append_child(child).unwrap();
    }
    doc.body().unwrap().append_child(&container).unwrap();
}

#[test]
fn selector_targets_text_inputs_in_form_container() {
    assert_eq!(autofocus_selector("form").to_string(), ".form input[type=\"text\"]:not([readonly])");
}

#[test]
fn focuses_first_text_input() {
    let doc = MemoryDocument::new();
    let first = text_input(&doc);
    let second = text_input(&doc);
    mount_in_form_container(&doc, &[&first, &second]);

    assert_eq!(on_content_loaded(&doc, "form"), Some(first.clone()));
    assert_eq!(doc.active_element(), Some(first));
}

#[test]
fn readonly_inputs_are_skipped() {
    let doc = MemoryDocument::new();
    let locked = text_input(&doc).with_attribute("readonly", "");
    let editable = text_input(&doc);
    mount_in_form_container(&doc, &[&locked, &editable]);

    assert_eq!(on_content_loaded(&doc, "form"), Some(editable.clone()));
    assert_eq!(doc.active_element(), Some(editable));
}

#[test]
fn only_readonly_inputs_is_a_noop() {
    let doc = MemoryDocument::new();
    let locked = text_input(&doc).with_attribute("readonly", "readonly");
    mount_in_form_container(&doc, &[&locked]);

    assert_eq!(on_content_loaded(&doc, "form"), None);
    assert!(doc.active_element().is_none());
}

#[test]
fn no_matching_input_is_a_noop() {
    let doc = MemoryDocument::new();
    let email = doc.element("input").with_attribute("type", "email");
    let loose = text_input(&doc);
    mount_in_form_container(&doc, &[&email]);
    doc.body().unwrap().append_child(&loose).unwrap();

    assert_eq!(on_content_loaded(&doc, "form"), None);
    assert!(doc.active_element().is_none());
}

#[test]
fn custom_container_class() {
    let doc = MemoryDocument::new();
    let input = text_input(&doc);
    let panel = doc.element("section").with_attribute("class", "login-panel").with_child(&input);
    doc.body().unwrap().append_child(&panel).unwrap();

    assert_eq!(on_content_loaded(&doc, "login-panel"), Some(input));
}
