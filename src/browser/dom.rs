//! DOM traits over `web_sys::Document` / `web_sys::Element`.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom::{Dom, DomElement, ElementFactory, ElementLocator, Selector};
use crate::error::DomError;

#[derive(Clone, Debug)]
pub struct WebDocument {
    doc: web_sys::Document,
}

impl WebDocument {
    /// The document of the current window.
    pub fn current() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let doc = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self { doc })
    }

    pub fn raw(&self) -> &web_sys::Document {
        &self.doc
    }
}

impl Dom for WebDocument {
    type Element = WebElement;
}

impl ElementLocator for WebDocument {
    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.doc.get_element_by_id(id).map(WebElement)
    }

    fn query_selector(&self, selector: &Selector) -> Option<WebElement> {
        self.doc.query_selector(&selector.to_string()).ok().flatten().map(WebElement)
    }

    fn query_selector_all_in(&self, scope: &WebElement, selector: &Selector) -> Vec<WebElement> {
        let Ok(list) = scope.0.query_selector_all(&selector.to_string()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebElement)
            .collect()
    }
}

impl ElementFactory for WebDocument {
    fn create_element(&self, tag: &str) -> Result<WebElement, DomError> {
        Ok(WebElement(self.doc.create_element(tag)?))
    }

    fn body(&self) -> Option<WebElement> {
        self.doc.body().map(|b| WebElement(b.into()))
    }

    fn head(&self) -> Option<WebElement> {
        self.doc.head().map(|h| WebElement(h.into()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebElement(pub Element);

impl DomElement for WebElement {
    fn tag_name(&self) -> String {
        self.0.tag_name().to_ascii_lowercase()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        Ok(self.0.set_attribute(name, value)?)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.0.has_attribute(name)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), DomError> {
        Ok(self.0.class_list().add_1(class)?)
    }

    fn remove_class(&self, class: &str) -> Result<(), DomError> {
        Ok(self.0.class_list().remove_1(class)?)
    }

    fn text_content(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn value(&self) -> Option<String> {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            return Some(area.value());
        }
        self.0.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn append_child(&self, child: &Self) -> Result<(), DomError> {
        self.0.append_child(&child.0)?;
        Ok(())
    }

    fn remove(&self) {
        self.0.remove();
    }

    fn focus(&self) -> Result<(), DomError> {
        match self.0.dyn_ref::<HtmlElement>() {
            Some(el) => Ok(el.focus()?),
            None => Ok(()),
        }
    }

    fn is_connected(&self) -> bool {
        self.0.is_connected()
    }
}
