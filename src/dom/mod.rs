//! DOM capability traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page helpers never touch `web_sys` directly. They look elements up through
//! [`ElementLocator`], create them through [`ElementFactory`] and mutate them
//! through [`DomElement`]. The browser backend lives in `crate::browser`; the
//! in-memory backend in [`memory`] serves native builds and tests.

pub mod memory;
pub mod selector;

pub use selector::Selector;

use crate::error::DomError;

/// Shared element type for a DOM backend.
pub trait Dom {
    type Element: DomElement;
}

/// A handle to one element. Clones refer to the same node.
pub trait DomElement: Clone {
    /// Lowercase tag name.
    fn tag_name(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    fn has_class(&self, class: &str) -> bool;

    fn add_class(&self, class: &str) -> Result<(), DomError>;

    fn remove_class(&self, class: &str) -> Result<(), DomError>;

    fn text_content(&self) -> String;

    fn set_text_content(&self, text: &str);

    /// Current value of a form control, `None` for elements without one.
    fn value(&self) -> Option<String>;

    /// Set the value of a form control. No-op for other elements.
    fn set_value(&self, value: &str);

    fn append_child(&self, child: &Self) -> Result<(), DomError>;

    /// Detach from the parent. No-op when already detached.
    fn remove(&self);

    fn focus(&self) -> Result<(), DomError>;

    /// Whether the element is attached to the document.
    fn is_connected(&self) -> bool;
}

/// Finds existing elements.
pub trait ElementLocator: Dom {
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First match in document order.
    fn query_selector(&self, selector: &Selector) -> Option<Self::Element>;

    /// All descendants of `scope` matching `selector`, in document order.
    fn query_selector_all_in(&self, scope: &Self::Element, selector: &Selector) -> Vec<Self::Element>;
}

/// Creates elements and exposes the insertion roots.
pub trait ElementFactory: Dom {
    fn create_element(&self, tag: &str) -> Result<Self::Element, DomError>;

    fn body(&self) -> Option<Self::Element>;

    fn head(&self) -> Option<Self::Element>;
}
