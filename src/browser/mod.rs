//! `web-sys` backends and the WASM entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `browser` feature. [`WebDocument`], [`WebScheduler`]
//! and [`NativePrompt`] implement the capability traits over the real page;
//! `bindings` wires a [`crate::PageKit`] over them at module start and
//! publishes it on `window`.

mod bindings;
mod dom;
mod prompt;
mod timer;

pub use dom::{WebDocument, WebElement};
pub use prompt::NativePrompt;
pub use timer::WebScheduler;

use wasm_bindgen::JsValue;

use crate::error::DomError;

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
