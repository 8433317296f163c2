//! Loosely typed arguments handed over by page scripts.
//!
//! The browser bindings reduce every incoming value to a [`ScriptArg`]
//! (non-string values arrive already stringified), and the operations read it
//! back with the coercion the equivalent DOM call would apply.

#[cfg(test)]
#[path = "script_arg_test.rs"]
mod script_arg_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptArg {
    Undefined,
    Null,
    /// A string, or the `String(value)` rendering of any other value.
    Text(String),
}

impl ScriptArg {
    /// `String(value)`: `undefined` and `null` spell themselves out.
    #[must_use]
    pub fn into_js_string(self) -> String {
        match self {
            Self::Undefined => "undefined".to_owned(),
            Self::Null => "null".to_owned(),
            Self::Text(text) => text,
        }
    }

    /// What `element.textContent = value` displays: `undefined` and `null`
    /// clear the text.
    #[must_use]
    pub fn into_text_content(self) -> String {
        match self {
            Self::Undefined | Self::Null => String::new(),
            Self::Text(text) => text,
        }
    }
}

impl From<&str> for ScriptArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
