//! Error types for DOM backends and configuration loading.
//!
//! The page-facing operations never surface these: a missing form is `false`
//! and a bad date is `Invalid Date`. They exist for Rust callers wiring a
//! backend up.

/// Failure raised by a DOM backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// No global `window` is available (not running in a browser page).
    #[error("no window available")]
    NoWindow,

    /// The window has no `document`.
    #[error("no document available")]
    NoDocument,

    /// The document has no `<body>` to append to.
    #[error("document has no body")]
    MissingBody,

    /// The document has no `<head>` to append to.
    #[error("document has no head")]
    MissingHead,

    /// A browser API call rejected with a `JsValue`.
    #[error("browser call failed: {0}")]
    Js(String),
}

/// Failure loading a [`crate::config::UiConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config text was not valid JSON for the expected shape.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
