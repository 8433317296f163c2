//! Page configuration with defaults, loadable from JSON.
//!
//! In the browser the config comes from an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="pagekit-config">
//!   { "notification": { "display_ms": 5000 } }
//! </script>
//! ```
//!
//! Every section and field is optional; anything absent keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::dom::{DomElement, ElementLocator};
use crate::error::ConfigError;

/// Id of the inline `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "pagekit-config";

pub const DEFAULT_NAMESPACE: &str = "appUtils";
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";
pub const DEFAULT_DATE_TIME_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";
pub const DEFAULT_DISPLAY_MS: u64 = 3000;
pub const DEFAULT_EXIT_MS: u64 = 300;
pub const DEFAULT_SUCCESS_COLOR: &str = "#4CAF50";
pub const DEFAULT_ERROR_COLOR: &str = "#f44336";
pub const DEFAULT_ERROR_CLASS: &str = "error";
pub const DEFAULT_FORM_CLASS: &str = "form";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Name of the global object the browser entry point publishes.
    pub namespace: String,
    pub date: DateConfig,
    pub notification: NotificationConfig,
    pub form: FormConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            date: DateConfig::default(),
            notification: NotificationConfig::default(),
            form: FormConfig::default(),
        }
    }
}

/// `chrono` strftime patterns. Defaults render the Russian locale
/// (`15.01.2024` and `15.01.2024, 14:30:00`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    pub date_format: String,
    pub date_time_format: String,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
            date_time_format: DEFAULT_DATE_TIME_FORMAT.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// How long a notification stays fully visible.
    pub display_ms: u64,
    /// Length of the exit animation before the node is removed.
    pub exit_ms: u64,
    pub success_color: String,
    pub error_color: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: DEFAULT_DISPLAY_MS,
            exit_ms: DEFAULT_EXIT_MS,
            success_color: DEFAULT_SUCCESS_COLOR.to_owned(),
            error_color: DEFAULT_ERROR_COLOR.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Class added to required fields that are empty.
    pub error_class: String,
    /// Class of the container whose first text input gets autofocus.
    pub form_class: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { error_class: DEFAULT_ERROR_CLASS.to_owned(), form_class: DEFAULT_FORM_CLASS.to_owned() }
    }
}

impl UiConfig {
    /// Parse config from JSON text. Blank text yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Read config from the page's inline config block.
    ///
    /// A missing block means defaults. A malformed block is logged and
    /// ignored so a typo never takes the page helpers down.
    pub fn from_document<L: ElementLocator>(doc: &L) -> Self {
        let Some(block) = doc.element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        match Self::from_json(&block.text_content()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring invalid #{CONFIG_ELEMENT_ID} block: {e}");
                Self::default()
            }
        }
    }
}
