//! # pagekit
//!
//! Browser page helpers: date formatting, toast notifications, confirmation
//! prompts, required-field form validation, a page-ready hook and the
//! stylesheet the notifications animate with.
//!
//! DESIGN
//! ======
//! Every DOM, timer and dialog interaction goes through a small capability
//! trait (`dom`, `timer`, `confirm`). The `browser` feature backs them with
//! `web-sys`; native builds and tests use the in-memory document, the
//! virtual-clock scheduler and the scripted prompt. [`kit::PageKit`] bundles
//! one of each into the context object page scripts talk to.

pub mod config;
pub mod confirm;
pub mod date;
pub mod dom;
pub mod error;
pub mod kit;
pub mod notify;
pub mod page;
pub mod script_arg;
pub mod style;
pub mod timer;
pub mod validate;

#[cfg(feature = "browser")]
pub mod browser;

pub use config::UiConfig;
pub use error::{ConfigError, DomError};
pub use kit::PageKit;
