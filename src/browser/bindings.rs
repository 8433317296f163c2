//! WASM start hook and the global namespace object.
//!
//! At module start: logging, config, stylesheet, `window.<namespace>` with
//! `formatDate`, `formatDateTime`, `showNotification`, `confirmAction` and
//! `validateForm`, then the content-loaded hook.

use std::rc::Rc;

use js_sys::{Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::{NativePrompt, WebDocument, WebScheduler};
use crate::config::UiConfig;
use crate::date::{DateInput, INVALID_DATE};
use crate::error::DomError;
use crate::kit::PageKit;
use crate::notify::NotificationKind;
use crate::script_arg::ScriptArg;

type BrowserKit = PageKit<WebDocument, WebScheduler, NativePrompt>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let doc = WebDocument::current()?;
    let config = UiConfig::from_document(&doc);
    let kit = Rc::new(PageKit::new(doc, WebScheduler, NativePrompt, config));

    kit.install()?;
    publish(&window, &kit)?;

    let ready_state = kit.document().raw().ready_state();
    if ready_state == "loading" {
        let kit_for_cb = Rc::clone(&kit);
        let on_loaded = Closure::once_into_js(move || {
            kit_for_cb.on_content_loaded();
        });
        kit.document()
            .raw()
            .add_event_listener_with_callback("DOMContentLoaded", on_loaded.unchecked_ref())?;
    } else {
        kit.on_content_loaded();
    }
    Ok(())
}

/// Install the namespace object on `window`. The closures live as long as
/// the page, so they are leaked on purpose.
fn publish(window: &Window, kit: &Rc<BrowserKit>) -> Result<(), JsValue> {
    let ns = Object::new();

    let k = Rc::clone(kit);
    let format_date = Closure::<dyn Fn(JsValue) -> String>::new(move |value: JsValue| {
        with_date_input(&value, |input| k.format_date(input))
    });
    Reflect::set(&ns, &"formatDate".into(), format_date.as_ref())?;
    format_date.forget();

    let k = Rc::clone(kit);
    let format_date_time = Closure::<dyn Fn(JsValue) -> String>::new(move |value: JsValue| {
        with_date_input(&value, |input| k.format_date_time(input))
    });
    Reflect::set(&ns, &"formatDateTime".into(), format_date_time.as_ref())?;
    format_date_time.forget();

    let k = Rc::clone(kit);
    let show_notification = Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, kind: JsValue| {
        let message = script_arg(&message).into_text_content();
        let kind = if kind.is_undefined() {
            NotificationKind::default()
        } else {
            NotificationKind::from_tag(&kind.as_string().unwrap_or_default())
        };
        if let Err(e) = k.show_notification(&message, kind) {
            log::warn!("showNotification failed: {e}");
        }
    });
    Reflect::set(&ns, &"showNotification".into(), show_notification.as_ref())?;
    show_notification.forget();

    let k = Rc::clone(kit);
    let confirm_action = Closure::<dyn Fn(JsValue) -> bool>::new(move |message: JsValue| {
        k.confirm_action(&script_arg(&message).into_js_string())
    });
    Reflect::set(&ns, &"confirmAction".into(), confirm_action.as_ref())?;
    confirm_action.forget();

    let k = Rc::clone(kit);
    let validate_form = Closure::<dyn Fn(JsValue) -> bool>::new(move |form_id: JsValue| {
        k.validate_form(&script_arg(&form_id).into_js_string())
    });
    Reflect::set(&ns, &"validateForm".into(), validate_form.as_ref())?;
    validate_form.forget();

    Reflect::set(window, &JsValue::from_str(&kit.config().namespace), &ns)?;
    Ok(())
}

/// Reduce a page-script value to a [`ScriptArg`], stringifying anything that
/// is not already a string the way `String(value)` does.
fn script_arg(value: &JsValue) -> ScriptArg {
    if value.is_undefined() {
        return ScriptArg::Undefined;
    }
    if value.is_null() {
        return ScriptArg::Null;
    }
    if let Some(text) = value.as_string() {
        return ScriptArg::Text(text);
    }
    // `Array.prototype.join` applies `ToString` to each element.
    ScriptArg::Text(js_sys::Array::of1(value).join("").into())
}

/// Strings go through the text parser; numbers and `Date` objects are epoch
/// milliseconds. Anything else, or a non-finite time, is invalid.
fn with_date_input(value: &JsValue, format: impl FnOnce(DateInput<'_>) -> String) -> String {
    if let Some(text) = value.as_string() {
        return format(DateInput::Text(&text));
    }
    let millis = match value.dyn_ref::<js_sys::Date>() {
        Some(date) => date.get_time(),
        None => match value.as_f64() {
            Some(n) => n,
            None => return INVALID_DATE.to_owned(),
        },
    };
    if !millis.is_finite() {
        return INVALID_DATE.to_owned();
    }
    #[allow(clippy::cast_possible_truncation)]
    let millis = millis as i64;
    format(DateInput::Millis(millis))
}
