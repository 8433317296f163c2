use super::*;

// =============================================================
// String(value)
// =============================================================

#[test]
fn js_string_keeps_text() {
    assert_eq!(ScriptArg::from("signup").into_js_string(), "signup");
    assert_eq!(ScriptArg::Text("7".into()).into_js_string(), "7");
}

#[test]
fn js_string_spells_out_missing_values() {
    assert_eq!(ScriptArg::Undefined.into_js_string(), "undefined");
    assert_eq!(ScriptArg::Null.into_js_string(), "null");
}

// =============================================================
// textContent
// =============================================================

#[test]
fn text_content_keeps_stringified_numbers() {
    assert_eq!(ScriptArg::Text("42".into()).into_text_content(), "42");
}

#[test]
fn text_content_clears_for_missing_values() {
    assert_eq!(ScriptArg::Undefined.into_text_content(), "");
    assert_eq!(ScriptArg::Null.into_text_content(), "");
}
