use crate::confirm::Prompt;

/// `window.confirm`. A missing window or a blocked dialog reads as "no".
#[derive(Clone, Copy, Debug, Default)]
pub struct NativePrompt;

impl Prompt for NativePrompt {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
}
