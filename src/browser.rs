//! Thin wrappers over `window` for the parts of the page outside Leptos.

use tracing::warn;

use crate::resources::Prompter;

/// `window.location.origin`, if there is a window.
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Blocking `alert` / `confirm` dialogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompter;

impl Prompter for BrowserPrompter {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            warn!("No window for alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            warn!("alert failed: {:?}", e);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
