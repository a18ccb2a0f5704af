//! Thin wrappers over the browser APIs the pages use.

use leptos::prelude::window;

/// Ask the user to confirm with a native dialog. A dialog that cannot be
/// shown counts as a refusal.
pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

/// Step back one entry in the session history.
pub fn go_back() {
    if let Ok(history) = window().history() {
        let _ = history.back();
    }
}
