//! Browser utilities shared by the page components.
//!
//! - **User Feedback**: `show_toast` injects a short-lived notification.
//! - **Navigation**: `hard_navigate` does a full page load, so server-side
//!   gates such as the dashboard redirect run again.
//! - **Clipboard**: `copy_to_clipboard` wraps the async clipboard API.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

/// Toasts on the dashboard disappear after this long.
pub const TOAST_MS: u32 = 2000;

/// Displays a temporary notification in the top-right corner.
///
/// The toast removes itself after `duration_ms`.
pub fn show_toast(message: &str, duration_ms: u32) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                toast.set_class_name("toast");
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("top", "16px").ok();
                style.set_property("right", "16px").ok();
                style.set_property("background", "#f9fafb").ok();
                style.set_property("color", "#374151").ok();
                style.set_property("padding", "12px 24px").ok();
                style.set_property("border-radius", "8px").ok();
                style.set_property("box-shadow", "0 4px 12px rgba(0, 0, 0, 0.15)").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

pub fn hard_navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(path) {
            gloo_console::error!("navigation failed:", err);
        }
    }
}

/// The query string of the current page, including the leading `?`.
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Asks the visitor to confirm an action. Dismissing the dialog counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub async fn copy_to_clipboard(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let promise: js_sys::Promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.is_ok()
}
