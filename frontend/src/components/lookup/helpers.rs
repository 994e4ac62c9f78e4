//! DOM helpers for the lookup page.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// How long a toast stays on screen, in milliseconds.
const TOAST_DURATION_MS: u32 = 4000;

/// Displays a temporary notification at the bottom of the screen.
///
/// Used to surface load failures without blocking the page. The toast removes
/// itself after [`TOAST_DURATION_MS`]. Missing window, document or body make
/// this a no-op.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
