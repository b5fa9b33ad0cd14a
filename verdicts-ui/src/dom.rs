//! Small DOM helpers: blocking alerts, client-side downloads, the
//! cross-dashboard `navigate-to-cases` event, and scroll detection.

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::{ev, window_event_listener};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, CustomEvent, Element, HtmlAnchorElement, Url};

pub const NAVIGATE_TO_CASES: &str = "navigate-to-cases";

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn dispatch_navigate_to_cases() {
    if let Some(window) = web_sys::window() {
        if let Ok(event) = CustomEvent::new(NAVIGATE_TO_CASES) {
            let _ = window.dispatch_event(&event);
        }
    }
}

pub fn on_navigate_to_cases(callback: impl Fn() + 'static) -> WindowListenerHandle {
    window_event_listener(ev::Custom::<web_sys::Event>::new(NAVIGATE_TO_CASES), move |_| {
        callback()
    })
}

/// Saves `contents` as a file download via a synthetic anchor click.
pub fn download_text(filename: &str, mime: &str, contents: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let parts = js_sys::Array::of1(&contents.into());
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let Ok(blob) = Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = Url::create_object_url_with_blob(&blob) else {
        return;
    };
    if let Ok(element) = document.create_element("a") {
        if let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>() {
            anchor.set_href(&url);
            anchor.set_download(filename);
            anchor.click();
        }
    }
    let _ = Url::revoke_object_url(&url);
}

/// Whether a scrollable element has been scrolled to (within a couple of
/// pixels of) its bottom. Drives the agreement-step gate.
pub fn scrolled_to_bottom(element: &Element) -> bool {
    let remaining = element.scroll_height() - element.scroll_top() - element.client_height();
    remaining <= 2
}
