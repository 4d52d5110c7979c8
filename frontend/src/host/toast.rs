use common::host::{Notice, NoticeLevel, Notifier};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// How long a toast stays on screen.
const TOAST_MS: u32 = 3000;

/// Renders notices as toasts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        show_toast(&notice);
    }
}

/// Displays a temporary notification at the top right of the screen.
///
/// A styled `div` is appended to `<body>` and removed again after
/// `TOAST_MS`. The message is inserted as text, never as HTML, since it
/// usually contains a student name typed by a user.
pub fn show_toast(notice: &Notice) {
    let background = match notice.level {
        NoticeLevel::Success => "#2e7d32",
        NoticeLevel::Info => "#1565c0",
        NoticeLevel::Error => "#c62828",
    };

    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(&notice.message));
                toast.set_attribute("role", "status").ok();
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("top", "20px").ok();
                style.set_property("right", "20px").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();
                style.set_property("box-shadow", "0 2px 8px rgba(0, 0, 0, 0.2)").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
