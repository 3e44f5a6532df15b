use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlDocument, HtmlElement, HtmlInputElement};

/// Copy `text` to the clipboard. When `button` is given, its label flips to a
/// confirmation for two seconds after a successful async write. Falls back to
/// the legacy execCommand path when the async clipboard is missing or fails.
pub fn copy_to_clipboard(text: String, button: Option<HtmlElement>) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };

    let clipboard = window.navigator().clipboard();
    if clipboard.is_undefined() {
        fallback_copy(&text);
        return;
    }

    spawn_local(async move {
        match JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => {
                if let Some(button) = button {
                    let original_html = button.inner_html();
                    button.set_inner_html("✓ Copied!");
                    gloo_timers::future::TimeoutFuture::new(2_000).await;
                    button.set_inner_html(&original_html);
                }
            }
            Err(err) => {
                gloo_console::error!("Failed to copy:", err);
                fallback_copy(&text);
            }
        }
    });
}

/// Legacy path: select the text inside an injected off-screen input and run
/// execCommand("copy"). The input is removed on every outcome.
fn fallback_copy(text: &str) {
    let document = match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document,
        None => return,
    };
    let body = match document.body() {
        Some(body) => body,
        None => return,
    };

    let input: HtmlInputElement = match document
        .create_element("input")
        .ok()
        .and_then(|element| element.dyn_into().ok())
    {
        Some(input) => input,
        None => return,
    };
    input.set_value(text);
    let style = input.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("top", "0");
    let _ = style.set_property("left", "0");
    let _ = style.set_property("opacity", "0");

    if body.append_child(&input).is_err() {
        return;
    }
    let _ = input.focus();
    input.select();

    let copied = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|html_document| html_document.exec_command("copy").ok())
        .unwrap_or(false);

    if copied {
        let _ = web_sys::window()
            .map(|window| window.alert_with_message(&format!("Copied: {}", text)));
    } else {
        let _ = web_sys::window().map(|window| {
            window.alert_with_message(&format!("Failed to copy. Please copy manually: {}", text))
        });
    }

    let _ = body.remove_child(&input);
}
