use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

pub const REVEAL_SELECTOR: &str = ".reveal-on-scroll";
pub const REVEALED_CLASS: &str = "revealed";

/// Trigger slightly before an element fully enters from the bottom.
const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Keeps the observer and its callback alive for the page lifetime.
pub struct RevealHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe every reveal-marked element. Each gets the revealed class on its
/// first intersection and is unobserved right away, so it never reverts.
pub fn observe_all(document: &Document) -> Option<RevealHandle> {
    let elements = document.query_selector_all(REVEAL_SELECTOR).ok()?;

    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .ok()?;

    for index in 0..elements.length() {
        if let Some(node) = elements.get(index) {
            if let Ok(element) = node.dyn_into::<Element>() {
                observer.observe(&element);
            }
        }
    }

    Some(RevealHandle {
        observer,
        _callback: callback,
    })
}
