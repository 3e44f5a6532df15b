//! DOM behavior tests. These run in a real browser via `wasm-pack test`;
//! they are compiled out on native targets.
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use solstice_site::components::marquee;
use solstice_site::effects::scroll_reveal;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, Node};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn body() -> HtmlElement {
    document().body().unwrap()
}

#[wasm_bindgen_test]
fn marquee_content_is_cloned_exactly_once() {
    let document = document();
    let track = document.create_element("div").unwrap();
    track.set_class_name("marquee-track");
    let content = document.create_element("div").unwrap();
    content.set_class_name("marquee-content");
    content.set_inner_html("<span>one</span><span>two</span>");
    track.append_child(&content).unwrap();
    body().append_child(&track).unwrap();

    assert_eq!(track.child_element_count(), 1);
    marquee::duplicate_marquee(&document);
    assert_eq!(track.child_element_count(), 2);

    let first = track.first_element_child().unwrap();
    let second = track.last_element_child().unwrap();
    let second_node: &Node = second.as_ref();
    assert!(first.is_equal_node(Some(second_node)));

    body().remove_child(&track).unwrap();
}

#[wasm_bindgen_test]
fn marquee_duplication_skips_pages_without_a_marquee() {
    // Nothing to clone; must not panic.
    marquee::duplicate_marquee(&document());
}

#[wasm_bindgen_test]
async fn visible_element_gets_revealed_once() {
    let document = document();
    let element = document.create_element("div").unwrap();
    element.set_class_name("reveal-on-scroll");
    element
        .set_attribute("style", "width: 120px; height: 120px;")
        .unwrap();
    body().append_child(&element).unwrap();

    let handle = scroll_reveal::observe_all(&document).expect("observer should attach");

    // Intersection entries are delivered asynchronously.
    TimeoutFuture::new(200).await;

    assert!(element.class_list().contains(scroll_reveal::REVEALED_CLASS));

    // The element was unobserved after its transition; the class is stable.
    TimeoutFuture::new(100).await;
    assert!(element.class_list().contains(scroll_reveal::REVEALED_CLASS));

    drop(handle);
    body().remove_child(&element).unwrap();
}

#[wasm_bindgen_test]
fn observer_attaches_even_with_no_marked_elements() {
    let handle = scroll_reveal::observe_all(&document());
    assert!(handle.is_some());
}
