use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

pub const PARALLAX_SELECTOR: &str = ".parallax-element";

const INTENSITY: f64 = 30.0;

/// Map a pointer position to the translation applied to the parallax
/// element: normalized to [0, 1], centered, then scaled.
pub fn offset(client_x: f64, client_y: f64, viewport_width: f64, viewport_height: f64) -> (f64, f64) {
    let move_x = (client_x / viewport_width - 0.5) * INTENSITY;
    let move_y = (client_y / viewport_height - 0.5) * INTENSITY;
    (move_x, move_y)
}

/// Removes the mousemove listener when dropped.
pub struct ParallaxHandle {
    document: Document,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl Drop for ParallaxHandle {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            "mousemove",
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Attach the cursor parallax to the decorative hero element. No-op when the
/// element is not on the page.
pub fn attach(document: &Document) -> Option<ParallaxHandle> {
    let element: HtmlElement = document
        .query_selector(PARALLAX_SELECTOR)
        .ok()
        .flatten()?
        .dyn_into()
        .ok()?;

    let callback = Closure::wrap(Box::new(move |event: MouseEvent| {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(1.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(1.0);

        let (move_x, move_y) = offset(event.client_x() as f64, event.client_y() as f64, width, height);
        let _ = element
            .style()
            .set_property("transform", &format!("translate({}px, {}px)", move_x, move_y));
    }) as Box<dyn FnMut(MouseEvent)>);

    document
        .add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())
        .ok()?;

    Some(ParallaxHandle {
        document: document.clone(),
        callback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_at_center_means_no_offset() {
        assert_eq!(offset(640.0, 360.0, 1280.0, 720.0), (0.0, 0.0));
    }

    #[test]
    fn corners_reach_half_intensity() {
        assert_eq!(offset(0.0, 0.0, 1280.0, 720.0), (-15.0, -15.0));
        assert_eq!(offset(1280.0, 720.0, 1280.0, 720.0), (15.0, 15.0));
    }

    #[test]
    fn offset_scales_linearly_with_position() {
        let (quarter_x, _) = offset(320.0, 0.0, 1280.0, 720.0);
        assert_eq!(quarter_x, -7.5);
    }
}
