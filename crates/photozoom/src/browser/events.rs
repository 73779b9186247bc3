//! Browser event adapter - exposes web events to the gesture core.
//!
//! Mouse, touch, legacy pointer, native gesture and wheel events all arrive as
//! a plain `web_sys::Event` and are inspected by shape, the way the listeners
//! receive them.

use photozoom_core::{HostEvent, Point, ScrollOffset};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, MouseEvent, TouchEvent, WheelEvent};

/// A DOM event as seen by the recognizers.
#[derive(Debug, Clone)]
pub struct DomEvent(web_sys::Event);

impl DomEvent {
    /// Wrap a DOM event.
    pub fn new(event: web_sys::Event) -> Self {
        Self(event)
    }

    /// The wrapped event.
    pub fn raw(&self) -> &web_sys::Event {
        &self.0
    }

    fn number(&self, property: &str) -> Option<f64> {
        js_sys::Reflect::get(&self.0, &JsValue::from_str(property))
            .ok()
            .and_then(|value| value.as_f64())
    }
}

impl From<web_sys::Event> for DomEvent {
    fn from(event: web_sys::Event) -> Self {
        Self::new(event)
    }
}

fn scroll_of(element: Option<web_sys::Element>) -> Point {
    element.map_or(Point::ORIGIN, |element| {
        Point::new(element.scroll_left() as f32, element.scroll_top() as f32)
    })
}

impl HostEvent for DomEvent {
    type Target = EventTarget;

    fn touch_count(&self) -> usize {
        self.0
            .dyn_ref::<TouchEvent>()
            .map_or(0, |event| event.touches().length() as usize)
    }

    fn touch(&self, index: usize) -> Option<Point> {
        let touch = self
            .0
            .dyn_ref::<TouchEvent>()?
            .touches()
            .get(u32::try_from(index).ok()?)?;
        Some(Point::new(touch.page_x() as f32, touch.page_y() as f32))
    }

    fn page(&self) -> Option<Point> {
        if let Some(mouse) = self.0.dyn_ref::<MouseEvent>() {
            return Some(Point::new(mouse.page_x() as f32, mouse.page_y() as f32));
        }
        // Gesture events carry pageX/pageY without being MouseEvents.
        Some(Point::new(
            self.number("pageX")? as f32,
            self.number("pageY")? as f32,
        ))
    }

    fn client(&self) -> Option<Point> {
        Some(Point::new(
            self.number("clientX")? as f32,
            self.number("clientY")? as f32,
        ))
    }

    fn scroll_offset(&self) -> ScrollOffset {
        let document = web_sys::window().and_then(|w| w.document());
        let Some(document) = document else {
            return ScrollOffset::default();
        };
        ScrollOffset::new(
            scroll_of(document.document_element()),
            scroll_of(document.body().map(Into::into)),
        )
    }

    fn target(&self) -> Option<EventTarget> {
        self.0.target()
    }

    fn src_element(&self) -> Option<EventTarget> {
        js_sys::Reflect::get(&self.0, &JsValue::from_str("srcElement"))
            .ok()
            .and_then(|value| value.dyn_into::<EventTarget>().ok())
    }

    fn time_stamp(&self) -> f64 {
        self.0.time_stamp()
    }

    fn scale(&self) -> Option<f32> {
        self.number("scale").map(|scale| scale as f32)
    }

    fn rotation(&self) -> Option<f32> {
        self.number("rotation").map(|rotation| rotation as f32)
    }

    fn wheel_distance(&self) -> Option<f32> {
        if let Some(wheel) = self.0.dyn_ref::<WheelEvent>() {
            return Some(-wheel.delta_y() as f32);
        }
        if let Some(delta) = self.number("wheelDelta") {
            return Some((delta / 120.0) as f32);
        }
        self.number("detail").map(|detail| (-detail / 3.0) as f32)
    }

    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}
