//! WASM browser tests - run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use photozoom::browser::{Attachment, DomEvent, GestureSurface};
use photozoom::{read_coordinates, GestureHandlers, GestureSettings, Gestures, HostEvent};
use std::cell::RefCell;
use std::rc::Rc;

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A plain event carrying extra numeric properties, as gesture events do.
fn event(kind: &str, properties: &[(&str, f64)]) -> web_sys::Event {
    let event = web_sys::Event::new(kind).unwrap();
    for (key, value) in properties {
        js_sys::Reflect::set(&event, &JsValue::from_str(key), &JsValue::from_f64(*value)).unwrap();
    }
    event
}

fn surface() -> web_sys::Element {
    let element = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&element).unwrap();
    element
}

// ============================================================================
// DomEvent
// ============================================================================

#[wasm_bindgen_test]
fn test_gesture_event_reads_page_scale_and_rotation() {
    let event = DomEvent::new(event(
        "gesturechange",
        &[("pageX", 120.0), ("pageY", 80.0), ("scale", 1.5), ("rotation", 30.0)],
    ));
    assert_eq!(event.touch_count(), 0);
    assert_eq!(event.scale(), Some(1.5));
    assert_eq!(event.rotation(), Some(30.0));
    let point = read_coordinates(&event);
    assert_eq!(point.x, 120.0);
    assert_eq!(point.y, 80.0);
}

#[wasm_bindgen_test]
fn test_event_without_coordinates_reads_nothing() {
    let event = DomEvent::new(event("mousemove", &[]));
    assert!(event.page().is_none());
    assert!(event.client().is_none());
}

#[wasm_bindgen_test]
fn test_legacy_wheel_delta() {
    let modern = DomEvent::new(event("mousewheel", &[("wheelDelta", 240.0)]));
    assert_eq!(modern.wheel_distance(), Some(2.0));
    let legacy = DomEvent::new(event("DOMMouseScroll", &[("detail", 3.0)]));
    assert_eq!(legacy.wheel_distance(), Some(-1.0));
}

#[wasm_bindgen_test]
fn test_prevent_default_reaches_the_dom_event() {
    let init = web_sys::EventInit::new();
    init.set_cancelable(true);
    let raw = web_sys::Event::new_with_event_init_dict("touchmove", &init).unwrap();
    let event = DomEvent::new(raw.clone());
    event.prevent_default();
    assert!(raw.default_prevented());
}

// ============================================================================
// Attachment
// ============================================================================

#[wasm_bindgen_test]
fn test_mouse_stream_fires_swipe_then_detaches() {
    let element = surface();
    let swipes = Rc::new(RefCell::new(Vec::new()));
    let log = swipes.clone();
    let handlers = GestureHandlers::<DomEvent>::new()
        .on_swipe_right(move |s| log.borrow_mut().push(s.distance));
    let gestures = Rc::new(RefCell::new(Gestures::new(GestureSettings::default(), handlers)));
    let attachment = Attachment::attach(&element, &gestures).unwrap();
    assert!(!attachment.is_empty());
    assert!(gestures.borrow().is_initialized());

    let body = document().body().unwrap();
    element.dispatch_event(&event("mousedown", &[("pageX", 10.0), ("pageY", 10.0)])).unwrap();
    element.dispatch_event(&event("mousemove", &[("pageX", 110.0), ("pageY", 15.0)])).unwrap();
    body.dispatch_event(&event("mouseup", &[])).unwrap();
    assert_eq!(*swipes.borrow(), vec![100.0]);

    drop(attachment);
    element.dispatch_event(&event("mousedown", &[("pageX", 10.0), ("pageY", 10.0)])).unwrap();
    element.dispatch_event(&event("mousemove", &[("pageX", 110.0), ("pageY", 15.0)])).unwrap();
    body.dispatch_event(&event("mouseup", &[])).unwrap();
    assert_eq!(swipes.borrow().len(), 1);
    element.remove();
}

#[wasm_bindgen_test]
fn test_paused_attachment_ignores_presses() {
    let element = surface();
    let swipes = Rc::new(RefCell::new(0));
    let log = swipes.clone();
    let handlers =
        GestureHandlers::<DomEvent>::new().on_swipe_left(move |_| *log.borrow_mut() += 1);
    let gestures = Rc::new(RefCell::new(Gestures::new(GestureSettings::default(), handlers)));
    let attachment = Attachment::attach(&element, &gestures).unwrap();
    attachment.controls().pause();

    element.dispatch_event(&event("mousedown", &[("pageX", 200.0), ("pageY", 0.0)])).unwrap();
    element.dispatch_event(&event("mousemove", &[("pageX", 0.0), ("pageY", 0.0)])).unwrap();
    document().body().unwrap().dispatch_event(&event("mouseup", &[])).unwrap();
    assert_eq!(*swipes.borrow(), 0);
    element.remove();
}

// ============================================================================
// GestureSurface
// ============================================================================

#[wasm_bindgen_test]
fn test_surface_rejects_malformed_settings() {
    let element = surface();
    assert!(GestureSurface::attach(element.clone().into(), "{threshold").is_err());
    assert!(GestureSurface::attach(element.clone().into(), "").is_ok());
    element.remove();
}

#[wasm_bindgen_test]
fn test_surface_start_is_idempotent() {
    let element = surface();
    let mut surface =
        GestureSurface::attach(element.clone().into(), r#"{"threshold": 20}"#).unwrap();
    assert!(!surface.is_started());
    surface.start().unwrap();
    surface.start().unwrap();
    assert!(surface.is_started());
    surface.detach();
    assert!(!surface.is_started());
    element.remove();
}
