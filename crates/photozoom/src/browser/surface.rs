//! Listener attachment and the JavaScript gesture surface.

use super::app::{log_error, log_exception};
use super::bindings::{plan, GestureApi, Scope};
use super::error::AttachError;
use super::events::DomEvent;
use photozoom_core::{GestureControls, GestureHandlers, GestureSettings, Gestures, MultiMode};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

/// Gesture facade shared between the listeners of one surface.
pub type SharedGestures = Rc<RefCell<Gestures<DomEvent>>>;

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// Native gesture support of the current window.
pub fn detect_gesture_api() -> Result<GestureApi, AttachError> {
    let window = web_sys::window().ok_or(AttachError::NoWindow)?;
    Ok(GestureApi::detect(|property| {
        js_sys::Reflect::has(&window, &JsValue::from_str(property)).unwrap_or(false)
    }))
}

/// Live DOM listeners feeding one gesture facade. Dropping it removes them.
pub struct Attachment {
    listeners: Vec<(EventTarget, &'static str, Listener)>,
    controls: GestureControls,
    mode: MultiMode,
}

impl Attachment {
    /// Initialize `gestures` for this browser and register its listeners on
    /// `surface` and `document.body`.
    pub fn attach(surface: &EventTarget, gestures: &SharedGestures) -> Result<Self, AttachError> {
        let document = web_sys::window()
            .ok_or(AttachError::NoWindow)?
            .document()
            .ok_or(AttachError::NoDocument)?;
        let body: EventTarget = document.body().ok_or(AttachError::NoBody)?.into();
        let api = detect_gesture_api()?;

        let (single, multi, controls) = {
            let mut facade = gestures.borrow_mut();
            facade.init(api.mode());
            (facade.allows_single(), facade.allows_multi(), facade.controls())
        };

        let mut attachment = Self {
            listeners: Vec::new(),
            controls,
            mode: api.mode(),
        };
        for binding in plan(api, single, multi) {
            let target = match binding.scope {
                Scope::Surface => surface.clone(),
                Scope::Body => body.clone(),
            };
            let shared = gestures.clone();
            let route = binding.route;
            let listener = Listener::new(move |event: web_sys::Event| {
                let event = DomEvent::new(event);
                match shared.try_borrow_mut() {
                    Ok(mut facade) => route.dispatch(&mut *facade, &event),
                    Err(err) => log_error("nested gesture event dropped", &err),
                }
            });
            target
                .add_event_listener_with_callback(binding.event, listener.as_ref().unchecked_ref())
                .map_err(|e| AttachError::Listener {
                    event: binding.event,
                    message: format!("{e:?}"),
                })?;
            attachment.listeners.push((target, binding.event, listener));
        }
        Ok(attachment)
    }

    /// Pause and default-action flags of the attached facade.
    pub fn controls(&self) -> &GestureControls {
        &self.controls
    }

    /// Multi-pointer path picked for this browser.
    pub fn mode(&self) -> MultiMode {
        self.mode
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener was needed.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Drop for Attachment {
    fn drop(&mut self) {
        for (target, event, listener) in self.listeners.drain(..) {
            let callback = listener.as_ref().unchecked_ref();
            let _ = target.remove_event_listener_with_callback(event, callback);
        }
    }
}

fn set(object: &js_sys::Object, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(object, &JsValue::from_str(key), value);
}

/// Plain object handed to JavaScript callbacks.
fn payload(
    x: f32,
    y: f32,
    fields: &[(&str, JsValue)],
    event: &DomEvent,
    source: Option<EventTarget>,
) -> JsValue {
    let object = js_sys::Object::new();
    set(&object, "x", &JsValue::from_f64(f64::from(x)));
    set(&object, "y", &JsValue::from_f64(f64::from(y)));
    for (key, value) in fields {
        set(&object, key, value);
    }
    set(&object, "event", event.raw());
    set(&object, "source", &source.map_or(JsValue::NULL, JsValue::from));
    object.into()
}

fn call(name: &str, callback: &js_sys::Function, argument: &JsValue) {
    if let Err(exception) = callback.call1(&JsValue::NULL, argument) {
        log_exception(name, &exception);
    }
}

fn number(value: f32) -> JsValue {
    JsValue::from_f64(f64::from(value))
}

/// JavaScript callbacks as registered before `start`.
#[derive(Default)]
struct JsCallbacks {
    swipe_up: Option<js_sys::Function>,
    swipe_left: Option<js_sys::Function>,
    swipe_right: Option<js_sys::Function>,
    swipe_down: Option<js_sys::Function>,
    drag: Option<js_sys::Function>,
    double_tap: Option<js_sys::Function>,
    pinch: Option<js_sys::Function>,
    twist: Option<js_sys::Function>,
}

impl JsCallbacks {
    fn handlers(&self) -> GestureHandlers<DomEvent> {
        let mut handlers = GestureHandlers::<DomEvent>::new();
        let swipes = [
            (&self.swipe_up, "swipeUp"),
            (&self.swipe_left, "swipeLeft"),
            (&self.swipe_right, "swipeRight"),
            (&self.swipe_down, "swipeDown"),
        ];
        for (slot, (callback, name)) in swipes.into_iter().enumerate() {
            let Some(callback) = callback.clone() else {
                continue;
            };
            let f = move |s: photozoom_core::Swipe<'_, DomEvent>| {
                let fields = [("distance", number(s.distance))];
                call(name, &callback, &payload(s.x, s.y, &fields, s.event, s.source));
            };
            handlers = match slot {
                0 => handlers.on_swipe_up(f),
                1 => handlers.on_swipe_left(f),
                2 => handlers.on_swipe_right(f),
                _ => handlers.on_swipe_down(f),
            };
        }
        if let Some(callback) = self.drag.clone() {
            handlers = handlers.on_drag(move |d| {
                let fields = [
                    ("horizontal", number(d.horizontal)),
                    ("vertical", number(d.vertical)),
                ];
                call("drag", &callback, &payload(d.x, d.y, &fields, d.event, d.source));
            });
        }
        if let Some(callback) = self.double_tap.clone() {
            handlers = handlers.on_double_tap(move |t| {
                call("doubleTap", &callback, &payload(t.x, t.y, &[], t.event, t.source));
            });
        }
        if let Some(callback) = self.pinch.clone() {
            handlers = handlers.on_pinch(move |p| {
                let fields = [("scale", number(p.scale))];
                call("pinch", &callback, &payload(p.x, p.y, &fields, p.event, p.source));
            });
        }
        if let Some(callback) = self.twist.clone() {
            handlers = handlers.on_twist(move |t| {
                let fields = [("rotation", number(t.rotation))];
                call("twist", &callback, &payload(t.x, t.y, &fields, t.event, t.source));
            });
        }
        handlers
    }
}

/// Gesture recognition on one element, driven from JavaScript.
///
/// ```javascript
/// const surface = GestureSurface.attach(element, '{"threshold": 80}');
/// surface.on_swipe_left(({ distance }) => next());
/// surface.on_pinch(({ scale }) => zoomBy(scale));
/// surface.start();
/// ```
#[wasm_bindgen]
pub struct GestureSurface {
    element: EventTarget,
    settings: GestureSettings,
    paused: bool,
    callbacks: JsCallbacks,
    attachment: Option<Attachment>,
}

#[wasm_bindgen]
impl GestureSurface {
    /// Prepare a surface. `settings_json` may be empty for defaults.
    pub fn attach(element: EventTarget, settings_json: &str) -> Result<GestureSurface, JsValue> {
        let settings = if settings_json.trim().is_empty() {
            GestureSettings::default()
        } else {
            GestureSettings::from_json(settings_json)
                .map_err(|e| JsValue::from_str(&AttachError::from(e).to_string()))?
        };
        Ok(Self {
            element,
            settings: settings.normalized(),
            paused: false,
            callbacks: JsCallbacks::default(),
            attachment: None,
        })
    }

    /// Upward swipe callback.
    pub fn on_swipe_up(&mut self, callback: js_sys::Function) {
        self.callbacks.swipe_up = Some(callback);
    }

    /// Leftward swipe callback.
    pub fn on_swipe_left(&mut self, callback: js_sys::Function) {
        self.callbacks.swipe_left = Some(callback);
    }

    /// Rightward swipe callback.
    pub fn on_swipe_right(&mut self, callback: js_sys::Function) {
        self.callbacks.swipe_right = Some(callback);
    }

    /// Downward swipe callback.
    pub fn on_swipe_down(&mut self, callback: js_sys::Function) {
        self.callbacks.swipe_down = Some(callback);
    }

    /// Drag callback.
    pub fn on_drag(&mut self, callback: js_sys::Function) {
        self.callbacks.drag = Some(callback);
    }

    /// Double-tap callback.
    pub fn on_double_tap(&mut self, callback: js_sys::Function) {
        self.callbacks.double_tap = Some(callback);
    }

    /// Pinch callback, also fed by the wheel.
    pub fn on_pinch(&mut self, callback: js_sys::Function) {
        self.callbacks.pinch = Some(callback);
    }

    /// Twist callback.
    pub fn on_twist(&mut self, callback: js_sys::Function) {
        self.callbacks.twist = Some(callback);
    }

    /// Register the listeners. Later calls are ignored.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.attachment.is_some() {
            return Ok(());
        }
        let gestures = Gestures::new(self.settings.clone(), self.callbacks.handlers());
        if self.paused {
            gestures.pause();
        }
        let shared = Rc::new(RefCell::new(gestures));
        let attachment = Attachment::attach(&self.element, &shared)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.attachment = Some(attachment);
        Ok(())
    }

    /// Whether `start` has registered the listeners.
    pub fn is_started(&self) -> bool {
        self.attachment.is_some()
    }

    /// Whether the browser offers native gesture events.
    pub fn native_gestures(&self) -> bool {
        self.attachment
            .as_ref()
            .is_some_and(|a| a.mode() == MultiMode::NativeGesture)
    }

    /// Stop capturing new gestures.
    pub fn pause(&mut self) {
        self.paused = true;
        if let Some(attachment) = &self.attachment {
            attachment.controls().pause();
        }
    }

    /// Capture new gestures again.
    pub fn resume(&mut self) {
        self.paused = false;
        if let Some(attachment) = &self.attachment {
            attachment.controls().resume();
        }
    }

    /// Let pointer events keep their default action.
    pub fn enable_default_touch(&mut self) {
        self.settings.cancel_touch = false;
        if let Some(attachment) = &self.attachment {
            attachment.controls().enable_default_touch();
        }
    }

    /// Suppress the default action of pointer events.
    pub fn disable_default_touch(&mut self) {
        self.settings.cancel_touch = true;
        if let Some(attachment) = &self.attachment {
            attachment.controls().disable_default_touch();
        }
    }

    /// Let gesture and wheel events keep their default action.
    pub fn enable_default_gesture(&mut self) {
        self.settings.cancel_gesture = false;
        if let Some(attachment) = &self.attachment {
            attachment.controls().enable_default_gesture();
        }
    }

    /// Suppress the default action of gesture and wheel events.
    pub fn disable_default_gesture(&mut self) {
        self.settings.cancel_gesture = true;
        if let Some(attachment) = &self.attachment {
            attachment.controls().disable_default_gesture();
        }
    }

    /// Remove every listener. `start` may be called again afterwards.
    pub fn detach(&mut self) {
        self.attachment = None;
    }
}
