//! Which DOM events a surface listens to, and where each one is routed.
//!
//! Kept free of `web_sys` so the listener plan can be checked natively.

use photozoom_core::{Gestures, HostEvent, MultiMode};

/// Native gesture event family offered by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureApi {
    /// `gesturestart` / `gesturechange` / `gestureend`.
    Standard,
    /// `msgesturestart` / `msgesturechange` / `msgestureend`.
    Microsoft,
    /// No native gesture events; pinch is approximated from two touches.
    Unsupported,
}

impl GestureApi {
    /// Probe the window once. `has` answers whether a property exists on it.
    pub fn detect(has: impl Fn(&str) -> bool) -> Self {
        if has("ongesturestart") {
            Self::Standard
        } else if has("msgesturestart") {
            Self::Microsoft
        } else {
            Self::Unsupported
        }
    }

    /// Multi-pointer path this API implies.
    pub const fn mode(self) -> MultiMode {
        match self {
            Self::Standard | Self::Microsoft => MultiMode::NativeGesture,
            Self::Unsupported => MultiMode::TouchFallback,
        }
    }
}

/// Where a listener is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The gesture surface itself.
    Surface,
    /// `document.body`, so a release outside the surface still ends the gesture.
    Body,
}

/// Facade operation an event is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    PointerStart,
    PointerChange,
    PointerEnd,
    GestureStart,
    GestureChange,
    GestureEnd,
    TouchStart,
    TouchChange,
    TouchEnd,
    Wheel,
}

impl Route {
    /// Hand `event` to the matching facade operation.
    pub fn dispatch<E: HostEvent>(self, gestures: &mut Gestures<E>, event: &E) {
        match self {
            Self::PointerStart => gestures.pointer_start(event),
            Self::PointerChange => gestures.pointer_change(event),
            Self::PointerEnd => gestures.pointer_end(event),
            Self::GestureStart => gestures.gesture_start(event),
            Self::GestureChange => gestures.gesture_change(event),
            Self::GestureEnd => gestures.gesture_end(event),
            Self::TouchStart => gestures.touch_start(event),
            Self::TouchChange => gestures.touch_change(event),
            Self::TouchEnd => gestures.touch_end(event),
            Self::Wheel => gestures.wheel(event),
        }
    }
}

/// One listener to register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Element the listener goes on.
    pub scope: Scope,
    /// DOM event name.
    pub event: &'static str,
    /// Facade operation it feeds.
    pub route: Route,
}

const fn bind(scope: Scope, event: &'static str, route: Route) -> Binding {
    Binding {
        scope,
        event,
        route,
    }
}

const SINGLE: [Binding; 9] = [
    bind(Scope::Surface, "mousedown", Route::PointerStart),
    bind(Scope::Surface, "mousemove", Route::PointerChange),
    bind(Scope::Body, "mouseup", Route::PointerEnd),
    bind(Scope::Surface, "touchstart", Route::PointerStart),
    bind(Scope::Surface, "touchmove", Route::PointerChange),
    bind(Scope::Body, "touchend", Route::PointerEnd),
    bind(Scope::Surface, "mspointerdown", Route::PointerStart),
    bind(Scope::Surface, "mspointermove", Route::PointerChange),
    bind(Scope::Body, "mspointerup", Route::PointerEnd),
];

/// Listeners for a surface. Single-pointer listeners only when a
/// single-pointer callback exists; the wheel and one multi-pointer family only
/// when a pinch or twist callback exists.
pub fn plan(api: GestureApi, single: bool, multi: bool) -> Vec<Binding> {
    let mut bindings = Vec::new();
    if single {
        bindings.extend(SINGLE);
    }
    if multi {
        bindings.push(bind(Scope::Surface, "wheel", Route::Wheel));
        bindings.extend(match api {
            GestureApi::Standard => [
                bind(Scope::Surface, "gesturestart", Route::GestureStart),
                bind(Scope::Surface, "gesturechange", Route::GestureChange),
                bind(Scope::Surface, "gestureend", Route::GestureEnd),
            ],
            GestureApi::Microsoft => [
                bind(Scope::Surface, "msgesturestart", Route::GestureStart),
                bind(Scope::Surface, "msgesturechange", Route::GestureChange),
                bind(Scope::Surface, "msgestureend", Route::GestureEnd),
            ],
            GestureApi::Unsupported => [
                bind(Scope::Surface, "touchstart", Route::TouchStart),
                bind(Scope::Surface, "touchmove", Route::TouchChange),
                bind(Scope::Surface, "touchend", Route::TouchEnd),
            ],
        });
    }
    bindings
}
