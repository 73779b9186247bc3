//! Multi-pointer recognition: pinch and twist.
//!
//! A surface gets exactly one of two multi-pointer paths, picked at init:
//!
//! - [`MultiMode::NativeGesture`]: the host reports absolute `scale` and
//!   `rotation` on its own gesture events; pinch and twist are the differences
//!   between consecutive reports.
//! - [`MultiMode::TouchFallback`]: two raw touches are followed and the pinch is
//!   approximated from the change of their spread. No twist.
//!
//! The wheel is available on both paths and maps one tick to a fixed pinch.

use crate::callback::{Handlers, Pinch, Twist};
use crate::config::GestureControls;
use crate::event::{read_coordinates, resolve_target, HostEvent};
use crate::geometry::Point;

/// Which multi-pointer path a surface uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiMode {
    /// Host gesture events with absolute scale and rotation.
    NativeGesture,
    /// Two-touch approximation.
    TouchFallback,
}

/// Absolute scale and rotation as reported by a native gesture event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attitude {
    /// Absolute scale, 1 at gesture start.
    pub scale: f32,
    /// Absolute rotation in degrees.
    pub rotation: f32,
}

impl Attitude {
    fn of<E: HostEvent + ?Sized>(event: &E) -> Self {
        Self {
            scale: event.scale().unwrap_or(1.0),
            rotation: event.rotation().unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone)]
enum Track<T> {
    Native {
        origin: Attitude,
        progression: Attitude,
        target: Option<T>,
    },
    Fallback {
        origin: [Point; 2],
        progression: [Point; 2],
        target: Option<T>,
    },
}

/// Tracks one multi-pointer gesture at a time.
#[derive(Debug)]
pub struct MultiRecognizer<T> {
    mode: MultiMode,
    increment: f32,
    controls: GestureControls,
    track: Option<Track<T>>,
}

/// Spread ratio of two touch pairs along one axis; a pair collapsed on that
/// axis contributes 1, leaving the axis neutral.
fn axis_ratio(current: f32, previous: f32) -> f32 {
    if previous == 0.0 {
        1.0
    } else {
        current / previous
    }
}

/// Scale delta between two touch pairs: the sum of the per-axis spread ratios
/// minus 2, so stationary fingers give 0.
pub fn fallback_scale(current: [Point; 2], previous: [Point; 2]) -> f32 {
    let ratio_x = axis_ratio(current[0].x - current[1].x, previous[0].x - previous[1].x);
    let ratio_y = axis_ratio(current[0].y - current[1].y, previous[0].y - previous[1].y);
    ratio_x + ratio_y - 2.0
}

fn two_touches<E: HostEvent + ?Sized>(event: &E) -> Option<[Point; 2]> {
    if event.touch_count() != 2 {
        return None;
    }
    Some([event.touch(0)?, event.touch(1)?])
}

impl<T: Clone> MultiRecognizer<T> {
    /// Create an idle recognizer on the given path.
    pub fn new(mode: MultiMode, increment: f32, controls: GestureControls) -> Self {
        Self {
            mode,
            increment,
            controls,
            track: None,
        }
    }

    /// The path this recognizer follows.
    pub fn mode(&self) -> MultiMode {
        self.mode
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.track.is_some()
    }

    /// Absolute attitude at the start of the native gesture in progress.
    pub fn native_origin(&self) -> Option<Attitude> {
        match self.track {
            Some(Track::Native { origin, .. }) => Some(origin),
            _ => None,
        }
    }

    /// Touches at the start of the two-touch gesture in progress.
    pub fn fallback_origin(&self) -> Option<[Point; 2]> {
        match self.track {
            Some(Track::Fallback { origin, .. }) => Some(origin),
            _ => None,
        }
    }

    fn cancel<E: HostEvent + ?Sized>(&self, event: &E) {
        if self.controls.cancels_gesture() {
            event.prevent_default();
        }
    }

    /// Native gesture began. Only the origin is recorded; no pinch or twist
    /// fires until the first change.
    pub fn gesture_start<E: HostEvent<Target = T>>(&mut self, event: &E) {
        if self.mode != MultiMode::NativeGesture {
            return;
        }
        self.cancel(event);
        if self.controls.is_paused() {
            return;
        }
        let origin = Attitude::of(event);
        tracing::trace!(
            target: "photozoom_core::multi",
            scale = origin.scale,
            rotation = origin.rotation,
            "gesture origin captured"
        );
        self.track = Some(Track::Native {
            origin,
            progression: origin,
            target: resolve_target(event),
        });
    }

    /// Native gesture changed. Pinch and twist both fire on every change, even
    /// with a zero delta.
    pub fn gesture_change<E: HostEvent<Target = T>>(&mut self, event: &E, handlers: &Handlers<E>) {
        if self.mode != MultiMode::NativeGesture {
            return;
        }
        self.cancel(event);
        let Some(Track::Native {
            progression,
            target,
            ..
        }) = self.track.as_mut()
        else {
            return;
        };
        let at = read_coordinates(event);
        let current = Attitude::of(event);
        let scale = current.scale - progression.scale;
        let rotation = current.rotation - progression.rotation;
        tracing::debug!(
            target: "photozoom_core::multi",
            scale,
            rotation,
            "pinch and twist"
        );
        (handlers.pinch)(Pinch {
            x: at.x,
            y: at.y,
            scale,
            event,
            source: target.clone(),
        });
        (handlers.twist)(Twist {
            x: at.x,
            y: at.y,
            rotation,
            event,
            source: target.clone(),
        });
        *progression = current;
    }

    /// Native gesture ended.
    pub fn gesture_end<E: HostEvent<Target = T>>(&mut self, _event: &E) {
        if self.mode != MultiMode::NativeGesture {
            return;
        }
        self.clear();
    }

    /// Touches changed on the fallback path. Starts tracking only with exactly
    /// two touches down and records the origin without firing a pinch.
    pub fn touch_start<E: HostEvent<Target = T>>(&mut self, event: &E) {
        if self.mode != MultiMode::TouchFallback || self.controls.is_paused() {
            return;
        }
        let Some(touches) = two_touches(event) else {
            return;
        };
        tracing::trace!(
            target: "photozoom_core::multi",
            ?touches,
            "two-touch origin captured"
        );
        self.track = Some(Track::Fallback {
            origin: touches,
            progression: touches,
            target: resolve_target(event),
        });
    }

    /// Touches moved on the fallback path.
    pub fn touch_change<E: HostEvent<Target = T>>(&mut self, event: &E, handlers: &Handlers<E>) {
        if self.mode != MultiMode::TouchFallback {
            return;
        }
        self.cancel(event);
        let Some(Track::Fallback {
            progression,
            target,
            ..
        }) = self.track.as_mut()
        else {
            return;
        };
        let Some(current) = two_touches(event) else {
            return;
        };
        let at = read_coordinates(event);
        let scale = fallback_scale(current, *progression);
        tracing::debug!(target: "photozoom_core::multi", scale, "two-touch pinch");
        (handlers.pinch)(Pinch {
            x: at.x,
            y: at.y,
            scale,
            event,
            source: target.clone(),
        });
        *progression = current;
    }

    /// A touch lifted on the fallback path.
    pub fn touch_end<E: HostEvent<Target = T>>(&mut self, _event: &E) {
        if self.mode != MultiMode::TouchFallback {
            return;
        }
        self.clear();
    }

    /// One wheel tick: a pinch of exactly `increment`, positive when rolled
    /// away from the user. Stateless and independent of the pause flag.
    pub fn wheel<E: HostEvent<Target = T>>(&self, event: &E, handlers: &Handlers<E>) {
        self.cancel(event);
        let at = read_coordinates(event);
        let scale = if event.wheel_distance().unwrap_or(0.0) > 0.0 {
            self.increment
        } else {
            -self.increment
        };
        tracing::debug!(target: "photozoom_core::multi", scale, "wheel pinch");
        (handlers.pinch)(Pinch {
            x: at.x,
            y: at.y,
            scale,
            event,
            source: resolve_target(event),
        });
    }

    fn clear(&mut self) {
        if self.track.take().is_some() {
            tracing::trace!(target: "photozoom_core::multi", "gesture origin cleared");
        }
    }
}
