//! Single-pointer recognition: drag, swipe and double tap.
//!
//! Mouse, touch and legacy pointer streams all arrive here as the same three
//! operations. One pointer is tracked at a time; the release is classified from
//! the total travel between press and the last observed position.

use crate::callback::{DoubleTap, Drag, Handlers, Swipe, SwipeDirection};
use crate::config::GestureControls;
use crate::event::{read_coordinates, resolve_target, HostEvent};
use crate::geometry::Point;

/// Both taps must start closer than this on each axis, in pixels.
pub const DOUBLE_TAP_SLOP: f32 = 10.0;
/// Taps closer together than this (ms) are bounces, not a double tap.
pub const DOUBLE_TAP_MIN_MS: f64 = 100.0;
/// Taps further apart than this (ms) are two single taps.
pub const DOUBLE_TAP_MAX_MS: f64 = 500.0;

/// A pointer held down.
#[derive(Debug, Clone)]
struct Tracking<T> {
    origin: Point,
    target: Option<T>,
    progression: Point,
}

/// Where and when the previous pointer was released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LastTap {
    /// Origin of the released pointer.
    pub position: Point,
    /// Release time, ms.
    pub time: f64,
}

impl LastTap {
    fn pairs_with(&self, origin: Point, now: f64) -> bool {
        let elapsed = now - self.time;
        self.position.within(&origin, DOUBLE_TAP_SLOP)
            && elapsed > DOUBLE_TAP_MIN_MS
            && elapsed < DOUBLE_TAP_MAX_MS
    }
}

/// Tracks one logical pointer from press to release.
#[derive(Debug)]
pub struct SingleRecognizer<T> {
    threshold: f32,
    controls: GestureControls,
    tracking: Option<Tracking<T>>,
    last_tap: Option<LastTap>,
}

impl<T: Clone> SingleRecognizer<T> {
    /// Create an idle recognizer.
    pub fn new(threshold: f32, controls: GestureControls) -> Self {
        Self {
            threshold,
            controls,
            tracking: None,
            last_tap: None,
        }
    }

    /// Whether a pointer is currently held.
    pub fn is_active(&self) -> bool {
        self.tracking.is_some()
    }

    /// Origin of the held pointer.
    pub fn origin(&self) -> Option<Point> {
        self.tracking.as_ref().map(|t| t.origin)
    }

    /// Last observed position of the held pointer.
    pub fn progression(&self) -> Option<Point> {
        self.tracking.as_ref().map(|t| t.progression)
    }

    /// The previous release, kept across gestures for double-tap detection.
    pub fn last_tap(&self) -> Option<LastTap> {
        self.last_tap
    }

    /// Pointer pressed. Only the origin is recorded; no zero-length drag
    /// fires until the pointer moves.
    pub fn start<E: HostEvent<Target = T>>(&mut self, event: &E) {
        if self.controls.is_paused() {
            return;
        }
        let origin = read_coordinates(event);
        tracing::trace!(
            target: "photozoom_core::single",
            x = origin.x,
            y = origin.y,
            "pointer origin captured"
        );
        self.tracking = Some(Tracking {
            origin,
            target: resolve_target(event),
            progression: origin,
        });
    }

    /// Pointer moved.
    pub fn change<E: HostEvent<Target = T>>(&mut self, event: &E, handlers: &Handlers<E>) {
        if self.controls.cancels_touch() {
            event.prevent_default();
        }
        let Some(tracking) = self.tracking.as_mut() else {
            return;
        };
        let current = read_coordinates(event);
        let step = current - tracking.progression;
        (handlers.drag)(Drag {
            x: tracking.origin.x,
            y: tracking.origin.y,
            horizontal: step.x,
            vertical: step.y,
            event,
            source: tracking.target.clone(),
        });
        tracking.progression = current;
    }

    /// Pointer released.
    pub fn end<E: HostEvent<Target = T>>(&mut self, event: &E, handlers: &Handlers<E>) {
        if self.controls.cancels_touch() {
            event.prevent_default();
        }
        let Some(Tracking {
            origin,
            target,
            progression,
        }) = self.tracking.take()
        else {
            return;
        };
        let now = event.time_stamp();
        let travel = progression - origin;

        if self
            .last_tap
            .is_some_and(|last| last.pairs_with(origin, now))
        {
            tracing::debug!(
                target: "photozoom_core::single",
                x = origin.x,
                y = origin.y,
                "double tap"
            );
            (handlers.double_tap)(DoubleTap {
                x: origin.x,
                y: origin.y,
                event,
                source: target,
            });
        } else if let Some((direction, distance)) = self.classify(travel) {
            tracing::debug!(
                target: "photozoom_core::single",
                ?direction,
                distance,
                "swipe"
            );
            handlers.swipe(Swipe {
                x: origin.x,
                y: origin.y,
                distance,
                direction,
                event,
                source: target,
            });
        }

        self.last_tap = Some(LastTap {
            position: origin,
            time: now,
        });
    }

    /// Dominant axis first; ties count as vertical. Travel must exceed the
    /// threshold strictly.
    fn classify(&self, travel: Point) -> Option<(SwipeDirection, f32)> {
        let threshold = self.threshold;
        if travel.x.abs() > travel.y.abs() {
            if travel.x > threshold {
                Some((SwipeDirection::Right, travel.x))
            } else if travel.x < -threshold {
                Some((SwipeDirection::Left, -travel.x))
            } else {
                None
            }
        } else if travel.y > threshold {
            Some((SwipeDirection::Down, travel.y))
        } else if travel.y < -threshold {
            Some((SwipeDirection::Up, -travel.y))
        } else {
            None
        }
    }
}
