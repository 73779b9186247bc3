//! Gesture payloads and the callback tables that receive them.
//!
//! Every payload carries the position the gesture is anchored at, its
//! gesture-specific measurement, the raw host event and the element the gesture
//! started on.

use crate::event::HostEvent;
use std::fmt;
use std::rc::Rc;

/// A pointer moved while held down.
///
/// `x`/`y` are the gesture ORIGIN, not the current pointer position;
/// `horizontal`/`vertical` are the step since the previous move.
pub struct Drag<'a, E: HostEvent> {
    /// Origin x.
    pub x: f32,
    /// Origin y.
    pub y: f32,
    /// Horizontal step since the previous move.
    pub horizontal: f32,
    /// Vertical step since the previous move.
    pub vertical: f32,
    /// Raw event.
    pub event: &'a E,
    /// Element the gesture started on.
    pub source: Option<E::Target>,
}

/// Direction of a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Towards negative y.
    Up,
    /// Towards negative x.
    Left,
    /// Towards positive x.
    Right,
    /// Towards positive y.
    Down,
}

/// A release after travelling further than the threshold.
pub struct Swipe<'a, E: HostEvent> {
    /// Origin x.
    pub x: f32,
    /// Origin y.
    pub y: f32,
    /// Travel along the dominant axis, always positive.
    pub distance: f32,
    /// Which way the pointer travelled.
    pub direction: SwipeDirection,
    /// Raw event.
    pub event: &'a E,
    /// Element the gesture started on.
    pub source: Option<E::Target>,
}

/// Two taps close together in space and time.
pub struct DoubleTap<'a, E: HostEvent> {
    /// Origin x of the second tap.
    pub x: f32,
    /// Origin y of the second tap.
    pub y: f32,
    /// Raw event.
    pub event: &'a E,
    /// Element the second tap started on.
    pub source: Option<E::Target>,
}

/// A change of zoom, expressed as a scale delta.
pub struct Pinch<'a, E: HostEvent> {
    /// Event x.
    pub x: f32,
    /// Event y.
    pub y: f32,
    /// Scale change since the previous report; positive zooms in.
    pub scale: f32,
    /// Raw event.
    pub event: &'a E,
    /// Element the gesture started on (or the wheel target).
    pub source: Option<E::Target>,
}

/// A change of rotation.
pub struct Twist<'a, E: HostEvent> {
    /// Event x.
    pub x: f32,
    /// Event y.
    pub y: f32,
    /// Rotation change since the previous report, in degrees.
    pub rotation: f32,
    /// Raw event.
    pub event: &'a E,
    /// Element the gesture started on.
    pub source: Option<E::Target>,
}

/// Drag callback.
pub type DragFn<E> = Rc<dyn Fn(Drag<'_, E>)>;
/// Swipe callback.
pub type SwipeFn<E> = Rc<dyn Fn(Swipe<'_, E>)>;
/// Double-tap callback.
pub type DoubleTapFn<E> = Rc<dyn Fn(DoubleTap<'_, E>)>;
/// Pinch callback.
pub type PinchFn<E> = Rc<dyn Fn(Pinch<'_, E>)>;
/// Twist callback.
pub type TwistFn<E> = Rc<dyn Fn(Twist<'_, E>)>;

fn ignore_swipe<E: HostEvent>(_: Swipe<'_, E>) {}
fn ignore_drag<E: HostEvent>(_: Drag<'_, E>) {}
fn ignore_double_tap<E: HostEvent>(_: DoubleTap<'_, E>) {}
fn ignore_pinch<E: HostEvent>(_: Pinch<'_, E>) {}
fn ignore_twist<E: HostEvent>(_: Twist<'_, E>) {}

/// Callbacks as supplied by the consumer; any of them may be missing.
///
/// Cloning shares the callbacks, which is how one definition serves several
/// target surfaces.
pub struct GestureHandlers<E: HostEvent> {
    /// Upward swipe.
    pub swipe_up: Option<SwipeFn<E>>,
    /// Leftward swipe.
    pub swipe_left: Option<SwipeFn<E>>,
    /// Rightward swipe.
    pub swipe_right: Option<SwipeFn<E>>,
    /// Downward swipe.
    pub swipe_down: Option<SwipeFn<E>>,
    /// Drag.
    pub drag: Option<DragFn<E>>,
    /// Double tap.
    pub double_tap: Option<DoubleTapFn<E>>,
    /// Pinch and wheel zoom.
    pub pinch: Option<PinchFn<E>>,
    /// Rotation.
    pub twist: Option<TwistFn<E>>,
}

impl<E: HostEvent> GestureHandlers<E> {
    /// No callbacks at all.
    pub fn new() -> Self {
        Self {
            swipe_up: None,
            swipe_left: None,
            swipe_right: None,
            swipe_down: None,
            drag: None,
            double_tap: None,
            pinch: None,
            twist: None,
        }
    }

    /// Set the upward swipe callback.
    pub fn on_swipe_up(mut self, f: impl Fn(Swipe<'_, E>) + 'static) -> Self {
        self.swipe_up = Some(Rc::new(f));
        self
    }

    /// Set the leftward swipe callback.
    pub fn on_swipe_left(mut self, f: impl Fn(Swipe<'_, E>) + 'static) -> Self {
        self.swipe_left = Some(Rc::new(f));
        self
    }

    /// Set the rightward swipe callback.
    pub fn on_swipe_right(mut self, f: impl Fn(Swipe<'_, E>) + 'static) -> Self {
        self.swipe_right = Some(Rc::new(f));
        self
    }

    /// Set the downward swipe callback.
    pub fn on_swipe_down(mut self, f: impl Fn(Swipe<'_, E>) + 'static) -> Self {
        self.swipe_down = Some(Rc::new(f));
        self
    }

    /// Set the drag callback.
    pub fn on_drag(mut self, f: impl Fn(Drag<'_, E>) + 'static) -> Self {
        self.drag = Some(Rc::new(f));
        self
    }

    /// Set the double-tap callback.
    pub fn on_double_tap(mut self, f: impl Fn(DoubleTap<'_, E>) + 'static) -> Self {
        self.double_tap = Some(Rc::new(f));
        self
    }

    /// Set the pinch callback.
    pub fn on_pinch(mut self, f: impl Fn(Pinch<'_, E>) + 'static) -> Self {
        self.pinch = Some(Rc::new(f));
        self
    }

    /// Set the twist callback.
    pub fn on_twist(mut self, f: impl Fn(Twist<'_, E>) + 'static) -> Self {
        self.twist = Some(Rc::new(f));
        self
    }

    /// Whether any single-pointer gesture is wanted.
    pub fn wants_single(&self) -> bool {
        self.swipe_up.is_some()
            || self.swipe_left.is_some()
            || self.swipe_right.is_some()
            || self.swipe_down.is_some()
            || self.drag.is_some()
            || self.double_tap.is_some()
    }

    /// Whether any multi-pointer gesture is wanted.
    pub fn wants_multi(&self) -> bool {
        self.pinch.is_some() || self.twist.is_some()
    }

    /// Fill every missing slot with a no-op.
    pub fn normalize(self) -> Handlers<E> {
        let allow_single = self.wants_single();
        let allow_multi = self.wants_multi();
        Handlers {
            swipe_up: self.swipe_up.unwrap_or_else(|| Rc::new(ignore_swipe::<E>)),
            swipe_left: self.swipe_left.unwrap_or_else(|| Rc::new(ignore_swipe::<E>)),
            swipe_right: self.swipe_right.unwrap_or_else(|| Rc::new(ignore_swipe::<E>)),
            swipe_down: self.swipe_down.unwrap_or_else(|| Rc::new(ignore_swipe::<E>)),
            drag: self.drag.unwrap_or_else(|| Rc::new(ignore_drag::<E>)),
            double_tap: self.double_tap.unwrap_or_else(|| Rc::new(ignore_double_tap::<E>)),
            pinch: self.pinch.unwrap_or_else(|| Rc::new(ignore_pinch::<E>)),
            twist: self.twist.unwrap_or_else(|| Rc::new(ignore_twist::<E>)),
            allow_single,
            allow_multi,
        }
    }
}

impl<E: HostEvent> Default for GestureHandlers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: HostEvent> Clone for GestureHandlers<E> {
    fn clone(&self) -> Self {
        Self {
            swipe_up: self.swipe_up.clone(),
            swipe_left: self.swipe_left.clone(),
            swipe_right: self.swipe_right.clone(),
            swipe_down: self.swipe_down.clone(),
            drag: self.drag.clone(),
            double_tap: self.double_tap.clone(),
            pinch: self.pinch.clone(),
            twist: self.twist.clone(),
        }
    }
}

impl<E: HostEvent> fmt::Debug for GestureHandlers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureHandlers")
            .field("single", &self.wants_single())
            .field("multi", &self.wants_multi())
            .finish_non_exhaustive()
    }
}

/// Normalized callback table: every slot is callable.
pub struct Handlers<E: HostEvent> {
    pub(crate) swipe_up: SwipeFn<E>,
    pub(crate) swipe_left: SwipeFn<E>,
    pub(crate) swipe_right: SwipeFn<E>,
    pub(crate) swipe_down: SwipeFn<E>,
    pub(crate) drag: DragFn<E>,
    pub(crate) double_tap: DoubleTapFn<E>,
    pub(crate) pinch: PinchFn<E>,
    pub(crate) twist: TwistFn<E>,
    allow_single: bool,
    allow_multi: bool,
}

impl<E: HostEvent> Handlers<E> {
    /// Whether the single-pointer recognizer is needed.
    pub fn allow_single(&self) -> bool {
        self.allow_single
    }

    /// Whether the multi-pointer recognizer is needed.
    pub fn allow_multi(&self) -> bool {
        self.allow_multi
    }

    pub(crate) fn swipe(&self, swipe: Swipe<'_, E>) {
        match swipe.direction {
            SwipeDirection::Up => (self.swipe_up)(swipe),
            SwipeDirection::Left => (self.swipe_left)(swipe),
            SwipeDirection::Right => (self.swipe_right)(swipe),
            SwipeDirection::Down => (self.swipe_down)(swipe),
        }
    }
}

impl<E: HostEvent> fmt::Debug for Handlers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("allow_single", &self.allow_single)
            .field("allow_multi", &self.allow_multi)
            .finish_non_exhaustive()
    }
}
