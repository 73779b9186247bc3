#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
//! Gesture recognition and pan/zoom model for the Photozoom overlay.
//!
//! This crate is platform independent; the browser runtime lives in the
//! `photozoom` crate and feeds it through the [`HostEvent`] trait.
//!
//! - Coordinates: [`read_coordinates`] turns any supported event shape into a
//!   page-space [`Point`]
//! - Single pointer: [`SingleRecognizer`] classifies drag, swipe and double tap
//! - Multi pointer: [`MultiRecognizer`] reports pinch and twist from native
//!   gesture events or two raw touches, plus wheel zoom
//! - Facade: [`Gestures`] wires both to a [`GestureHandlers`] table and exposes
//!   pause and default-action controls
//! - Overlay model: [`ZoomState`], [`Gallery`], [`ImageFit`] and the size-service
//!   reply parser

mod callback;
mod config;
mod event;
mod gallery;
mod geometry;
mod gesture;
pub mod image;
mod multi;
mod single;
mod zoom;

pub use callback::{
    DoubleTap, DoubleTapFn, Drag, DragFn, GestureHandlers, Handlers, Pinch, PinchFn, Swipe,
    SwipeDirection, SwipeFn, Twist, TwistFn,
};
pub use config::{
    GestureControls, GestureSettings, OverlaySettings, DEFAULT_INCREMENT, DEFAULT_SLICER,
    DEFAULT_THRESHOLD, DEFAULT_ZOOM,
};
pub use event::{read_coordinates, resolve_target, HostEvent, SyntheticEvent};
pub use gallery::{Gallery, SlideDirection};
pub use geometry::{Point, ScrollOffset, Size};
pub use gesture::Gestures;
pub use image::{ImageFit, SizeError, SizeReply};
pub use multi::{fallback_scale, Attitude, MultiMode, MultiRecognizer};
pub use single::{
    LastTap, SingleRecognizer, DOUBLE_TAP_MAX_MS, DOUBLE_TAP_MIN_MS, DOUBLE_TAP_SLOP,
};
pub use zoom::{Fit, ZoomInput, ZoomState};
