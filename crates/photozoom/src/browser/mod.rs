//! Browser runtime for photozoom.
//!
//! This module connects the gesture core to DOM events and hosts the zoom
//! overlay built on top of it.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod busy;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod overlay;
#[cfg(target_arch = "wasm32")]
pub mod sizer;
#[cfg(target_arch = "wasm32")]
pub mod surface;

// Cross-platform modules
pub mod bindings;
pub mod error;

#[cfg(target_arch = "wasm32")]
pub use app::{init, log};
pub use bindings::{plan, Binding, GestureApi, Route, Scope};
#[cfg(target_arch = "wasm32")]
pub use busy::Busy;
pub use error::{AttachError, OverlayError};
#[cfg(target_arch = "wasm32")]
pub use events::DomEvent;
#[cfg(target_arch = "wasm32")]
pub use overlay::Photozoom;
#[cfg(target_arch = "wasm32")]
pub use surface::{detect_gesture_api, Attachment, GestureSurface, SharedGestures};
