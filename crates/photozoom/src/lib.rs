//! Photozoom: touch gestures and a zoomable image popup for the browser.
//!
//! The gesture recognizers live in `photozoom-core` and are re-exported here.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { GestureSurface, Photozoom } from './photozoom.js';
//!
//! async function main() {
//!     await init();
//!     const surface = GestureSurface.attach(document.querySelector('#map'), '');
//!     surface.on_pinch(({ scale }) => zoomBy(scale));
//!     surface.start();
//!
//!     const zoom = new Photozoom('.gallery a', '{"zoom": 2}');
//!     zoom.on_closed((element) => element.focus());
//! }
//! ```

#![allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::needless_pass_by_value,
    clippy::too_many_arguments,
    clippy::too_many_lines,
    clippy::type_complexity,
    clippy::map_unwrap_or,
    clippy::manual_let_else,
    clippy::uninlined_format_args,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::unnecessary_wraps,
    unreachable_pub
)]

pub use photozoom_core::*;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{DomEvent, GestureSurface, Photozoom};

pub use browser::{AttachError, GestureApi, OverlayError};
