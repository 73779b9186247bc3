//! Pan and zoom state of the popup image.
//!
//! Translation is kept in percent of the image size so that the CSS transform
//! stays valid when the popup is resized. Scaling is clamped to `[1, max_zoom]`
//! and translation to the overscan, the distance the scaled image may move
//! before its edge enters the popup.

use crate::callback::{Drag, Pinch};
use crate::event::HostEvent;
use crate::geometry::Size;

/// One change to apply: a scale delta, a pan delta, or both.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoomInput {
    /// Scale delta; positive zooms in.
    pub scale: Option<f32>,
    /// Horizontal pan in pixels.
    pub horizontal: Option<f32>,
    /// Vertical pan in pixels.
    pub vertical: Option<f32>,
}

impl ZoomInput {
    /// A pure scale change.
    #[must_use]
    pub const fn scale(delta: f32) -> Self {
        Self {
            scale: Some(delta),
            horizontal: None,
            vertical: None,
        }
    }

    /// A pure pan.
    #[must_use]
    pub const fn pan(horizontal: f32, vertical: f32) -> Self {
        Self {
            scale: None,
            horizontal: Some(horizontal),
            vertical: Some(vertical),
        }
    }
}

impl<E: HostEvent> From<&Drag<'_, E>> for ZoomInput {
    fn from(drag: &Drag<'_, E>) -> Self {
        Self::pan(drag.horizontal, drag.vertical)
    }
}

impl<E: HostEvent> From<&Pinch<'_, E>> for ZoomInput {
    fn from(pinch: &Pinch<'_, E>) -> Self {
        Self::scale(pinch.scale)
    }
}

/// Rendered sizes the overscan is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Fit {
    /// Rendered image size, unscaled.
    pub image: Size,
    /// Popup size.
    pub popup: Size,
}

/// Pan and zoom of the image on display.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    translation: [f32; 2],
    scaling: [f32; 2],
    max_zoom: f32,
}

fn overscan(image: f32, popup: f32, scaling: f32) -> f32 {
    ((image * scaling / popup - 1.0) * 50.0 / scaling).max(0.0)
}

impl ZoomState {
    /// Unzoomed and centered. `max_zoom` below 1 is treated as 1.
    pub fn new(max_zoom: f32) -> Self {
        Self {
            translation: [0.0, 0.0],
            scaling: [1.0, 1.0],
            max_zoom: if max_zoom.is_finite() { max_zoom.max(1.0) } else { 1.0 },
        }
    }

    /// Translation in percent, per axis.
    pub fn translation(&self) -> [f32; 2] {
        self.translation
    }

    /// Scale factor, per axis.
    pub fn scaling(&self) -> [f32; 2] {
        self.scaling
    }

    /// Largest allowed scale factor.
    pub fn max_zoom(&self) -> f32 {
        self.max_zoom
    }

    /// Back to unzoomed and centered.
    pub fn reset(&mut self) {
        self.translation = [0.0, 0.0];
        self.scaling = [1.0, 1.0];
    }

    /// Whether the image is at its fitted size. Swiping between images is only
    /// allowed then.
    pub fn is_unzoomed(&self) -> bool {
        self.scaling[0] == 1.0
    }

    /// Scale delta that toggles between fitted and fully zoomed.
    pub fn toggle_delta(&self) -> f32 {
        if self.is_unzoomed() {
            self.max_zoom
        } else {
            -self.max_zoom
        }
    }

    /// Apply a change, then clamp the translation to the overscan.
    pub fn apply(&mut self, input: ZoomInput, fit: Fit) {
        if let Some(delta) = input.scale {
            for axis in &mut self.scaling {
                *axis = (*axis + delta).clamp(1.0, self.max_zoom);
            }
        }
        if let (Some(horizontal), Some(vertical)) = (input.horizontal, input.vertical) {
            self.translation[0] += horizontal / 2.0 / self.scaling[0];
            self.translation[1] += vertical / 2.0 / self.scaling[1];
        }
        let limits = [
            overscan(fit.image.width, fit.popup.width, self.scaling[0]),
            overscan(fit.image.height, fit.popup.height, self.scaling[1]),
        ];
        for (value, limit) in self.translation.iter_mut().zip(limits) {
            *value = value.max(-limit).min(limit);
        }
        tracing::trace!(
            target: "photozoom_core::zoom",
            scaling = ?self.scaling,
            translation = ?self.translation,
            "zoom applied"
        );
    }

    /// CSS `transform` value for the current state.
    pub fn transform(&self) -> String {
        format!(
            "scale({},{}) translate({}%,{}%)",
            self.scaling[0], self.scaling[1], self.translation[0], self.translation[1]
        )
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fit(image: (f32, f32), popup: (f32, f32)) -> Fit {
        Fit {
            image: Size::new(image.0, image.1),
            popup: Size::new(popup.0, popup.1),
        }
    }

    #[test]
    fn test_new_is_identity() {
        let zoom = ZoomState::new(3.0);
        assert_eq!(zoom.transform(), "scale(1,1) translate(0%,0%)");
        assert!(zoom.is_unzoomed());
    }

    #[test]
    fn test_max_zoom_below_one_is_one() {
        assert_eq!(ZoomState::new(0.5).max_zoom(), 1.0);
        assert_eq!(ZoomState::new(f32::NAN).max_zoom(), 1.0);
    }

    #[test]
    fn test_scale_is_clamped() {
        let mut zoom = ZoomState::new(2.0);
        let f = fit((800.0, 600.0), (800.0, 600.0));
        zoom.apply(ZoomInput::scale(5.0), f);
        assert_eq!(zoom.scaling(), [2.0, 2.0]);
        zoom.apply(ZoomInput::scale(-5.0), f);
        assert_eq!(zoom.scaling(), [1.0, 1.0]);
    }

    #[test]
    fn test_pan_without_zoom_is_pinned() {
        let mut zoom = ZoomState::new(2.0);
        zoom.apply(ZoomInput::pan(100.0, 40.0), fit((800.0, 600.0), (800.0, 600.0)));
        assert_eq!(zoom.translation(), [0.0, 0.0]);
    }

    #[test]
    fn test_pan_when_zoomed() {
        let mut zoom = ZoomState::new(2.0);
        let f = fit((800.0, 600.0), (800.0, 600.0));
        zoom.apply(ZoomInput::scale(1.0), f);
        // Overscan at 2x: (2 - 1) * 50 / 2 = 25%.
        zoom.apply(ZoomInput::pan(40.0, 0.0), f);
        assert_eq!(zoom.translation(), [10.0, 0.0]);
        zoom.apply(ZoomInput::pan(400.0, -400.0), f);
        assert_eq!(zoom.translation(), [25.0, -25.0]);
        assert_eq!(zoom.transform(), "scale(2,2) translate(25%,-25%)");
    }

    #[test]
    fn test_pan_needs_both_axes() {
        let mut zoom = ZoomState::new(2.0);
        let f = fit((800.0, 600.0), (800.0, 600.0));
        zoom.apply(ZoomInput::scale(1.0), f);
        zoom.apply(
            ZoomInput {
                horizontal: Some(40.0),
                ..ZoomInput::default()
            },
            f,
        );
        assert_eq!(zoom.translation(), [0.0, 0.0]);
    }

    #[test]
    fn test_zooming_out_pulls_translation_back() {
        let mut zoom = ZoomState::new(3.0);
        let f = fit((800.0, 600.0), (800.0, 600.0));
        zoom.apply(ZoomInput::scale(2.0), f);
        zoom.apply(ZoomInput::pan(1_000.0, 0.0), f);
        zoom.apply(ZoomInput::scale(-2.0), f);
        assert_eq!(zoom.translation(), [0.0, 0.0]);
    }

    #[test]
    fn test_toggle_delta() {
        let mut zoom = ZoomState::new(3.0);
        assert_eq!(zoom.toggle_delta(), 3.0);
        zoom.apply(ZoomInput::scale(zoom.toggle_delta()), Fit::default());
        assert!(!zoom.is_unzoomed());
        assert_eq!(zoom.toggle_delta(), -3.0);
        zoom.apply(ZoomInput::scale(zoom.toggle_delta()), Fit::default());
        assert!(zoom.is_unzoomed());
    }

    #[test]
    fn test_reset() {
        let mut zoom = ZoomState::new(3.0);
        zoom.apply(ZoomInput::scale(1.0), fit((800.0, 600.0), (800.0, 600.0)));
        zoom.reset();
        assert_eq!(zoom, ZoomState::new(3.0));
    }

    proptest! {
        #[test]
        fn prop_scaling_stays_in_range(
            max_zoom in 1.0f32..5.0,
            deltas in prop::collection::vec(-3.0f32..3.0, 1..20),
        ) {
            let mut zoom = ZoomState::new(max_zoom);
            for delta in deltas {
                zoom.apply(ZoomInput::scale(delta), fit((800.0, 600.0), (400.0, 300.0)));
                for axis in zoom.scaling() {
                    prop_assert!((1.0..=max_zoom).contains(&axis));
                }
            }
        }

        #[test]
        fn prop_translation_within_overscan(
            scale in 0.0f32..3.0,
            pans in prop::collection::vec((-500.0f32..500.0, -500.0f32..500.0), 1..20),
        ) {
            let mut zoom = ZoomState::new(4.0);
            let f = fit((800.0, 600.0), (800.0, 600.0));
            zoom.apply(ZoomInput::scale(scale), f);
            for (h, v) in pans {
                zoom.apply(ZoomInput::pan(h, v), f);
                let [sx, sy] = zoom.scaling();
                let [tx, ty] = zoom.translation();
                prop_assert!(tx.abs() <= overscan(800.0, 800.0, sx) + 1e-3);
                prop_assert!(ty.abs() <= overscan(600.0, 600.0, sy) + 1e-3);
            }
        }
    }
}
