//! Settings for the gesture core and the overlay, and the runtime control flags.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

/// Default swipe threshold in pixels.
pub const DEFAULT_THRESHOLD: f32 = 50.0;
/// Default wheel pinch increment.
pub const DEFAULT_INCREMENT: f32 = 0.1;
/// Default maximum zoom of the overlay.
pub const DEFAULT_ZOOM: f32 = 1.0;
/// Default slicer template: the image URL unchanged.
pub const DEFAULT_SLICER: &str = "{src}";

/// Tunables of the gesture recognizers.
///
/// Deserializes from JSON with every field optional. The flags also accept the
/// camelCase keys JavaScript callers use (`cancelTouch`, `cancelGesture`):
///
/// ```
/// use photozoom_core::GestureSettings;
///
/// let settings = GestureSettings::from_json(r#"{"threshold": 80}"#).unwrap();
/// assert_eq!(settings.threshold, 80.0);
/// assert!(settings.cancel_touch);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Minimum travel, in pixels, for a release to count as a swipe.
    pub threshold: f32,
    /// Pinch delta reported for one wheel tick.
    pub increment: f32,
    /// Suppress the default action of pointer move/up events.
    #[serde(alias = "cancelTouch")]
    pub cancel_touch: bool,
    /// Suppress the default action of gesture, two-touch and wheel events.
    #[serde(alias = "cancelGesture")]
    pub cancel_gesture: bool,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            increment: DEFAULT_INCREMENT,
            cancel_touch: true,
            cancel_gesture: true,
        }
    }
}

impl GestureSettings {
    /// Parse settings from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace unusable numbers with their defaults.
    ///
    /// Zero, negative and non-finite values would make every release a swipe or
    /// every wheel tick a no-op.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            self.threshold = DEFAULT_THRESHOLD;
        }
        if !(self.increment.is_finite() && self.increment > 0.0) {
            self.increment = DEFAULT_INCREMENT;
        }
        self
    }
}

/// Runtime switches shared by every recognizer of one surface.
///
/// Cloning hands out another reference to the same flags, so a callback may
/// pause its own surface while the recognizers are dispatching.
#[derive(Debug, Clone)]
pub struct GestureControls {
    paused: Rc<Cell<bool>>,
    cancel_touch: Rc<Cell<bool>>,
    cancel_gesture: Rc<Cell<bool>>,
}

impl GestureControls {
    /// Controls starting from the cancellation flags in `settings`, unpaused.
    pub fn new(settings: &GestureSettings) -> Self {
        Self {
            paused: Rc::new(Cell::new(false)),
            cancel_touch: Rc::new(Cell::new(settings.cancel_touch)),
            cancel_gesture: Rc::new(Cell::new(settings.cancel_gesture)),
        }
    }

    /// Stop capturing new gestures. Gestures already started still finish.
    pub fn pause(&self) {
        self.paused.set(true);
    }

    /// Capture new gestures again.
    pub fn resume(&self) {
        self.paused.set(false);
    }

    /// Whether new gestures are ignored.
    pub fn is_paused(&self) -> bool {
        self.paused.get()
    }

    /// Let pointer events keep their default action (scrolling, selection).
    pub fn enable_default_touch(&self) {
        self.cancel_touch.set(false);
    }

    /// Suppress the default action of pointer events.
    pub fn disable_default_touch(&self) {
        self.cancel_touch.set(true);
    }

    /// Let gesture and wheel events keep their default action (native zoom, scroll).
    pub fn enable_default_gesture(&self) {
        self.cancel_gesture.set(false);
    }

    /// Suppress the default action of gesture and wheel events.
    pub fn disable_default_gesture(&self) {
        self.cancel_gesture.set(true);
    }

    /// Whether pointer events get their default action suppressed.
    pub fn cancels_touch(&self) -> bool {
        self.cancel_touch.get()
    }

    /// Whether gesture and wheel events get their default action suppressed.
    pub fn cancels_gesture(&self) -> bool {
        self.cancel_gesture.get()
    }
}

impl Default for GestureControls {
    fn default() -> Self {
        Self::new(&GestureSettings::default())
    }
}

/// Settings of the zoom overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Maximum zoom factor; 1 disables zooming.
    pub zoom: f32,
    /// URL template of the image size service; `{src}` is the image URL.
    pub sizer: Option<String>,
    /// URL template of the image resizer; `{src}` is the image URL and
    /// `{size}` the requested dimension. Empty means the raw URL.
    pub slicer: String,
    /// Selector of the element the popup is appended to; `None` is `document.body`.
    pub container: Option<String>,
    /// Gesture tunables of the popup.
    pub gestures: GestureSettings,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            sizer: None,
            slicer: DEFAULT_SLICER.to_string(),
            container: None,
            gestures: GestureSettings::default(),
        }
    }
}

impl OverlaySettings {
    /// Parse settings from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace unusable numbers with their defaults.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if !(self.zoom.is_finite() && self.zoom >= 1.0) {
            self.zoom = DEFAULT_ZOOM;
        }
        self.gestures = self.gestures.normalized();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_settings_default() {
        let settings = GestureSettings::default();
        assert_eq!(settings.threshold, 50.0);
        assert!((settings.increment - 0.1).abs() < f32::EPSILON);
        assert!(settings.cancel_touch);
        assert!(settings.cancel_gesture);
    }

    #[test]
    fn test_gesture_settings_partial_json() {
        let settings =
            GestureSettings::from_json(r#"{"increment": 0.25, "cancel_gesture": false}"#).unwrap();
        assert_eq!(settings.threshold, 50.0);
        assert_eq!(settings.increment, 0.25);
        assert!(settings.cancel_touch);
        assert!(!settings.cancel_gesture);
    }

    #[test]
    fn test_gesture_settings_camel_case_keys() {
        let settings =
            GestureSettings::from_json(r#"{"cancelTouch": false, "cancelGesture": false}"#)
                .unwrap();
        assert!(!settings.cancel_touch);
        assert!(!settings.cancel_gesture);

        let settings =
            OverlaySettings::from_json(r#"{"gestures": {"cancelTouch": false}}"#).unwrap();
        assert!(!settings.gestures.cancel_touch);
        assert!(settings.gestures.cancel_gesture);
    }

    #[test]
    fn test_gesture_settings_bad_json() {
        assert!(GestureSettings::from_json("{threshold:").is_err());
    }

    #[test]
    fn test_normalized_replaces_unusable_numbers() {
        let settings = GestureSettings {
            threshold: 0.0,
            increment: f32::NAN,
            ..GestureSettings::default()
        }
        .normalized();
        assert_eq!(settings.threshold, DEFAULT_THRESHOLD);
        assert_eq!(settings.increment, DEFAULT_INCREMENT);

        let settings = GestureSettings {
            threshold: -5.0,
            ..GestureSettings::default()
        }
        .normalized();
        assert_eq!(settings.threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_normalized_keeps_valid_numbers() {
        let settings = GestureSettings {
            threshold: 12.0,
            increment: 0.5,
            ..GestureSettings::default()
        };
        assert_eq!(settings.clone().normalized(), settings);
    }

    #[test]
    fn test_controls_toggle() {
        let controls = GestureControls::default();
        assert!(!controls.is_paused());
        controls.pause();
        assert!(controls.is_paused());
        controls.resume();
        assert!(!controls.is_paused());

        controls.enable_default_touch();
        assert!(!controls.cancels_touch());
        controls.disable_default_touch();
        assert!(controls.cancels_touch());

        controls.enable_default_gesture();
        assert!(!controls.cancels_gesture());
        controls.disable_default_gesture();
        assert!(controls.cancels_gesture());
    }

    #[test]
    fn test_controls_clones_share_flags() {
        let controls = GestureControls::default();
        let handle = controls.clone();
        handle.pause();
        assert!(controls.is_paused());
    }

    #[test]
    fn test_controls_start_from_settings() {
        let settings = GestureSettings {
            cancel_touch: false,
            ..GestureSettings::default()
        };
        let controls = GestureControls::new(&settings);
        assert!(!controls.cancels_touch());
        assert!(controls.cancels_gesture());
    }

    #[test]
    fn test_overlay_settings_json() {
        let settings = OverlaySettings::from_json(
            r#"{"zoom": 3, "sizer": "/size?src={src}", "gestures": {"threshold": 30}}"#,
        )
        .unwrap();
        assert_eq!(settings.zoom, 3.0);
        assert_eq!(settings.sizer.as_deref(), Some("/size?src={src}"));
        assert_eq!(settings.slicer, "{src}");
        assert_eq!(settings.gestures.threshold, 30.0);
    }

    #[test]
    fn test_overlay_settings_normalized_zoom() {
        let settings = OverlaySettings {
            zoom: 0.5,
            ..OverlaySettings::default()
        }
        .normalized();
        assert_eq!(settings.zoom, 1.0);
    }
}
