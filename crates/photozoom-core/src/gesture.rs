//! The gesture facade: one object per surface, owning the settings, the
//! normalized callbacks and whichever recognizers those callbacks need.

use crate::callback::{GestureHandlers, Handlers};
use crate::config::{GestureControls, GestureSettings};
use crate::event::HostEvent;
use crate::multi::{MultiMode, MultiRecognizer};
use crate::single::SingleRecognizer;
use std::fmt;

/// Recognizers built by [`Gestures::init`].
struct Ready<T> {
    mode: MultiMode,
    single: Option<SingleRecognizer<T>>,
    multi: Option<MultiRecognizer<T>>,
}

/// Gesture recognition for one surface.
///
/// Created uninitialized; [`init`](Self::init) picks the multi-pointer path and
/// builds the recognizers. Every dispatch method before that, and every
/// dispatch to a recognizer or path that was not built, does nothing.
///
/// ```
/// use photozoom_core::{GestureHandlers, GestureSettings, Gestures, MultiMode, SyntheticEvent};
///
/// let handlers = GestureHandlers::<SyntheticEvent>::new().on_swipe_left(|swipe| {
///     assert_eq!(swipe.distance, 120.0);
/// });
/// let mut gestures = Gestures::new(GestureSettings::default(), handlers);
/// gestures.init(MultiMode::TouchFallback);
///
/// gestures.pointer_start(&SyntheticEvent::at(200.0, 0.0));
/// gestures.pointer_change(&SyntheticEvent::at(80.0, 0.0));
/// gestures.pointer_end(&SyntheticEvent::at(80.0, 0.0));
/// ```
pub struct Gestures<E: HostEvent> {
    settings: GestureSettings,
    handlers: Handlers<E>,
    controls: GestureControls,
    ready: Option<Ready<E::Target>>,
}

impl<E: HostEvent> Gestures<E> {
    /// Normalize settings and callbacks. Nothing is tracked until `init`.
    pub fn new(settings: GestureSettings, handlers: GestureHandlers<E>) -> Self {
        let settings = settings.normalized();
        let controls = GestureControls::new(&settings);
        Self {
            settings,
            handlers: handlers.normalize(),
            controls,
            ready: None,
        }
    }

    /// One facade per surface, each with its own state and controls, all sharing
    /// the same callbacks.
    pub fn each<S>(
        surfaces: impl IntoIterator<Item = S>,
        settings: &GestureSettings,
        handlers: &GestureHandlers<E>,
    ) -> Vec<(S, Self)> {
        surfaces
            .into_iter()
            .map(|surface| (surface, Self::new(settings.clone(), handlers.clone())))
            .collect()
    }

    /// Build the recognizers the callbacks need. Later calls are ignored.
    pub fn init(&mut self, mode: MultiMode) {
        if self.ready.is_some() {
            return;
        }
        let single = self
            .handlers
            .allow_single()
            .then(|| SingleRecognizer::new(self.settings.threshold, self.controls.clone()));
        let multi = self
            .handlers
            .allow_multi()
            .then(|| MultiRecognizer::new(mode, self.settings.increment, self.controls.clone()));
        tracing::debug!(
            target: "photozoom_core::gesture",
            ?mode,
            single = single.is_some(),
            multi = multi.is_some(),
            "gestures initialized"
        );
        self.ready = Some(Ready {
            mode,
            single,
            multi,
        });
    }

    /// Whether [`init`](Self::init) has run.
    pub fn is_initialized(&self) -> bool {
        self.ready.is_some()
    }

    /// The multi-pointer path chosen at init.
    pub fn mode(&self) -> Option<MultiMode> {
        self.ready.as_ref().map(|ready| ready.mode)
    }

    /// Whether any single-pointer callback was supplied.
    pub fn allows_single(&self) -> bool {
        self.handlers.allow_single()
    }

    /// Whether a pinch or twist callback was supplied.
    pub fn allows_multi(&self) -> bool {
        self.handlers.allow_multi()
    }

    /// The settings after normalization.
    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    /// Shared handle to the pause and default-action flags.
    pub fn controls(&self) -> GestureControls {
        self.controls.clone()
    }

    /// Stop capturing new gestures.
    pub fn pause(&self) {
        self.controls.pause();
    }

    /// Capture new gestures again.
    pub fn resume(&self) {
        self.controls.resume();
    }

    /// Let pointer events keep their default action.
    pub fn enable_default_touch(&self) {
        self.controls.enable_default_touch();
    }

    /// Suppress the default action of pointer events.
    pub fn disable_default_touch(&self) {
        self.controls.disable_default_touch();
    }

    /// Let gesture and wheel events keep their default action.
    pub fn enable_default_gesture(&self) {
        self.controls.enable_default_gesture();
    }

    /// Suppress the default action of gesture and wheel events.
    pub fn disable_default_gesture(&self) {
        self.controls.disable_default_gesture();
    }

    fn single(&mut self) -> Option<&mut SingleRecognizer<E::Target>> {
        self.ready.as_mut().and_then(|ready| ready.single.as_mut())
    }

    fn multi(&mut self) -> Option<&mut MultiRecognizer<E::Target>> {
        self.ready.as_mut().and_then(|ready| ready.multi.as_mut())
    }

    /// Mouse down, first touch or legacy pointer down.
    pub fn pointer_start(&mut self, event: &E) {
        if let Some(single) = self.single() {
            single.start(event);
        }
    }

    /// Mouse, touch or legacy pointer move.
    pub fn pointer_change(&mut self, event: &E) {
        let Some(ready) = self.ready.as_mut() else {
            return;
        };
        if let Some(single) = ready.single.as_mut() {
            single.change(event, &self.handlers);
        }
    }

    /// Mouse up, touch end or legacy pointer up.
    pub fn pointer_end(&mut self, event: &E) {
        let Some(ready) = self.ready.as_mut() else {
            return;
        };
        if let Some(single) = ready.single.as_mut() {
            single.end(event, &self.handlers);
        }
    }

    /// Native gesture start.
    pub fn gesture_start(&mut self, event: &E) {
        if let Some(multi) = self.multi() {
            multi.gesture_start(event);
        }
    }

    /// Native gesture change.
    pub fn gesture_change(&mut self, event: &E) {
        let Some(ready) = self.ready.as_mut() else {
            return;
        };
        if let Some(multi) = ready.multi.as_mut() {
            multi.gesture_change(event, &self.handlers);
        }
    }

    /// Native gesture end.
    pub fn gesture_end(&mut self, event: &E) {
        if let Some(multi) = self.multi() {
            multi.gesture_end(event);
        }
    }

    /// Touch start on the two-touch path.
    pub fn touch_start(&mut self, event: &E) {
        if let Some(multi) = self.multi() {
            multi.touch_start(event);
        }
    }

    /// Touch move on the two-touch path.
    pub fn touch_change(&mut self, event: &E) {
        let Some(ready) = self.ready.as_mut() else {
            return;
        };
        if let Some(multi) = ready.multi.as_mut() {
            multi.touch_change(event, &self.handlers);
        }
    }

    /// Touch end on the two-touch path.
    pub fn touch_end(&mut self, event: &E) {
        if let Some(multi) = self.multi() {
            multi.touch_end(event);
        }
    }

    /// Wheel tick.
    pub fn wheel(&self, event: &E) {
        if let Some(multi) = self.ready.as_ref().and_then(|ready| ready.multi.as_ref()) {
            multi.wheel(event, &self.handlers);
        }
    }
}

impl<E: HostEvent> fmt::Debug for Gestures<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gestures")
            .field("settings", &self.settings)
            .field("handlers", &self.handlers)
            .field("controls", &self.controls)
            .field("mode", &self.mode())
            .finish()
    }
}
