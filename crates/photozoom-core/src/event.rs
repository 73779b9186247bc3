//! Host input events and the coordinate reader.
//!
//! The recognizers never see a concrete event type. Anything that can report a
//! touch list, page or client coordinates and a target implements [`HostEvent`];
//! the browser runtime implements it over `web_sys` events, and
//! [`SyntheticEvent`] implements it over plain data for replay and tests.

use crate::geometry::{Point, ScrollOffset};
use std::cell::Cell;

/// An input event as delivered by the host environment.
///
/// Only [`target`](HostEvent::target), [`time_stamp`](HostEvent::time_stamp) and
/// [`prevent_default`](HostEvent::prevent_default) are mandatory; every other
/// accessor defaults to "this event does not carry that field".
pub trait HostEvent: 'static {
    /// Element reference reported back to callbacks as the gesture source.
    type Target: Clone;

    /// Number of entries in the event's active touch list.
    fn touch_count(&self) -> usize {
        0
    }

    /// Page coordinates of the touch at `index`.
    fn touch(&self, _index: usize) -> Option<Point> {
        None
    }

    /// `pageX`/`pageY`, when the event carries them.
    fn page(&self) -> Option<Point> {
        None
    }

    /// `clientX`/`clientY`, when the event carries them.
    fn client(&self) -> Option<Point> {
        None
    }

    /// Document scroll at the time of the event.
    fn scroll_offset(&self) -> ScrollOffset {
        ScrollOffset::default()
    }

    /// The element the event was dispatched to.
    fn target(&self) -> Option<Self::Target>;

    /// Legacy `srcElement`, consulted when [`target`](HostEvent::target) is absent.
    fn src_element(&self) -> Option<Self::Target> {
        None
    }

    /// Milliseconds on a monotonic clock.
    fn time_stamp(&self) -> f64;

    /// Absolute scale of a native gesture event.
    fn scale(&self) -> Option<f32> {
        None
    }

    /// Absolute rotation of a native gesture event, in degrees.
    fn rotation(&self) -> Option<f32> {
        None
    }

    /// Wheel travel normalized across platforms: positive rolls away from the
    /// user (zoom in), negative towards (zoom out).
    fn wheel_distance(&self) -> Option<f32> {
        None
    }

    /// Suppress the host's default action for this event.
    fn prevent_default(&self);
}

/// Read the page-space position of an event.
///
/// Tries, in order: the first touch, the page coordinates, then the client
/// coordinates plus the document scroll. A host that delivers none of the three
/// violates the event contract; the result is then the bare scroll offset.
pub fn read_coordinates<E: HostEvent + ?Sized>(event: &E) -> Point {
    if event.touch_count() > 0 {
        if let Some(first) = event.touch(0) {
            return first;
        }
    }
    if let Some(page) = event.page() {
        return page;
    }
    event.client().unwrap_or(Point::ORIGIN) + event.scroll_offset().resolve()
}

/// The element an event belongs to, falling back to the legacy source element.
pub fn resolve_target<E: HostEvent + ?Sized>(event: &E) -> Option<E::Target> {
    event.target().or_else(|| event.src_element())
}

/// A host event made of plain data.
///
/// Used to replay recorded input and to drive the recognizers without a
/// browser. Targets are identified by name.
#[derive(Debug, Clone, Default)]
pub struct SyntheticEvent {
    /// Active touches, page coordinates.
    pub touches: Vec<Point>,
    /// Page coordinates.
    pub page: Option<Point>,
    /// Client coordinates.
    pub client: Option<Point>,
    /// Document scroll.
    pub scroll: ScrollOffset,
    /// Dispatch target.
    pub target: Option<String>,
    /// Legacy source element.
    pub src_element: Option<String>,
    /// Time stamp in milliseconds.
    pub time_stamp: f64,
    /// Native gesture scale.
    pub scale: Option<f32>,
    /// Native gesture rotation.
    pub rotation: Option<f32>,
    /// Normalized wheel travel.
    pub wheel_distance: Option<f32>,
    default_prevented: Cell<bool>,
}

impl SyntheticEvent {
    /// A mouse-style event at page coordinates.
    #[must_use]
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            page: Some(Point::new(x, y)),
            ..Self::default()
        }
    }

    /// A touch event with the given active touches.
    #[must_use]
    pub fn touches(points: &[Point]) -> Self {
        Self {
            touches: points.to_vec(),
            ..Self::default()
        }
    }

    /// An event that only carries client coordinates.
    #[must_use]
    pub fn client(x: f32, y: f32, scroll: ScrollOffset) -> Self {
        Self {
            client: Some(Point::new(x, y)),
            scroll,
            ..Self::default()
        }
    }

    /// A native gesture event with absolute scale and rotation.
    #[must_use]
    pub fn gesture(scale: f32, rotation: f32) -> Self {
        Self {
            scale: Some(scale),
            rotation: Some(rotation),
            ..Self::default()
        }
    }

    /// A wheel tick with normalized travel.
    #[must_use]
    pub fn wheel(distance: f32) -> Self {
        Self {
            wheel_distance: Some(distance),
            ..Self::default()
        }
    }

    /// Set the time stamp.
    #[must_use]
    pub fn with_time(mut self, time_stamp: f64) -> Self {
        self.time_stamp = time_stamp;
        self
    }

    /// Set the dispatch target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the legacy source element.
    #[must_use]
    pub fn with_src_element(mut self, element: impl Into<String>) -> Self {
        self.src_element = Some(element.into());
        self
    }

    /// Set the page coordinates.
    #[must_use]
    pub fn with_page(mut self, x: f32, y: f32) -> Self {
        self.page = Some(Point::new(x, y));
        self
    }

    /// Whether [`HostEvent::prevent_default`] was called.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl HostEvent for SyntheticEvent {
    type Target = String;

    fn touch_count(&self) -> usize {
        self.touches.len()
    }

    fn touch(&self, index: usize) -> Option<Point> {
        self.touches.get(index).copied()
    }

    fn page(&self) -> Option<Point> {
        self.page
    }

    fn client(&self) -> Option<Point> {
        self.client
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.scroll
    }

    fn target(&self) -> Option<String> {
        self.target.clone()
    }

    fn src_element(&self) -> Option<String> {
        self.src_element.clone()
    }

    fn time_stamp(&self) -> f64 {
        self.time_stamp
    }

    fn scale(&self) -> Option<f32> {
        self.scale
    }

    fn rotation(&self) -> Option<f32> {
        self.rotation
    }

    fn wheel_distance(&self) -> Option<f32> {
        self.wheel_distance
    }

    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_prefers_first_touch() {
        let event = SyntheticEvent::touches(&[Point::new(10.0, 20.0), Point::new(30.0, 40.0)])
            .with_page(99.0, 99.0);
        assert_eq!(read_coordinates(&event), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_read_page_without_touches() {
        let event = SyntheticEvent::at(15.0, 25.0);
        assert_eq!(read_coordinates(&event), Point::new(15.0, 25.0));
    }

    #[test]
    fn test_read_empty_touch_list_falls_through() {
        let event = SyntheticEvent::touches(&[]).with_page(5.0, 6.0);
        assert_eq!(read_coordinates(&event), Point::new(5.0, 6.0));
    }

    #[test]
    fn test_read_client_plus_document_scroll() {
        let scroll = ScrollOffset::new(Point::new(100.0, 200.0), Point::ORIGIN);
        let event = SyntheticEvent::client(10.0, 20.0, scroll);
        assert_eq!(read_coordinates(&event), Point::new(110.0, 220.0));
    }

    #[test]
    fn test_read_client_plus_body_scroll() {
        let scroll = ScrollOffset::new(Point::ORIGIN, Point::new(7.0, 8.0));
        let event = SyntheticEvent::client(10.0, 20.0, scroll);
        assert_eq!(read_coordinates(&event), Point::new(17.0, 28.0));
    }

    #[test]
    fn test_read_nonconforming_event_is_scroll_only() {
        let event = SyntheticEvent {
            scroll: ScrollOffset::new(Point::new(3.0, 4.0), Point::ORIGIN),
            ..SyntheticEvent::default()
        };
        assert_eq!(read_coordinates(&event), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_resolve_target_falls_back_to_src_element() {
        let event = SyntheticEvent::at(0.0, 0.0).with_src_element("legacy");
        assert_eq!(resolve_target(&event), Some("legacy".to_string()));

        let event = event.with_target("modern");
        assert_eq!(resolve_target(&event), Some("modern".to_string()));
    }

    #[test]
    fn test_prevent_default_is_recorded() {
        let event = SyntheticEvent::at(0.0, 0.0);
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }
}
