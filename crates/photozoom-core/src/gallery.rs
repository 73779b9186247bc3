//! Navigation between the images of one overlay.

/// Direction of a slide between images, named after the swipe that causes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Swipe left: advance to the next image.
    Left,
    /// Swipe right: go back to the previous image.
    Right,
}

impl SlideDirection {
    /// Gallery step.
    pub const fn step(self) -> isize {
        match self {
            Self::Left => 1,
            Self::Right => -1,
        }
    }

    /// CSS `left` the outgoing image moves to.
    pub const fn outgoing(self) -> &'static str {
        match self {
            Self::Left => "-100%",
            Self::Right => "100%",
        }
    }

    /// CSS `left` the incoming image starts from.
    pub const fn incoming(self) -> &'static str {
        match self {
            Self::Left => "100%",
            Self::Right => "-100%",
        }
    }
}

/// Position within an ordered set of thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    current: usize,
}

impl Gallery {
    /// A gallery of `len` images showing `current`. `current` is clamped to the
    /// last index.
    pub fn new(len: usize, current: usize) -> Self {
        Self {
            len,
            current: current.min(len.saturating_sub(1)),
        }
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the gallery has no images.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the image on display.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether sliding to another image is possible.
    pub fn can_slide(&self) -> bool {
        self.len > 1
    }

    /// Index `offset` away from the current one. Stepping past the last image
    /// lands on the first, stepping before the first lands on the last.
    pub fn peek(&self, offset: isize) -> usize {
        if self.len == 0 {
            return 0;
        }
        match self.current.checked_add_signed(offset) {
            None => self.len - 1,
            Some(index) if index >= self.len => 0,
            Some(index) => index,
        }
    }

    /// Move `offset` images and return the new index.
    pub fn step(&mut self, offset: isize) -> usize {
        self.current = self.peek(offset);
        self.current
    }

    /// Slide in `direction`; `None` when the gallery has a single image.
    pub fn slide(&mut self, direction: SlideDirection) -> Option<usize> {
        self.can_slide().then(|| self.step(direction.step()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_step_wraps_both_ends() {
        let mut gallery = Gallery::new(3, 2);
        assert_eq!(gallery.step(1), 0);
        assert_eq!(gallery.step(-1), 2);
        assert_eq!(gallery.step(-1), 1);
    }

    #[test]
    fn test_slide_directions() {
        let mut gallery = Gallery::new(4, 1);
        assert_eq!(gallery.slide(SlideDirection::Left), Some(2));
        assert_eq!(gallery.slide(SlideDirection::Right), Some(1));
        assert_eq!(SlideDirection::Left.incoming(), "100%");
        assert_eq!(SlideDirection::Left.outgoing(), "-100%");
        assert_eq!(SlideDirection::Right.incoming(), "-100%");
        assert_eq!(SlideDirection::Right.outgoing(), "100%");
    }

    #[test]
    fn test_single_image_never_slides() {
        let mut gallery = Gallery::new(1, 0);
        assert_eq!(gallery.slide(SlideDirection::Left), None);
        assert_eq!(gallery.current(), 0);
    }

    #[test]
    fn test_empty_gallery() {
        let gallery = Gallery::new(0, 5);
        assert!(gallery.is_empty());
        assert_eq!(gallery.current(), 0);
        assert_eq!(gallery.peek(1), 0);
    }

    proptest! {
        #[test]
        fn prop_unit_steps_stay_in_range(
            len in 1usize..20,
            start in 0usize..20,
            steps in prop::collection::vec(prop::bool::ANY, 0..50),
        ) {
            let mut gallery = Gallery::new(len, start);
            for forward in steps {
                let index = gallery.step(if forward { 1 } else { -1 });
                prop_assert!(index < len);
            }
        }

        #[test]
        fn prop_forward_then_back_returns(len in 2usize..20, start in 0usize..20) {
            let mut gallery = Gallery::new(len, start);
            let before = gallery.current();
            gallery.slide(SlideDirection::Left);
            gallery.slide(SlideDirection::Right);
            prop_assert_eq!(gallery.current(), before);
        }
    }
}
