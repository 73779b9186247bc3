//! Image fitting, resizer and size-service URLs, and size-service replies.

use crate::geometry::Size;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// How the popup image is fitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageFit {
    /// Image is taller than the popup: full height, requested at this height.
    ByHeight(f32),
    /// Image is wider than the popup: full width, requested at this width.
    ByWidth(f32),
}

impl ImageFit {
    /// Fit an image of `aspect` (height over width) into `popup`, requesting
    /// `zoom` times the popup dimension from the resizer.
    pub fn choose(aspect: f32, popup: Size, zoom: f32) -> Self {
        if aspect > popup.height / popup.width {
            Self::ByHeight(popup.height * zoom)
        } else {
            Self::ByWidth(popup.width * zoom)
        }
    }

    /// `(width, height)` attribute values for the `img` element.
    pub fn attributes(&self) -> (Option<&'static str>, Option<&'static str>) {
        match self {
            Self::ByHeight(_) => (None, Some("100%")),
            Self::ByWidth(_) => (Some("100%"), None),
        }
    }
}

/// The resizer's size query, `height=<px>` or `width=<px>`.
impl fmt::Display for ImageFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByHeight(px) => write!(f, "height={px}"),
            Self::ByWidth(px) => write!(f, "width={px}"),
        }
    }
}

/// Image URL as served by the resizer template. An empty template serves the
/// raw URL.
pub fn slice_url(template: &str, src: &str, fit: ImageFit) -> String {
    if template.is_empty() {
        return src.to_string();
    }
    template
        .replacen("{src}", src, 1)
        .replacen("{size}", &fit.to_string(), 1)
}

/// Size-service URL for an image.
pub fn sizer_url(template: &str, src: &str) -> String {
    template.replace("{src}", src)
}

/// Failure to read a size-service reply.
#[derive(Debug, Error)]
pub enum SizeError {
    /// The reply was not the expected JSON.
    #[error("malformed size reply: {0}")]
    Json(#[from] serde_json::Error),

    /// The reply listed no dimension for an axis.
    #[error("size reply has no {axis} dimension")]
    Missing {
        /// `"x"` or `"y"`.
        axis: &'static str,
    },

    /// The dimensions do not make a usable aspect ratio.
    #[error("size reply {width}x{height} has no usable aspect")]
    Degenerate {
        /// Reported width.
        width: f32,
        /// Reported height.
        height: f32,
    },
}

/// Reply of the size service: widths under `x`, heights under `y`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SizeReply {
    /// Widths, first one is the original.
    pub x: Vec<f32>,
    /// Heights, first one is the original.
    pub y: Vec<f32>,
}

impl SizeReply {
    /// Parse a reply body.
    pub fn parse(body: &str) -> Result<Self, SizeError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Original dimensions.
    pub fn size(&self) -> Result<Size, SizeError> {
        let width = *self.x.first().ok_or(SizeError::Missing { axis: "x" })?;
        let height = *self.y.first().ok_or(SizeError::Missing { axis: "y" })?;
        Ok(Size::new(width, height))
    }

    /// Height over width of the original.
    pub fn aspect(&self) -> Result<f32, SizeError> {
        let size = self.size()?;
        size.aspect().ok_or(SizeError::Degenerate {
            width: size.width,
            height: size.height,
        })
    }
}

/// Parse a reply body straight to an aspect ratio.
pub fn parse_aspect(body: &str) -> Result<f32, SizeError> {
    SizeReply::parse(body)?.aspect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tall_image_fits_by_height() {
        let fit = ImageFit::choose(2.0, Size::new(800.0, 600.0), 1.0);
        assert_eq!(fit, ImageFit::ByHeight(600.0));
        assert_eq!(fit.to_string(), "height=600");
        assert_eq!(fit.attributes(), (None, Some("100%")));
    }

    #[test]
    fn test_wide_image_fits_by_width_with_zoom() {
        let fit = ImageFit::choose(0.5, Size::new(800.0, 600.0), 2.0);
        assert_eq!(fit, ImageFit::ByWidth(1600.0));
        assert_eq!(fit.to_string(), "width=1600");
    }

    #[test]
    fn test_equal_aspect_fits_by_width() {
        let fit = ImageFit::choose(0.75, Size::new(800.0, 600.0), 1.0);
        assert_eq!(fit, ImageFit::ByWidth(800.0));
    }

    #[test]
    fn test_slice_url_template() {
        let url = slice_url(
            "/resize?src={src}&{size}",
            "photos/a.jpg",
            ImageFit::ByWidth(800.0),
        );
        assert_eq!(url, "/resize?src=photos/a.jpg&width=800");
    }

    #[test]
    fn test_slice_url_defaults() {
        let fit = ImageFit::ByWidth(800.0);
        assert_eq!(slice_url("{src}", "a.jpg", fit), "a.jpg");
        assert_eq!(slice_url("", "a.jpg", fit), "a.jpg");
    }

    #[test]
    fn test_sizer_url_replaces_every_src() {
        assert_eq!(
            sizer_url("/size?src={src}&ref={src}", "a.jpg"),
            "/size?src=a.jpg&ref=a.jpg"
        );
    }

    #[test]
    fn test_parse_aspect() {
        let aspect = parse_aspect(r#"{"x":[1600,800],"y":[1200,600]}"#).unwrap();
        assert!((aspect - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_aspect("not json"), Err(SizeError::Json(_))));
        assert!(matches!(
            parse_aspect(r#"{"x":[],"y":[600]}"#),
            Err(SizeError::Missing { axis: "x" })
        ));
        let err = parse_aspect(r#"{"x":[0],"y":[600]}"#).unwrap_err();
        assert!(matches!(err, SizeError::Degenerate { .. }));
        assert!(err.to_string().contains("0x600"));
    }
}
