//! Size-service lookup for thumbnails without a known aspect ratio.

use super::error::{AttachError, OverlayError};
use photozoom_core::image::parse_aspect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch `url` and read the aspect ratio (height over width) from its reply.
pub async fn fetch_aspect(url: &str) -> Result<f32, OverlayError> {
    let window = web_sys::window().ok_or(AttachError::NoWindow)?;
    let failed = |e: JsValue| OverlayError::Fetch {
        url: url.to_string(),
        message: format!("{e:?}"),
    };

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(failed)?
        .dyn_into()
        .map_err(failed)?;
    if !response.ok() {
        return Err(OverlayError::Fetch {
            url: url.to_string(),
            message: format!("HTTP {}", response.status()),
        });
    }

    let body = JsFuture::from(response.text().map_err(failed)?)
        .await
        .map_err(failed)?
        .as_string()
        .ok_or_else(|| OverlayError::Fetch {
            url: url.to_string(),
            message: "reply is not text".to_string(),
        })?;
    Ok(parse_aspect(&body)?)
}
