//! Error types for the browser runtime.

use photozoom_core::SizeError;
use thiserror::Error;

/// Failure to attach gesture listeners to a surface.
#[derive(Debug, Error)]
pub enum AttachError {
    /// No global `window`.
    #[error("No window")]
    NoWindow,

    /// The window has no document.
    #[error("No document")]
    NoDocument,

    /// The document has no body.
    #[error("No document body")]
    NoBody,

    /// Settings JSON did not parse.
    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// The browser refused a listener.
    #[error("Cannot listen to '{event}': {message}")]
    Listener {
        /// DOM event name.
        event: &'static str,
        /// Browser-reported reason.
        message: String,
    },
}

/// Failure of the zoom overlay.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// Listener setup failed.
    #[error(transparent)]
    Attach(#[from] AttachError),

    /// A selector was rejected or matched nothing usable.
    #[error("Invalid selector '{selector}': {message}")]
    Selector {
        /// The selector as given.
        selector: String,
        /// What went wrong.
        message: String,
    },

    /// Creating or inserting an element failed.
    #[error("Cannot create <{tag}>: {message}")]
    Element {
        /// Tag name.
        tag: &'static str,
        /// Browser-reported reason.
        message: String,
    },

    /// The size service could not be reached.
    #[error("Size lookup failed for '{url}': {message}")]
    Fetch {
        /// Requested URL.
        url: String,
        /// Browser-reported reason.
        message: String,
    },

    /// The size service answered something unusable.
    #[error(transparent)]
    Size(#[from] SizeError),
}

impl OverlayError {
    /// Create a selector error.
    pub fn selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Create an element error.
    pub fn element(tag: &'static str, message: impl Into<String>) -> Self {
        Self::Element {
            tag,
            message: message.into(),
        }
    }
}
