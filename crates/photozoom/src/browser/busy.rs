//! Busy spinner shown while the popup image loads.

use super::error::OverlayError;
use web_sys::{Document, Element, HtmlElement};

/// Class list of the spinner element.
pub fn spinner_class(fixed: bool) -> &'static str {
    if fixed {
        "photozoom-busy photozoom-busy-fixed photozoom-busy-active"
    } else {
        "photozoom-busy photozoom-busy-active"
    }
}

/// A spinner appended to a container while shown.
#[derive(Debug)]
pub struct Busy {
    document: Document,
    container: HtmlElement,
    fixed: bool,
    spinner: Option<Element>,
}

impl Busy {
    /// A hidden spinner for `container`. The fixed variant is used when the
    /// container is the document body.
    pub fn new(document: Document, container: HtmlElement, fixed: bool) -> Self {
        Self {
            document,
            container,
            fixed,
            spinner: None,
        }
    }

    /// Whether the spinner is on screen.
    pub fn is_shown(&self) -> bool {
        self.spinner.is_some()
    }

    /// Append the spinner. Showing twice keeps a single spinner.
    pub fn show(&mut self) -> Result<(), OverlayError> {
        if self.spinner.is_some() {
            return Ok(());
        }
        let spinner = self
            .document
            .create_element("div")
            .map_err(|e| OverlayError::element("div", format!("{e:?}")))?;
        spinner.set_class_name(spinner_class(self.fixed));
        self.container
            .append_child(&spinner)
            .map_err(|e| OverlayError::element("div", format!("{e:?}")))?;
        self.spinner = Some(spinner);
        Ok(())
    }

    /// Remove the spinner if present.
    pub fn hide(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.remove();
        }
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn busy() -> (Busy, HtmlElement) {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();
        (Busy::new(document, body.clone(), true), body)
    }

    #[wasm_bindgen_test]
    fn test_show_then_hide() {
        let (mut busy, body) = busy();
        busy.show().unwrap();
        busy.show().unwrap();
        assert_eq!(body.get_elements_by_class_name("photozoom-busy").length(), 1);
        assert!(busy.is_shown());
        busy.hide();
        busy.hide();
        assert_eq!(body.get_elements_by_class_name("photozoom-busy").length(), 0);
    }

    #[wasm_bindgen_test]
    fn test_fixed_class() {
        assert!(spinner_class(true).contains("photozoom-busy-fixed"));
        assert!(!spinner_class(false).contains("photozoom-busy-fixed"));
    }
}
