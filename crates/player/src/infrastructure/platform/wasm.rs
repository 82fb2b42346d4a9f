//! WASM display target
//!
//! Writes the readout into a DOM element's inner HTML.

use thiserror::Error;

use crate::ports::outbound::DisplayTarget;

/// Failure to locate the readout element
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("No browser document available")]
    NoDocument,
    #[error("No element with id '{0}'")]
    ElementNotFound(String),
}

/// A DOM element showing the readout
#[derive(Debug, Clone)]
pub struct ElementTarget {
    element: web_sys::Element,
}

impl ElementTarget {
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }

    /// Looks up the element by id in the current document.
    pub fn by_id(id: &str) -> Result<Self, TargetError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(TargetError::NoDocument)?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| TargetError::ElementNotFound(id.to_string()))?;
        tracing::debug!(id, "Found readout element");
        Ok(Self::new(element))
    }
}

impl DisplayTarget for ElementTarget {
    fn set_content(&mut self, content: &str) {
        self.element.set_inner_html(content);
    }
}
