//! Recognized text model
//!
//! One OCR-detected text line with its position on the label image.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// A line of OCR text and the box it was read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RecognizedText {
    pub text: String,
    pub rect: Rect,
}

impl RecognizedText {
    pub fn new(text: impl Into<String>, rect: Rect) -> Self {
        Self {
            text: text.into(),
            rect,
        }
    }
}
