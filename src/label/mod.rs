//! Label data model
//!
//! Rust structs for OCR scan results and extracted nutrients.

mod attribute;
mod geometry;
mod nutrient;
mod scan;
mod text;
mod unit;

pub use attribute::{Attribute, AttributeGroup};
pub use geometry::Rect;
pub use nutrient::{ExtractedColumn, ExtractedNutrient};
pub use scan::{Column, FoodLabelValue, NutrientRow, ScanResult, ValueText};
pub use text::RecognizedText;
pub use unit::NutrientUnit;

use thiserror::Error;

/// Errors parsing untrusted host inputs into label types
///
/// The extraction core itself has no error path; these arise only at the
/// boundary where raw indexes and names come in.
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("Invalid column index {0}: must be 1 or 2")]
    InvalidColumn(u8),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

/// Result type for boundary parsing
pub type LabelResult<T> = Result<T, LabelError>;
