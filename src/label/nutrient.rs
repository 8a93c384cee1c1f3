//! Extracted nutrient model
//!
//! The normalized output records derived from a scan.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::attribute::Attribute;
use super::scan::FoodLabelValue;
use super::text::RecognizedText;

/// One normalized nutrient entry derived from OCR text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ExtractedNutrient {
    pub attribute: Attribute,
    /// Normalized value; None when OCR found the row but no usable number
    pub value: Option<FoodLabelValue>,
    /// The text the value was read from, when one was detected
    pub value_text: Option<RecognizedText>,
    /// Whether the user has confirmed this entry; always false on extraction
    pub confirmed: bool,
}

impl ExtractedNutrient {
    /// Placeholder entry for an attribute with no detected value
    pub fn empty(attribute: Attribute) -> Self {
        Self {
            attribute,
            value: None,
            value_text: None,
            confirmed: false,
        }
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

/// A named column of extracted nutrients, in label order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ExtractedColumn {
    /// 1-based column index
    pub column: u8,
    /// Header text above the column (e.g. "Per 100g"), when the scan had one
    pub name: Option<String>,
    pub nutrients: Vec<ExtractedNutrient>,
}
