//! Scan result model
//!
//! The aggregate OCR output for one label image: nutrient rows carrying up to
//! two candidate values (one per potential column), optional column headers,
//! and the bounds of the nutrition panel.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::attribute::Attribute;
use super::geometry::Rect;
use super::text::RecognizedText;
use super::unit::NutrientUnit;

/// Which of a label's two value columns to read
///
/// Two-valued by construction; only the host boundary deals in raw indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    One,
    Two,
}

impl Column {
    /// Parse a 1-based column index
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Column::One),
            2 => Some(Column::Two),
            _ => None,
        }
    }

    /// 1-based index as presented to the host
    pub fn index(&self) -> u8 {
        match self {
            Column::One => 1,
            Column::Two => 2,
        }
    }

    /// The opposite column
    pub fn other(&self) -> Self {
        match self {
            Column::One => Column::Two,
            Column::Two => Column::One,
        }
    }
}

/// A numeric value as read off a label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FoodLabelValue {
    pub amount: f64,
    /// Detected unit; None when OCR found a bare number
    pub unit: Option<NutrientUnit>,
}

impl FoodLabelValue {
    pub fn new(amount: f64, unit: Option<NutrientUnit>) -> Self {
        Self { amount, unit }
    }
}

/// A detected value together with the text it was read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ValueText {
    pub value: FoodLabelValue,
    pub text: RecognizedText,
}

/// One attribute row of a scanned label
///
/// Carries up to two candidate values, one per potential column. A row with
/// no value on either column is "attribute-only" and may be OCR noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct NutrientRow {
    pub attribute: Attribute,
    /// The text the attribute name was recognized from, when matched
    pub attribute_text: Option<RecognizedText>,
    /// Candidate value in column 1
    pub value1: Option<ValueText>,
    /// Candidate value in column 2
    pub value2: Option<ValueText>,
}

impl NutrientRow {
    /// The candidate value for a column, if detected
    pub fn value_for(&self, column: Column) -> Option<&ValueText> {
        match column {
            Column::One => self.value1.as_ref(),
            Column::Two => self.value2.as_ref(),
        }
    }

    /// Whether either column holds a value
    pub fn has_value(&self) -> bool {
        self.value1.is_some() || self.value2.is_some()
    }

    /// Vertical anchor of this row on the label, from its attribute text
    pub fn min_y(&self) -> Option<f64> {
        self.attribute_text.as_ref().map(|t| t.rect.min_y())
    }
}

/// The aggregate OCR result for one scanned label image
///
/// Produced once per image by the external vision pipeline and immutable
/// thereafter; extraction is a pure function of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ScanResult {
    pub rows: Vec<NutrientRow>,
    /// Header text above column 1 (e.g. "Per 100g"), when detected
    #[serde(default)]
    pub header1: Option<RecognizedText>,
    /// Header text above column 2 (e.g. "Per Serving"), when detected
    #[serde(default)]
    pub header2: Option<RecognizedText>,
    /// Bounds of the nutrition panel, when the vision pipeline supplies them
    #[serde(default)]
    pub panel_box: Option<Rect>,
    /// ISO 8601 timestamp of the scan, when supplied
    #[serde(default)]
    pub scanned_at: Option<String>,
}

impl ScanResult {
    /// Bounds of the nutrition panel
    ///
    /// The supplied box wins; otherwise the union of the boxes of rows that
    /// carry at least one value (attribute text and value texts). None when
    /// no row has a value, in which case no noise filtering is possible.
    pub fn panel_bounds(&self) -> Option<Rect> {
        if let Some(rect) = self.panel_box {
            return Some(rect);
        }

        let mut bounds: Option<Rect> = None;
        let mut grow = |rect: &Rect| {
            bounds = Some(match bounds {
                Some(b) => b.union(rect),
                None => *rect,
            });
        };

        for row in self.rows.iter().filter(|r| r.has_value()) {
            if let Some(text) = &row.attribute_text {
                grow(&text.rect);
            }
            if let Some(vt) = &row.value1 {
                grow(&vt.text.rect);
            }
            if let Some(vt) = &row.value2 {
                grow(&vt.text.rect);
            }
        }
        bounds
    }

    /// Header text for a column, when detected
    pub fn header_for(&self, column: Column) -> Option<&RecognizedText> {
        match column {
            Column::One => self.header1.as_ref(),
            Column::Two => self.header2.as_ref(),
        }
    }
}
