//! Extraction tools
//!
//! Host-facing adapters over the pure extraction core. Raw column indexes
//! and attribute names are parsed here; the core only sees checked types.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::extract;
use crate::label::{
    Attribute, AttributeGroup, Column, ExtractedColumn, FoodLabelValue, LabelError, LabelResult,
    NutrientUnit, ScanResult,
};

/// Response for extract_nutrients
#[derive(Debug, Serialize)]
pub struct ExtractNutrientsResponse {
    pub column: ExtractedColumn,
    pub total: usize,
    pub populated: usize,
}

/// Response for best_column
#[derive(Debug, Serialize)]
pub struct BestColumnResponse {
    pub column: u8,
    pub name: Option<String>,
    pub populated_column_1: usize,
    pub populated_column_2: usize,
}

/// Response for parse_value_text
#[derive(Debug, Serialize)]
pub struct ParseValueTextResponse {
    pub values: Vec<FoodLabelValue>,
    pub total: usize,
}

/// One attribute's metadata for list_attributes
#[derive(Debug, Serialize)]
pub struct AttributeInfo {
    pub attribute: Attribute,
    pub group: AttributeGroup,
    pub default_unit: NutrientUnit,
    pub supported_units: Vec<NutrientUnit>,
    pub is_macro: bool,
}

/// Response for list_attributes
#[derive(Debug, Serialize)]
pub struct ListAttributesResponse {
    pub attributes: Vec<AttributeInfo>,
    pub total: usize,
}

/// Extract one column of a scan as normalized nutrients
///
/// A missing column index defaults to the best column.
pub fn extract_nutrients(
    scan: &ScanResult,
    column_index: Option<u8>,
    ignoring: &[String],
    include_fallback: bool,
) -> LabelResult<ExtractNutrientsResponse> {
    let column = match column_index {
        Some(index) => Column::from_index(index).ok_or(LabelError::InvalidColumn(index))?,
        None => extract::best_column(scan),
    };
    let ignoring = parse_ignoring(ignoring)?;

    let nutrients = extract::extract_column(scan, column, &ignoring, include_fallback);
    let populated = nutrients.iter().filter(|n| n.has_value()).count();
    debug!(
        "extracted {} nutrients ({} populated) from column {}",
        nutrients.len(),
        populated,
        column.index()
    );

    Ok(ExtractNutrientsResponse {
        total: nutrients.len(),
        populated,
        column: ExtractedColumn {
            column: column.index(),
            name: scan.header_for(column).map(|t| t.text.clone()),
            nutrients,
        },
    })
}

/// Report which column of a scan is most likely the one the caller wants
pub fn best_column(scan: &ScanResult) -> BestColumnResponse {
    let column = extract::best_column(scan);
    BestColumnResponse {
        column: column.index(),
        name: scan.header_for(column).map(|t| t.text.clone()),
        populated_column_1: extract::populated_count(scan, Column::One),
        populated_column_2: extract::populated_count(scan, Column::Two),
    }
}

/// Detect food-label values in a raw OCR string
pub fn parse_value_text(text: &str) -> ParseValueTextResponse {
    let values = extract::detect_values(text);
    ParseValueTextResponse {
        total: values.len(),
        values,
    }
}

/// The compiled-in attribute metadata table
pub fn list_attributes() -> ListAttributesResponse {
    let attributes: Vec<AttributeInfo> = Attribute::ALL
        .iter()
        .map(|attr| {
            let mut supported_units: Vec<NutrientUnit> = attr.base_units().to_vec();
            if attr.group().allows_percent() {
                supported_units.push(NutrientUnit::Percent);
            }
            AttributeInfo {
                attribute: *attr,
                group: attr.group(),
                default_unit: attr.default_unit(),
                supported_units,
                is_macro: attr.is_macro(),
            }
        })
        .collect();

    ListAttributesResponse {
        total: attributes.len(),
        attributes,
    }
}

fn parse_ignoring(names: &[String]) -> LabelResult<HashSet<Attribute>> {
    names
        .iter()
        .map(|name| {
            Attribute::from_str(name).ok_or_else(|| LabelError::UnknownAttribute(name.clone()))
        })
        .collect()
}
