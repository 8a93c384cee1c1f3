//! Nutrient unit types and conversion constants
//!
//! Units a nutrition label can attach to a value, with scale factors for
//! comparing values across units.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// A unit attached to a nutrient value on a food label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
pub enum NutrientUnit {
    #[serde(rename = "kcal")]
    Kcal,
    #[serde(rename = "kj")]
    Kj,
    #[serde(rename = "g")]
    G,
    #[serde(rename = "mg")]
    Mg,
    #[serde(rename = "mcg")]
    Mcg,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "iu")]
    Iu,
}

// ============================================================================
// Conversion Constants
// ============================================================================

/// Kilocalories per kilojoule
pub const KCAL_PER_KJ: f64 = 1.0 / 4.184;

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per microgram
pub const G_PER_MCG: f64 = 0.000001;

impl NutrientUnit {
    /// Display string as printed on labels
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientUnit::Kcal => "kcal",
            NutrientUnit::Kj => "kJ",
            NutrientUnit::G => "g",
            NutrientUnit::Mg => "mg",
            NutrientUnit::Mcg => "mcg",
            NutrientUnit::Percent => "%",
            NutrientUnit::Iu => "IU",
        }
    }

    /// Parse a unit token as OCR'd from a label
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        match lower.trim() {
            "kcal" | "cal" | "calories" | "kcals" => Some(NutrientUnit::Kcal),
            "kj" | "kilojoules" => Some(NutrientUnit::Kj),
            "g" | "gram" | "grams" => Some(NutrientUnit::G),
            "mg" | "milligram" | "milligrams" => Some(NutrientUnit::Mg),
            "mcg" | "ug" | "µg" | "microgram" | "micrograms" => Some(NutrientUnit::Mcg),
            "%" | "percent" => Some(NutrientUnit::Percent),
            "iu" => Some(NutrientUnit::Iu),
            _ => None,
        }
    }

    /// Whether this is an energy unit (kcal or kJ)
    pub fn is_energy(&self) -> bool {
        matches!(self, NutrientUnit::Kcal | NutrientUnit::Kj)
    }

    /// Scale factor to grams for mass units
    ///
    /// Returns None for energy, percent, and IU.
    pub fn grams_scale(&self) -> Option<f64> {
        match self {
            NutrientUnit::G => Some(1.0),
            NutrientUnit::Mg => Some(G_PER_MG),
            NutrientUnit::Mcg => Some(G_PER_MCG),
            _ => None,
        }
    }

    /// Scale factor to kilocalories for energy units
    ///
    /// Returns None for non-energy units.
    pub fn kcal_scale(&self) -> Option<f64> {
        match self {
            NutrientUnit::Kcal => Some(1.0),
            NutrientUnit::Kj => Some(KCAL_PER_KJ),
            _ => None,
        }
    }
}
