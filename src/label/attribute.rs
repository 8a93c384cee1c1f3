//! Nutrient attribute table
//!
//! The label fields FLX knows how to extract, with the static metadata
//! driving unit normalization: group tag, default unit, and supported units.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::unit::NutrientUnit;

/// Group tag for an attribute
///
/// Percentage units are legal only for mineral and vitamin attributes; the
/// group carries that rule so it stays metadata rather than per-attribute
/// special cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttributeGroup {
    Energy,
    Macro,
    Lipid,
    Fiber,
    Sugar,
    Mineral,
    Vitamin,
}

impl AttributeGroup {
    /// Whether values in this group may carry a percentage unit
    pub fn allows_percent(&self) -> bool {
        matches!(self, AttributeGroup::Mineral | AttributeGroup::Vitamin)
    }
}

/// A nutrient or label field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Energy,
    Protein,
    Carbohydrate,
    Fat,
    SaturatedFat,
    TransFat,
    MonounsaturatedFat,
    PolyunsaturatedFat,
    Cholesterol,
    DietaryFiber,
    Sugar,
    AddedSugar,
    Sodium,
    Salt,
    Calcium,
    Iron,
    Potassium,
    Magnesium,
    Zinc,
    VitaminA,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminB6,
    VitaminB12,
    Folate,
}

impl Attribute {
    /// All known attributes, in label-conventional order
    pub const ALL: [Attribute; 26] = [
        Attribute::Energy,
        Attribute::Fat,
        Attribute::SaturatedFat,
        Attribute::TransFat,
        Attribute::MonounsaturatedFat,
        Attribute::PolyunsaturatedFat,
        Attribute::Cholesterol,
        Attribute::Sodium,
        Attribute::Salt,
        Attribute::Carbohydrate,
        Attribute::DietaryFiber,
        Attribute::Sugar,
        Attribute::AddedSugar,
        Attribute::Protein,
        Attribute::Calcium,
        Attribute::Iron,
        Attribute::Potassium,
        Attribute::Magnesium,
        Attribute::Zinc,
        Attribute::VitaminA,
        Attribute::VitaminC,
        Attribute::VitaminD,
        Attribute::VitaminE,
        Attribute::VitaminB6,
        Attribute::VitaminB12,
        Attribute::Folate,
    ];

    /// The three core macros every extracted column must represent
    pub const MACROS: [Attribute; 3] = [
        Attribute::Carbohydrate,
        Attribute::Fat,
        Attribute::Protein,
    ];

    /// Group tag for this attribute
    pub fn group(&self) -> AttributeGroup {
        match self {
            Attribute::Energy => AttributeGroup::Energy,
            Attribute::Protein | Attribute::Carbohydrate | Attribute::Fat => AttributeGroup::Macro,
            Attribute::SaturatedFat
            | Attribute::TransFat
            | Attribute::MonounsaturatedFat
            | Attribute::PolyunsaturatedFat
            | Attribute::Cholesterol => AttributeGroup::Lipid,
            Attribute::DietaryFiber => AttributeGroup::Fiber,
            Attribute::Sugar | Attribute::AddedSugar => AttributeGroup::Sugar,
            Attribute::Sodium
            | Attribute::Salt
            | Attribute::Calcium
            | Attribute::Iron
            | Attribute::Potassium
            | Attribute::Magnesium
            | Attribute::Zinc => AttributeGroup::Mineral,
            Attribute::VitaminA
            | Attribute::VitaminC
            | Attribute::VitaminD
            | Attribute::VitaminE
            | Attribute::VitaminB6
            | Attribute::VitaminB12
            | Attribute::Folate => AttributeGroup::Vitamin,
        }
    }

    /// Unit assumed when OCR found none or found one this attribute cannot carry
    pub fn default_unit(&self) -> NutrientUnit {
        match self {
            Attribute::Energy => NutrientUnit::Kcal,
            Attribute::Protein
            | Attribute::Carbohydrate
            | Attribute::Fat
            | Attribute::SaturatedFat
            | Attribute::TransFat
            | Attribute::MonounsaturatedFat
            | Attribute::PolyunsaturatedFat
            | Attribute::DietaryFiber
            | Attribute::Sugar
            | Attribute::AddedSugar
            | Attribute::Salt => NutrientUnit::G,
            Attribute::Cholesterol
            | Attribute::Sodium
            | Attribute::Calcium
            | Attribute::Iron
            | Attribute::Potassium
            | Attribute::Magnesium
            | Attribute::Zinc
            | Attribute::VitaminC
            | Attribute::VitaminE
            | Attribute::VitaminB6 => NutrientUnit::Mg,
            Attribute::VitaminA
            | Attribute::VitaminD
            | Attribute::VitaminB12
            | Attribute::Folate => NutrientUnit::Mcg,
        }
    }

    /// Units this attribute can carry, before the group-level percent rule
    pub fn base_units(&self) -> &'static [NutrientUnit] {
        match self {
            Attribute::Energy => &[NutrientUnit::Kcal, NutrientUnit::Kj],
            Attribute::Protein
            | Attribute::Carbohydrate
            | Attribute::Fat
            | Attribute::SaturatedFat
            | Attribute::TransFat
            | Attribute::MonounsaturatedFat
            | Attribute::PolyunsaturatedFat
            | Attribute::DietaryFiber
            | Attribute::Sugar
            | Attribute::AddedSugar => &[NutrientUnit::G],
            Attribute::Salt => &[NutrientUnit::G, NutrientUnit::Mg],
            Attribute::Cholesterol
            | Attribute::Sodium
            | Attribute::Calcium
            | Attribute::Potassium
            | Attribute::Magnesium => &[NutrientUnit::Mg, NutrientUnit::G],
            Attribute::Iron | Attribute::Zinc | Attribute::VitaminC | Attribute::VitaminB6 => {
                &[NutrientUnit::Mg, NutrientUnit::Mcg]
            }
            Attribute::VitaminE => &[NutrientUnit::Mg, NutrientUnit::Iu],
            Attribute::VitaminA | Attribute::VitaminD => &[NutrientUnit::Mcg, NutrientUnit::Iu],
            Attribute::VitaminB12 | Attribute::Folate => &[NutrientUnit::Mcg, NutrientUnit::Mg],
        }
    }

    /// Whether a detected unit is legal for this attribute
    ///
    /// Percent is accepted on top of the base units when the group allows it.
    pub fn supports_unit(&self, unit: NutrientUnit) -> bool {
        if self.base_units().contains(&unit) {
            return true;
        }
        unit == NutrientUnit::Percent && self.group().allows_percent()
    }

    /// Whether this is one of the three core macros
    pub fn is_macro(&self) -> bool {
        Self::MACROS.contains(self)
    }

    /// Canonical snake_case name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Energy => "energy",
            Attribute::Protein => "protein",
            Attribute::Carbohydrate => "carbohydrate",
            Attribute::Fat => "fat",
            Attribute::SaturatedFat => "saturated_fat",
            Attribute::TransFat => "trans_fat",
            Attribute::MonounsaturatedFat => "monounsaturated_fat",
            Attribute::PolyunsaturatedFat => "polyunsaturated_fat",
            Attribute::Cholesterol => "cholesterol",
            Attribute::DietaryFiber => "dietary_fiber",
            Attribute::Sugar => "sugar",
            Attribute::AddedSugar => "added_sugar",
            Attribute::Sodium => "sodium",
            Attribute::Salt => "salt",
            Attribute::Calcium => "calcium",
            Attribute::Iron => "iron",
            Attribute::Potassium => "potassium",
            Attribute::Magnesium => "magnesium",
            Attribute::Zinc => "zinc",
            Attribute::VitaminA => "vitamin_a",
            Attribute::VitaminC => "vitamin_c",
            Attribute::VitaminD => "vitamin_d",
            Attribute::VitaminE => "vitamin_e",
            Attribute::VitaminB6 => "vitamin_b6",
            Attribute::VitaminB12 => "vitamin_b12",
            Attribute::Folate => "folate",
        }
    }

    /// Parse an attribute name, accepting common label spellings
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        match lower.trim() {
            "energy" | "calories" => Some(Attribute::Energy),
            "protein" => Some(Attribute::Protein),
            "carbohydrate" | "carbohydrates" | "carbs" | "total_carbohydrate" => {
                Some(Attribute::Carbohydrate)
            }
            "fat" | "total_fat" => Some(Attribute::Fat),
            "saturated_fat" | "saturated" => Some(Attribute::SaturatedFat),
            "trans_fat" | "trans" => Some(Attribute::TransFat),
            "monounsaturated_fat" | "monounsaturated" => Some(Attribute::MonounsaturatedFat),
            "polyunsaturated_fat" | "polyunsaturated" => Some(Attribute::PolyunsaturatedFat),
            "cholesterol" => Some(Attribute::Cholesterol),
            "dietary_fiber" | "fiber" | "fibre" => Some(Attribute::DietaryFiber),
            "sugar" | "sugars" => Some(Attribute::Sugar),
            "added_sugar" | "added_sugars" => Some(Attribute::AddedSugar),
            "sodium" => Some(Attribute::Sodium),
            "salt" => Some(Attribute::Salt),
            "calcium" => Some(Attribute::Calcium),
            "iron" => Some(Attribute::Iron),
            "potassium" => Some(Attribute::Potassium),
            "magnesium" => Some(Attribute::Magnesium),
            "zinc" => Some(Attribute::Zinc),
            "vitamin_a" => Some(Attribute::VitaminA),
            "vitamin_c" => Some(Attribute::VitaminC),
            "vitamin_d" => Some(Attribute::VitaminD),
            "vitamin_e" => Some(Attribute::VitaminE),
            "vitamin_b6" => Some(Attribute::VitaminB6),
            "vitamin_b12" => Some(Attribute::VitaminB12),
            "folate" | "folic_acid" => Some(Attribute::Folate),
            _ => None,
        }
    }
}
