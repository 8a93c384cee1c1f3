//! Column selection
//!
//! Picks which of a label's two value columns a caller most likely wants.

use crate::label::{Column, ScanResult};

/// Choose the most likely primary column of a scan
///
/// Policy: the column with more populated nutrient rows wins; a tie breaks
/// toward the column whose comparable values sum larger (energy normalized
/// to kcal, mass to grams; percent and IU values do not participate); a
/// full tie selects column one.
pub fn best_column(scan: &ScanResult) -> Column {
    let populated1 = populated_count(scan, Column::One);
    let populated2 = populated_count(scan, Column::Two);
    if populated1 != populated2 {
        return if populated1 > populated2 {
            Column::One
        } else {
            Column::Two
        };
    }

    if magnitude(scan, Column::Two) > magnitude(scan, Column::One) {
        Column::Two
    } else {
        Column::One
    }
}

/// Number of rows carrying a value in the given column
pub fn populated_count(scan: &ScanResult, column: Column) -> usize {
    scan.rows
        .iter()
        .filter(|row| row.value_for(column).is_some())
        .count()
}

/// Sum of a column's values in comparable units
fn magnitude(scan: &ScanResult, column: Column) -> f64 {
    scan.rows
        .iter()
        .filter_map(|row| row.value_for(column))
        .filter_map(|vt| {
            let unit = vt.value.unit?;
            let scale = unit.grams_scale().or_else(|| unit.kcal_scale())?;
            Some(vt.value.amount * scale)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{
        Attribute, FoodLabelValue, NutrientRow, NutrientUnit, Rect, RecognizedText, ValueText,
    };

    fn vt(amount: f64, unit: Option<NutrientUnit>) -> ValueText {
        ValueText {
            value: FoodLabelValue::new(amount, unit),
            text: RecognizedText::new("v", Rect::new(0.4, 0.1, 0.1, 0.03)),
        }
    }

    fn row(
        attribute: Attribute,
        value1: Option<ValueText>,
        value2: Option<ValueText>,
    ) -> NutrientRow {
        NutrientRow {
            attribute,
            attribute_text: Some(RecognizedText::new("a", Rect::new(0.1, 0.1, 0.2, 0.03))),
            value1,
            value2,
        }
    }

    fn scan(rows: Vec<NutrientRow>) -> ScanResult {
        ScanResult {
            rows,
            header1: None,
            header2: None,
            panel_box: None,
            scanned_at: None,
        }
    }

    #[test]
    fn test_more_populated_column_wins() {
        let s = scan(vec![
            row(
                Attribute::Energy,
                None,
                Some(vt(100.0, Some(NutrientUnit::Kcal))),
            ),
            row(
                Attribute::Fat,
                Some(vt(10.0, Some(NutrientUnit::G))),
                Some(vt(5.0, Some(NutrientUnit::G))),
            ),
            row(
                Attribute::Protein,
                None,
                Some(vt(3.0, Some(NutrientUnit::G))),
            ),
        ]);
        assert_eq!(best_column(&s), Column::Two);
    }

    #[test]
    fn test_tie_breaks_on_larger_values() {
        // per-100g column carries the larger numbers
        let s = scan(vec![
            row(
                Attribute::Fat,
                Some(vt(5.0, Some(NutrientUnit::G))),
                Some(vt(20.0, Some(NutrientUnit::G))),
            ),
            row(
                Attribute::Protein,
                Some(vt(2.0, Some(NutrientUnit::G))),
                Some(vt(8.0, Some(NutrientUnit::G))),
            ),
        ]);
        assert_eq!(best_column(&s), Column::Two);
    }

    #[test]
    fn test_full_tie_selects_column_one() {
        let s = scan(vec![row(
            Attribute::Fat,
            Some(vt(10.0, Some(NutrientUnit::G))),
            Some(vt(10.0, Some(NutrientUnit::G))),
        )]);
        assert_eq!(best_column(&s), Column::One);
    }

    #[test]
    fn test_empty_scan_selects_column_one() {
        assert_eq!(best_column(&scan(vec![])), Column::One);
    }

    #[test]
    fn test_percent_values_do_not_tip_the_tie() {
        let s = scan(vec![
            row(
                Attribute::Fat,
                Some(vt(10.0, Some(NutrientUnit::G))),
                Some(vt(2.0, Some(NutrientUnit::G))),
            ),
            row(
                Attribute::Calcium,
                Some(vt(1.0, Some(NutrientUnit::Percent))),
                Some(vt(90.0, Some(NutrientUnit::Percent))),
            ),
        ]);
        assert_eq!(best_column(&s), Column::One);
    }

    #[test]
    fn test_populated_count() {
        let s = scan(vec![
            row(Attribute::Fat, Some(vt(1.0, Some(NutrientUnit::G))), None),
            row(Attribute::Protein, None, None),
        ]);
        assert_eq!(populated_count(&s, Column::One), 1);
        assert_eq!(populated_count(&s, Column::Two), 0);
    }
}
