//! Column extraction
//!
//! Turns a scan's raw per-row values into one clean, attribute-complete
//! nutrient list for the requested column.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::label::{
    Attribute, Column, ExtractedNutrient, FoodLabelValue, NutrientRow, Rect, ScanResult,
};

/// Extract the nutrient list for one column of a scanned label
///
/// Rows whose attribute is in `ignoring` are suppressed. When
/// `include_fallback` is set, a row missing a value in the requested column
/// borrows the opposite column's value instead of staying empty. Total:
/// malformed or partial rows degrade to "no value" rather than failing.
pub fn extract_column(
    scan: &ScanResult,
    column: Column,
    ignoring: &HashSet<Attribute>,
    include_fallback: bool,
) -> Vec<ExtractedNutrient> {
    let panel = scan.panel_bounds();

    let mut seen: HashSet<Attribute> = HashSet::new();
    let mut entries: Vec<(Option<f64>, ExtractedNutrient)> = Vec::new();

    for row in &scan.rows {
        if ignoring.contains(&row.attribute) {
            continue;
        }
        // first occurrence of an attribute wins, later duplicates are dropped
        if !seen.insert(row.attribute) {
            continue;
        }

        let picked = row.value_for(column).or_else(|| {
            if include_fallback {
                row.value_for(column.other())
            } else {
                None
            }
        });

        let nutrient = match picked {
            Some(vt) => ExtractedNutrient {
                attribute: row.attribute,
                value: Some(normalize_unit(row.attribute, &vt.value)),
                value_text: Some(vt.text.clone()),
                confirmed: false,
            },
            None => {
                // a row with no value anywhere is kept only when its
                // attribute text is anchored inside the nutrition panel;
                // stray detections outside it are OCR noise
                if !row.has_value() && !anchored_to_panel(row, panel.as_ref()) {
                    continue;
                }
                ExtractedNutrient::empty(row.attribute)
            }
        };

        entries.push((row.min_y(), nutrient));
    }

    // top-to-bottom label order; rows without an anchor sort last
    entries.sort_by(|a, b| match (a.0, b.0) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let mut nutrients: Vec<ExtractedNutrient> = entries.into_iter().map(|(_, n)| n).collect();

    // energy always leads the list
    if let Some(pos) = nutrients
        .iter()
        .position(|n| n.attribute == Attribute::Energy)
    {
        let energy = nutrients.remove(pos);
        nutrients.insert(0, energy);
    }

    // the three core macros are always represented
    for attr in Attribute::MACROS {
        if ignoring.contains(&attr) {
            continue;
        }
        if !nutrients.iter().any(|n| n.attribute == attr) {
            nutrients.push(ExtractedNutrient::empty(attr));
        }
    }

    nutrients
}

/// Reset a detected unit the attribute cannot carry to the attribute's default
fn normalize_unit(attribute: Attribute, value: &FoodLabelValue) -> FoodLabelValue {
    let unit = match value.unit {
        Some(unit) if attribute.supports_unit(unit) => unit,
        _ => attribute.default_unit(),
    };
    FoodLabelValue::new(value.amount, Some(unit))
}

fn anchored_to_panel(row: &NutrientRow, panel: Option<&Rect>) -> bool {
    match (&row.attribute_text, panel) {
        (Some(text), Some(panel)) => text.rect.intersects(panel),
        // no panel bounds to test against, keep the row
        (Some(_), None) => true,
        // no anchor ties this attribute to the label at all
        (None, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{NutrientUnit, RecognizedText, ValueText};

    fn txt(y: f64) -> RecognizedText {
        RecognizedText::new("t", Rect::new(0.1, y, 0.2, 0.03))
    }

    fn vt(amount: f64, unit: Option<NutrientUnit>, y: f64) -> ValueText {
        ValueText {
            value: FoodLabelValue::new(amount, unit),
            text: RecognizedText::new("v", Rect::new(0.4, y, 0.1, 0.03)),
        }
    }

    fn row(
        attribute: Attribute,
        y: f64,
        value1: Option<ValueText>,
        value2: Option<ValueText>,
    ) -> NutrientRow {
        NutrientRow {
            attribute,
            attribute_text: Some(txt(y)),
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

    fn no_ignore() -> HashSet<Attribute> {
        HashSet::new()
    }

    fn attrs(nutrients: &[ExtractedNutrient]) -> Vec<Attribute> {
        nutrients.iter().map(|n| n.attribute).collect()
    }

    // rows [energy: 250kcal/300kcal, fat: -/12g, protein: 5g/-]
    fn example_scan() -> ScanResult {
        scan(vec![
            row(
                Attribute::Energy,
                0.1,
                Some(vt(250.0, Some(NutrientUnit::Kcal), 0.1)),
                Some(vt(300.0, Some(NutrientUnit::Kcal), 0.1)),
            ),
            row(
                Attribute::Fat,
                0.2,
                None,
                Some(vt(12.0, Some(NutrientUnit::G), 0.2)),
            ),
            row(
                Attribute::Protein,
                0.3,
                Some(vt(5.0, Some(NutrientUnit::G), 0.3)),
                None,
            ),
        ])
    }

    #[test]
    fn test_example_column_one_no_fallback() {
        let out = extract_column(&example_scan(), Column::One, &no_ignore(), false);
        assert_eq!(
            attrs(&out),
            vec![
                Attribute::Energy,
                Attribute::Fat,
                Attribute::Protein,
                Attribute::Carbohydrate,
            ]
        );
        assert_eq!(out[0].value.as_ref().unwrap().amount, 250.0);
        assert_eq!(out[0].value.as_ref().unwrap().unit, Some(NutrientUnit::Kcal));
        // fat had no column-1 value and fallback is off
        assert!(out[1].value.is_none());
        assert_eq!(out[2].value.as_ref().unwrap().amount, 5.0);
        // carbohydrate appended since absent from the scan
        assert!(out[3].value.is_none());
    }

    #[test]
    fn test_example_column_one_with_fallback() {
        let out = extract_column(&example_scan(), Column::One, &no_ignore(), true);
        assert_eq!(out[1].attribute, Attribute::Fat);
        assert_eq!(out[1].value.as_ref().unwrap().amount, 12.0);
    }

    #[test]
    fn test_example_column_two() {
        let out = extract_column(&example_scan(), Column::Two, &no_ignore(), false);
        assert_eq!(out[0].value.as_ref().unwrap().amount, 300.0);
        assert_eq!(out[1].value.as_ref().unwrap().amount, 12.0);
        assert!(out[2].value.is_none());
    }

    #[test]
    fn test_no_duplicate_attributes() {
        let mut rows = example_scan().rows;
        // a second protein row, as OCR sometimes re-detects a line
        rows.push(row(
            Attribute::Protein,
            0.35,
            Some(vt(99.0, Some(NutrientUnit::G), 0.35)),
            None,
        ));
        let out = extract_column(&scan(rows), Column::One, &no_ignore(), false);
        let protein: Vec<_> = out
            .iter()
            .filter(|n| n.attribute == Attribute::Protein)
            .collect();
        assert_eq!(protein.len(), 1);
        // the first detection wins
        assert_eq!(protein[0].value.as_ref().unwrap().amount, 5.0);
    }

    #[test]
    fn test_energy_first_even_when_detected_last() {
        let rows = vec![
            row(
                Attribute::Protein,
                0.1,
                Some(vt(5.0, Some(NutrientUnit::G), 0.1)),
                None,
            ),
            row(
                Attribute::Energy,
                0.5,
                Some(vt(100.0, Some(NutrientUnit::Kcal), 0.5)),
                None,
            ),
        ];
        let out = extract_column(&scan(rows), Column::One, &no_ignore(), false);
        assert_eq!(out[0].attribute, Attribute::Energy);
    }

    #[test]
    fn test_energy_ignored() {
        let ignoring: HashSet<Attribute> = [Attribute::Energy].into_iter().collect();
        let out = extract_column(&example_scan(), Column::One, &ignoring, false);
        assert!(!out.iter().any(|n| n.attribute == Attribute::Energy));
        assert_eq!(out[0].attribute, Attribute::Fat);
    }

    #[test]
    fn test_ignored_macro_not_appended() {
        let ignoring: HashSet<Attribute> = [Attribute::Carbohydrate].into_iter().collect();
        let out = extract_column(&example_scan(), Column::One, &ignoring, false);
        assert!(!out.iter().any(|n| n.attribute == Attribute::Carbohydrate));
    }

    #[test]
    fn test_macros_always_present() {
        let rows = vec![row(
            Attribute::Sodium,
            0.1,
            Some(vt(120.0, Some(NutrientUnit::Mg), 0.1)),
            None,
        )];
        let out = extract_column(&scan(rows), Column::One, &no_ignore(), false);
        for attr in Attribute::MACROS {
            assert!(out.iter().any(|n| n.attribute == attr), "{:?} missing", attr);
        }
    }

    #[test]
    fn test_unsupported_unit_reset_to_default() {
        // "mg" misread on a grams-only nutrient
        let rows = vec![row(
            Attribute::Carbohydrate,
            0.1,
            Some(vt(30.0, Some(NutrientUnit::Mg), 0.1)),
            None,
        )];
        let out = extract_column(&scan(rows), Column::One, &no_ignore(), false);
        let carb = &out[0];
        assert_eq!(carb.attribute, Attribute::Carbohydrate);
        assert_eq!(carb.value.as_ref().unwrap().unit, Some(NutrientUnit::G));
        assert_eq!(carb.value.as_ref().unwrap().amount, 30.0);
    }

    #[test]
    fn test_missing_unit_reset_to_default() {
        let rows = vec![row(
            Attribute::Energy,
            0.1,
            Some(vt(250.0, None, 0.1)),
            None,
        )];
        let out = extract_column(&scan(rows), Column::One, &no_ignore(), false);
        assert_eq!(out[0].value.as_ref().unwrap().unit, Some(NutrientUnit::Kcal));
    }

    #[test]
    fn test_valueless_row_outside_panel_dropped() {
        let mut rows = example_scan().rows;
        // stray attribute text far below the panel, no value anywhere
        rows.push(NutrientRow {
            attribute: Attribute::Sodium,
            attribute_text: Some(RecognizedText::new("sodium", Rect::new(0.1, 0.9, 0.2, 0.03))),
            value1: None,
            value2: None,
        });
        let out = extract_column(&scan(rows), Column::One, &no_ignore(), false);
        assert!(!out.iter().any(|n| n.attribute == Attribute::Sodium));
    }

    #[test]
    fn test_valueless_row_inside_panel_kept_empty() {
        let mut rows = example_scan().rows;
        rows.push(NutrientRow {
            attribute: Attribute::Sodium,
            attribute_text: Some(RecognizedText::new("sodium", Rect::new(0.1, 0.2, 0.2, 0.03))),
            value1: None,
            value2: None,
        });
        let out = extract_column(&scan(rows), Column::One, &no_ignore(), false);
        let sodium = out.iter().find(|n| n.attribute == Attribute::Sodium).unwrap();
        assert!(sodium.value.is_none());
    }

    #[test]
    fn test_row_without_anchor_sorts_last() {
        let mut rows = example_scan().rows;
        rows.push(NutrientRow {
            attribute: Attribute::Sugar,
            attribute_text: None,
            value1: Some(vt(8.0, Some(NutrientUnit::G), 0.15)),
            value2: None,
        });
        let out = extract_column(&scan(rows), Column::One, &no_ignore(), false);
        // sugar has a value but no anchor, so it lands after the anchored
        // rows and before the appended macro placeholders
        let sugar_pos = out.iter().position(|n| n.attribute == Attribute::Sugar).unwrap();
        let protein_pos = out
            .iter()
            .position(|n| n.attribute == Attribute::Protein)
            .unwrap();
        assert!(sugar_pos > protein_pos);
    }

    #[test]
    fn test_idempotent() {
        let scan = example_scan();
        let ignoring = no_ignore();
        let first = extract_column(&scan, Column::One, &ignoring, true);
        let second = extract_column(&scan, Column::One, &ignoring, true);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_scan() {
        let out = extract_column(&scan(vec![]), Column::One, &no_ignore(), false);
        // just the three macro placeholders
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|n| n.value.is_none()));
    }
}
