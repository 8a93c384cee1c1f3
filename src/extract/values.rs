//! Raw text value detection
//!
//! Scans an OCR'd string for number+unit tokens, as the vision pipeline's
//! candidate lines arrive unsplit ("Energy 1046kJ / 250 kcal").

use crate::label::{FoodLabelValue, NutrientUnit};

/// Detect every food-label value present in a raw OCR string
///
/// Comma decimals are accepted ("0,5 g"). A number followed by a token that
/// is not a known unit yields a unit-less value. Digits glued to a trailing
/// letter ("B12", "Omega3") are part of the word, not a value.
pub fn detect_values(text: &str) -> Vec<FoodLabelValue> {
    let chars: Vec<char> = text.chars().collect();
    let mut values = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        // digits glued to a preceding letter belong to a word, not a value
        if i > 0 && chars[i - 1].is_alphabetic() {
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            continue;
        }

        let (amount, next) = match read_number(&chars, i) {
            Some(parsed) => parsed,
            None => {
                i += 1;
                continue;
            }
        };
        i = next;

        let (unit, consumed) = read_unit(&chars, i);
        if unit.is_some() {
            i = consumed;
        }

        values.push(FoodLabelValue::new(amount, unit));
    }

    values
}

/// Parse a number starting at `start`, with '.' or ',' as decimal separator
fn read_number(chars: &[char], start: usize) -> Option<(f64, usize)> {
    let mut i = start;
    let mut num = String::new();
    let mut saw_sep = false;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            num.push(c);
            i += 1;
        } else if (c == '.' || c == ',')
            && !saw_sep
            && i + 1 < chars.len()
            && chars[i + 1].is_ascii_digit()
        {
            saw_sep = true;
            num.push('.');
            i += 1;
        } else {
            break;
        }
    }

    num.parse::<f64>().ok().map(|amount| (amount, i))
}

/// Read the unit token following a number, skipping spaces
///
/// Returns the parsed unit (None for an unknown token) and the position
/// after the token.
fn read_unit(chars: &[char], start: usize) -> (Option<NutrientUnit>, usize) {
    let mut i = start;
    while i < chars.len() && chars[i] == ' ' {
        i += 1;
    }

    if i < chars.len() && chars[i] == '%' {
        return (Some(NutrientUnit::Percent), i + 1);
    }

    let token_start = i;
    while i < chars.len() && chars[i].is_alphabetic() {
        i += 1;
    }
    if i == token_start {
        return (None, start);
    }

    let token: String = chars[token_start..i].iter().collect();
    (NutrientUnit::from_str(&token), i)
}
