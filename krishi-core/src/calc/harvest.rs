//! Yield estimation from the descriptive yield strings in the crop table.

/// Assumed per-unit-area output when a yield string carries no usable
/// figure at all.
pub const FALLBACK_YIELD: f64 = 2_000.0;

/// Estimates total output mass for a plot of `land` units.
///
/// The yield column is free text holding a range ("90-120") or a single
/// figure; the midpoint of the first two numeric tokens is used, a lone
/// token stands for both bounds, and `FALLBACK_YIELD` covers strings with
/// none.
pub fn estimate_yield(yield_text: &str, land: f64) -> f64 {
    per_unit_yield(yield_text) * land
}

fn per_unit_yield(text: &str) -> f64 {
    let tokens = numeric_tokens(text);
    match tokens.as_slice() {
        [] => FALLBACK_YIELD,
        [single] => *single,
        [first, second, ..] => (first + second) / 2.0,
    }
}

/// The numeric tokens of `text` in order: maximal runs of digits and
/// decimal points that parse as finite numbers.
fn numeric_tokens(text: &str) -> Vec<f64> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in text.chars().chain(std::iter::once(' ')) {
        if ch.is_ascii_digit() || ch == '.' {
            current.push(ch);
        } else if !current.is_empty() {
            if let Ok(value) = current.parse::<f64>() {
                if value.is_finite() {
                    tokens.push(value);
                }
            }
            current.clear();
        }
    }
    tokens
}
