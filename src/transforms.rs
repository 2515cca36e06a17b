//! Ready-made transforms for common marker styles.

use crate::marker::{Marker, Transform};

const NUMERALS: &[(i64, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Upper-case roman numeral for `1..=3999`.
pub fn to_roman(mut n: i64) -> Option<String> {
    if !(1..=3999).contains(&n) {
        return None;
    }
    let mut out = String::new();
    for &(value, symbol) in NUMERALS {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    Some(out)
}

/// Numeric markers become roman numerals followed by `suffix`.
///
/// Markers that are not numbers in `1..=3999` keep their text.
pub fn roman(suffix: &str) -> Transform {
    let suffix = suffix.to_string();
    Transform::new(move |marker: &Marker| {
        let base = marker
            .as_integer()
            .and_then(to_roman)
            .unwrap_or_else(|| marker.to_string());
        format!("{}{}", base, suffix)
    })
}

/// The marker repeated `times` times, e.g. `-` to `---`.
pub fn repeat(times: usize) -> Transform {
    Transform::new(move |marker: &Marker| marker.to_string().repeat(times))
}

/// The marker followed by `suffix`, e.g. `1` to `1)`.
pub fn suffix(suffix: &str) -> Transform {
    let suffix = suffix.to_string();
    Transform::new(move |marker: &Marker| format!("{}{}", marker, suffix))
}
