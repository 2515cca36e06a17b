//! Expansion of range expressions like `1..5` or `1..100..10` into markers.
//!
//! The formatter only sees the expanded sequence. Anything that can turn an
//! expression into markers can stand in for [`ExpandRange`] by implementing
//! [`RangeExpander`].

use crate::error::ListItemError;
use crate::marker::Marker;

/// Upper bound on the number of markers a single expression may produce.
const MAX_EXPANDED_LEN: usize = 10_000;

/// Turns a range expression into an ordered sequence of markers.
pub trait RangeExpander {
    fn expand(&self, expr: &str) -> Result<Vec<Marker>, ListItemError>;
}

/// Default expander for `start..end` and `start..end..step`.
///
/// Bounds are either integers (`1..5`, `10..-10..5`) or single ASCII
/// letters of the same case (`a..e`, `Z..V`). Ranges are inclusive and may
/// run in either direction; the sign of `step` is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandRange;

impl RangeExpander for ExpandRange {
    fn expand(&self, expr: &str) -> Result<Vec<Marker>, ListItemError> {
        let invalid = || ListItemError::InvalidRange(expr.to_string());

        let parts: Vec<&str> = expr.trim().split("..").map(str::trim).collect();
        let (start, end, step) = match parts.as_slice() {
            [start, end] => (*start, *end, 1),
            [start, end, step] => {
                let step = step.parse::<i64>().map_err(|_| invalid())?;
                (*start, *end, step.unsigned_abs())
            }
            _ => return Err(invalid()),
        };
        if step == 0 {
            return Err(invalid());
        }

        if let (Ok(start), Ok(end)) = (start.parse::<i64>(), end.parse::<i64>()) {
            let values = progression(start, end, step).ok_or_else(invalid)?;
            return Ok(values
                .into_iter()
                .map(|n| Marker::Text(n.to_string()))
                .collect());
        }

        match (single_letter(start), single_letter(end)) {
            (Some(start), Some(end))
                if start.is_ascii_lowercase() == end.is_ascii_lowercase() =>
            {
                let values = progression(start as i64, end as i64, step).ok_or_else(invalid)?;
                Ok(values
                    .into_iter()
                    .filter_map(|code| u32::try_from(code).ok().and_then(char::from_u32))
                    .map(Marker::from)
                    .collect())
            }
            _ => Err(invalid()),
        }
    }
}

fn single_letter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

/// Inclusive progression from `start` towards `end`, or `None` when it
/// would exceed [`MAX_EXPANDED_LEN`].
fn progression(start: i64, end: i64, step: u64) -> Option<Vec<i64>> {
    let span = start.abs_diff(end);
    let len = span / step + 1;
    if len > MAX_EXPANDED_LEN as u64 {
        return None;
    }

    let step = step as i128;
    let (start, end) = (start as i128, end as i128);
    let mut values = Vec::with_capacity(len as usize);
    let mut current = start;
    if start <= end {
        while current <= end {
            values.push(current as i64);
            current += step;
        }
    } else {
        while current >= end {
            values.push(current as i64);
            current -= step;
        }
    }
    Some(values)
}
