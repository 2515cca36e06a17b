//! Raw marker values and the transform hook applied to them.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

/// A raw marker as configured, before any transform runs.
///
/// Markers come either from an explicit list (where TOML integers stay
/// numbers) or from a range expression (which always yields text).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum Marker {
    Number(i64),
    Text(String),
}

impl Marker {
    /// The marker as an integer, if it is a number or numeric text.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Marker {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Marker {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<char> for Marker {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

impl From<i64> for Marker {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// Function turning a raw marker into the string that is displayed.
#[derive(Clone)]
pub struct Transform(Arc<dyn Fn(&Marker) -> String + Send + Sync>);

impl Transform {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Marker) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Displays the marker unchanged.
    pub fn identity() -> Self {
        Self::new(|m| m.to_string())
    }

    pub fn apply(&self, marker: &Marker) -> String {
        (self.0)(marker)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(<fn>)")
    }
}
