//! Error type shared by the formatter and the range expander.

/// Errors reported by `listitem`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItemError {
    /// A formatting call was made without a depth or without text.
    InvalidArguments,
    /// A range expression such as `1..5` could not be expanded.
    InvalidRange(String),
    /// The indentation for this depth does not fit in a `String`.
    DepthTooLarge(usize),
}

impl std::fmt::Display for ListItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArguments => write!(f, "[listitem]: invalid arguments."),
            Self::InvalidRange(expr) => {
                write!(f, "[listitem]: invalid range expression '{}'.", expr)
            }
            Self::DepthTooLarge(depth) => {
                write!(f, "[listitem]: depth {} is too large to indent.", depth)
            }
        }
    }
}

impl std::error::Error for ListItemError {}
