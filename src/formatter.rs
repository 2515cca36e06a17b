//! The list item formatter.
//!
//! A [`ListItem`] resolves a [`Config`] once into an indentation unit, a
//! non-empty marker sequence and a transform. Each call then renders
//! `indentation + marker + " " + text` for a depth, cycling through the
//! markers as the depth grows.

use crate::config::{Chars, Config, DEFAULT_MARKERS};
use crate::error::ListItemError;
use crate::marker::{Marker, Transform};
use crate::range::{ExpandRange, RangeExpander};

#[derive(Debug, Clone)]
pub struct ListItem {
    indent: String,
    markers: Vec<Marker>,
    nobullet: bool,
    transform: Transform,
}

impl Default for ListItem {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ListItem {
    /// Build a formatter from `config`, or from the defaults when `None`.
    pub fn new(config: Option<Config>) -> Self {
        Self::with_expander(config, None, &ExpandRange)
    }

    /// Build a formatter whose markers are passed through `transform`.
    ///
    /// `transform` takes precedence over `Config::transform`.
    pub fn with_transform<F>(config: Option<Config>, transform: F) -> Self
    where
        F: Fn(&Marker) -> String + Send + Sync + 'static,
    {
        Self::with_expander(config, Some(Transform::new(transform)), &ExpandRange)
    }

    /// Build a formatter, expanding range expressions with `expander`.
    ///
    /// Never fails: an unexpandable range or an empty marker list falls back
    /// to the default bullets.
    pub fn with_expander(
        config: Option<Config>,
        transform: Option<Transform>,
        expander: &dyn RangeExpander,
    ) -> Self {
        let config = config.unwrap_or_default();

        let markers = match config.chars {
            Chars::List(markers) => markers,
            Chars::Range(expr) => expander.expand(&expr).unwrap_or_else(|e| {
                log::warn!("{e} Using default markers");
                default_markers()
            }),
        };
        let markers = if markers.is_empty() {
            log::warn!("Empty marker list, using default markers");
            default_markers()
        } else {
            markers
        };

        let transform = transform
            .or(config.transform)
            .unwrap_or_else(Transform::identity);

        log::debug!(
            "List item formatter: indent={:?}, markers={}, nobullet={}",
            config.indent,
            markers.len(),
            config.nobullet
        );

        Self {
            indent: config.indent,
            markers,
            nobullet: config.nobullet,
            transform,
        }
    }

    /// The resolved marker sequence.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Leading whitespace for `depth`. Top-level items are always flush left.
    pub fn indentation(&self, depth: usize) -> String {
        if depth == 0 {
            String::new()
        } else {
            self.indent.repeat(depth)
        }
    }

    /// The marker for `depth` before the transform is applied.
    pub fn raw_marker(&self, depth: usize) -> &Marker {
        &self.markers[depth % self.markers.len()]
    }

    /// The marker for `depth` as it is displayed.
    pub fn marker(&self, depth: usize) -> String {
        self.transform.apply(self.raw_marker(depth))
    }

    /// Render one list item. The result has no trailing newline.
    ///
    /// # Panics
    ///
    /// Panics if the indentation for `depth` overflows `isize::MAX` bytes.
    /// [`ListItem::try_format`] reports that case as an error instead.
    pub fn format(&self, depth: usize, text: &str) -> String {
        let indent = self.indentation(depth);
        if self.nobullet {
            return format!("{indent}{text}");
        }
        let marker = self.marker(depth);
        format!("{indent}{marker} {text}")
    }

    /// Like [`ListItem::format`], for callers whose arguments may be absent.
    ///
    /// Fails with [`ListItemError::InvalidArguments`] unless both the depth
    /// and the text are given, and with [`ListItemError::DepthTooLarge`] when
    /// the indentation would not fit in memory.
    pub fn try_format(
        &self,
        depth: Option<usize>,
        text: Option<&str>,
    ) -> Result<String, ListItemError> {
        let (Some(depth), Some(text)) = (depth, text) else {
            return Err(ListItemError::InvalidArguments);
        };
        let fits = self
            .indent
            .len()
            .checked_mul(depth)
            .is_some_and(|len| len <= isize::MAX as usize);
        if !fits {
            return Err(ListItemError::DepthTooLarge(depth));
        }
        Ok(self.format(depth, text))
    }

    /// Render a batch of `(depth, text)` items, one line each.
    pub fn format_all<I, T>(&self, items: I) -> Vec<String>
    where
        I: IntoIterator<Item = (usize, T)>,
        T: AsRef<str>,
    {
        items
            .into_iter()
            .map(|(depth, text)| self.format(depth, text.as_ref()))
            .collect()
    }
}

fn default_markers() -> Vec<Marker> {
    DEFAULT_MARKERS.iter().map(|&m| Marker::from(m)).collect()
}
