pub mod config;
pub mod error;
pub mod formatter;
pub mod marker;
pub mod range;
pub mod transforms;

pub use config::Chars;
pub use config::Config;
pub use config::ConfigBuilder;
pub use error::ListItemError;
pub use formatter::ListItem;
pub use marker::{Marker, Transform};
pub use range::{ExpandRange, RangeExpander};

#[cfg(test)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a list item formatter.
///
/// # Examples
///
/// ```no_run
/// use listitem::{ConfigBuilder, listitem};
///
/// let li = listitem(Some(ConfigBuilder::default().indent("    ").build()));
/// assert_eq!(li.format(0, "a"), "- a");
/// assert_eq!(li.format(1, "a"), "    * a");
/// ```
///
/// # Arguments
///
/// * `config` - Optional configuration (defaults to two-space indentation
///   and the `-`, `*`, `+`, `~` bullets)
pub fn listitem(config: Option<Config>) -> ListItem {
    ListItem::new(config)
}

/// Formats a single item with the default configuration.
pub fn format_with_defaults(depth: usize, text: &str) -> String {
    ListItem::default().format(depth, text)
}
