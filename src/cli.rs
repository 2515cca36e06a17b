use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "listitem")]
#[command(author, version)]
#[command(about = "Render list item markers and indentation by nesting depth")]
#[command(
    long_about = "listitem renders a single list item: indentation for its nesting depth, \
    a marker picked by cycling through a set of bullets, and the item text. Markers can be \
    custom characters, a range expression such as 1..5, or roman numerals."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a nested item with the default bullets
    listitem item 1 'Second level'

    # Use four-space indentation
    listitem item --indent '    ' 2 'Third level'

    # Numbered markers from a range, shown as roman numerals
    listitem preview --chars 1..100..10 --roman --suffix .

    # Custom bullet set
    listitem preview --chars 'A,B,C,D' --depth 8

CONFIGURATION:

listitem looks for configuration files in this order:
  1. Explicit --config path
  2. listitem.toml or .listitem.toml in current/parent directories
  3. ~/.config/listitem/config.toml (XDG)
  4. Built-in defaults

Example .listitem.toml:

    indent = \"    \"
    chars = [\"-\", \"*\", \"+\", \"~\"]   # or a range: chars = \"1..5\"
    nobullet = false")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, listitem will \
        search for .listitem.toml or listitem.toml in the current directory and its parents, \
        then fall back to ~/.config/listitem/config.toml."
    )]
    pub config: Option<PathBuf>,
}

/// Overrides applied on top of the loaded configuration.
#[derive(Args, Debug, Default, Clone)]
pub struct StyleArgs {
    /// Indentation unit repeated once per depth level
    #[arg(long, allow_hyphen_values = true)]
    pub indent: Option<String>,

    /// Comma-separated markers, or a range expression like 1..5
    #[arg(long, allow_hyphen_values = true)]
    #[arg(
        long_help = "Markers cycled by depth. Either a comma-separated list (e.g. 'A,B,C') \
        or a range expression 'start..end' or 'start..end..step' (e.g. 1..100..10)."
    )]
    pub chars: Option<String>,

    /// Print only indentation and text
    #[arg(long)]
    pub nobullet: bool,

    /// Show numeric markers as roman numerals
    #[arg(long, conflicts_with = "repeat")]
    pub roman: bool,

    /// Repeat each marker N times
    #[arg(long, value_name = "N")]
    pub repeat: Option<usize>,

    /// Text appended to each marker (e.g. '.' or ')')
    #[arg(long, allow_hyphen_values = true)]
    pub suffix: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a single list item
    #[command(
        long_about = "Render a single list item at the given nesting depth and print it to \
        stdout without a trailing blank line."
    )]
    #[command(after_help = "\
EXAMPLES:

    listitem item 0 'Top level'        # - Top level
    listitem item 2 'Nested'           #     + Nested
    listitem item --nobullet 1 'Plain' #   Plain")]
    Item {
        /// Nesting depth, 0 for top-level items (at most 65535)
        depth: u16,

        /// Item text, inserted verbatim
        #[arg(allow_hyphen_values = true)]
        text: String,

        #[command(flatten)]
        style: StyleArgs,
    },
    /// Print one item per depth to preview the marker rotation
    #[command(
        long_about = "Print an item for every depth from 0 up to --depth, which shows how \
        indentation grows and how markers cycle with the current configuration."
    )]
    Preview {
        /// Deepest level to render (at most 65535)
        #[arg(long, default_value_t = 4)]
        depth: u16,

        /// Text used for every item
        #[arg(long, default_value = "item")]
        text: String,

        #[command(flatten)]
        style: StyleArgs,
    },
}
