use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::marker::{Marker, Transform};

/// Bullets used when no `chars` are configured, cycled by depth.
pub const DEFAULT_MARKERS: [&str; 4] = ["-", "*", "+", "~"];

/// Indentation unit used when no `indent` is configured.
pub const DEFAULT_INDENT: &str = "  ";

/// Where the markers come from.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Chars {
    /// A range expression such as `1..5`, expanded when the formatter is built
    Range(String),
    /// An explicit list of markers
    List(Vec<Marker>),
}

impl Default for Chars {
    fn default() -> Self {
        Self::List(DEFAULT_MARKERS.iter().map(|&m| Marker::from(m)).collect())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// String repeated once per depth level
    pub indent: String,
    pub chars: Chars,
    /// Emit only indentation and text
    pub nobullet: bool,
    /// Applied to the raw marker before it is printed
    #[serde(skip)]
    pub transform: Option<Transform>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            chars: Chars::default(),
            nobullet: false,
            transform: None,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.config.indent = indent.into();
        self
    }

    pub fn chars<I, M>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Marker>,
    {
        self.config.chars = Chars::List(chars.into_iter().map(Into::into).collect());
        self
    }

    pub fn range(mut self, expr: impl Into<String>) -> Self {
        self.config.chars = Chars::Range(expr.into());
        self
    }

    pub fn nobullet(mut self, nobullet: bool) -> Self {
        self.config.nobullet = nobullet;
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.config.transform = Some(transform);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".listitem.toml", "listitem.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("listitem").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("listitem")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .listitem.toml, listitem.toml
/// 3) XDG: $XDG_CONFIG_HOME/listitem/config.toml or ~/.config/listitem/config.toml
/// 4) default config
///
/// A discovered file that fails to parse is skipped with a warning.
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    load_with_user_config(explicit, start_dir, xdg_config_path())
}

fn load_with_user_config(
    explicit: Option<&Path>,
    start_dir: &Path,
    user_config: Option<PathBuf>,
) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    for candidate in find_in_tree(start_dir).into_iter().chain(user_config) {
        match read_config(&candidate) {
            Ok(cfg) => return Ok((cfg, Some(candidate))),
            Err(e) => log::warn!("Skipping config {}: {e}", candidate.display()),
        }
    }

    log::debug!("No usable config file found, using defaults");
    Ok((Config::default(), None))
}
