use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;

use listitem::{
    Chars, Config, ExpandRange, ListItem, Marker, RangeExpander, Transform, transforms,
};

mod cli;
use cli::{Cli, Commands, StyleArgs};

fn load_config(explicit: Option<&Path>) -> io::Result<Config> {
    let start_dir = std::env::current_dir()?;
    let (cfg, cfg_path) = listitem::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    Ok(cfg)
}

/// Parse `--chars` into a marker source. Invalid ranges are an error here
/// rather than a fallback to the default bullets.
fn parse_chars(chars: &str) -> Result<Chars, String> {
    if chars.contains("..") {
        ExpandRange.expand(chars).map_err(|e| e.to_string())?;
        return Ok(Chars::Range(chars.to_string()));
    }

    let markers: Vec<Marker> = chars
        .split(',')
        .filter(|m| !m.is_empty())
        .map(Into::into)
        .collect();
    if markers.is_empty() {
        return Err(format!("No markers in '{}'", chars));
    }
    Ok(Chars::List(markers))
}

fn style_transform(style: &StyleArgs) -> Option<Transform> {
    let suffix = style.suffix.clone().unwrap_or_default();
    if style.roman {
        return Some(transforms::roman(&suffix));
    }
    match style.repeat {
        Some(times) => {
            let repeat = transforms::repeat(times);
            Some(Transform::new(move |m| format!("{}{}", repeat.apply(m), suffix)))
        }
        None if !suffix.is_empty() => Some(transforms::suffix(&suffix)),
        None => None,
    }
}

fn apply_style(mut cfg: Config, style: &StyleArgs) -> Result<Config, String> {
    if let Some(indent) = &style.indent {
        cfg.indent = indent.clone();
    }
    if let Some(chars) = &style.chars {
        cfg.chars = parse_chars(chars)?;
    }
    if style.nobullet {
        cfg.nobullet = true;
    }
    if let Some(transform) = style_transform(style) {
        cfg.transform = Some(transform);
    }
    Ok(cfg)
}

fn build_formatter(config: Option<&PathBuf>, style: &StyleArgs) -> io::Result<ListItem> {
    let cfg = load_config(config.map(PathBuf::as_path))?;
    let cfg = match apply_style(cfg, style) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    Ok(ListItem::new(Some(cfg)))
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Item { depth, text, style } => {
            let li = build_formatter(cli.config.as_ref(), &style)?;
            match li.try_format(Some(usize::from(depth)), Some(text.as_str())) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
            Ok(())
        }
        Commands::Preview { depth, text, style } => {
            let li = build_formatter(cli.config.as_ref(), &style)?;
            let depths = 0..=usize::from(depth);
            for line in li.format_all(depths.map(|d| (d, text.as_str()))) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}
