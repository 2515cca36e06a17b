use clap::CommandFactory;
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};

// Only the clap definitions are needed here, not the binary's logic.
#[path = "src/cli.rs"]
#[allow(dead_code)]
mod cli;

use cli::Cli;

const BIN_NAME: &str = "listitem";

fn generate_completions(outdir: &std::ffi::OsString) -> Result<()> {
    let mut cmd = Cli::command();

    for shell in [
        Shell::Bash,
        Shell::Fish,
        Shell::Zsh,
        Shell::PowerShell,
        Shell::Elvish,
    ] {
        generate_to(shell, &mut cmd, BIN_NAME, outdir)?;
    }

    Ok(())
}

fn render_man_page(man: Man, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(path, buffer)
}

/// Writes `listitem.1` plus `listitem-item.1` and `listitem-preview.1`.
fn generate_man_pages() -> Result<()> {
    let out_dir = PathBuf::from("target/man");
    fs::create_dir_all(&out_dir)?;

    let cmd = Cli::command();
    render_man_page(Man::new(cmd.clone()), &out_dir.join(format!("{BIN_NAME}.1")))?;

    for subcommand in cmd.get_subcommands() {
        if subcommand.get_name() == "help" {
            continue;
        }
        let title = format!("{BIN_NAME}-{}", subcommand.get_name());
        let man = Man::new(subcommand.clone()).title(&title);
        render_man_page(man, &out_dir.join(format!("{title}.1")))?;
    }

    Ok(())
}

fn main() -> Result<()> {
    // OUT_DIR is unset when the script is run by hand
    if let Some(outdir) = env::var_os("OUT_DIR") {
        generate_completions(&outdir)?;
    }

    generate_man_pages()?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
