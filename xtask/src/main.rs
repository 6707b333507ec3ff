//! Development tasks: man pages and shell completions for `pagesum`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "pagesum development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for pagesum and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
        /// Only generate for this shell
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => generate_man(&out),
        Task::Completions { out, shell } => generate_completions(&out, shell),
    }
}

fn generate_man(out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
    let cmd = pagesum::command();

    write_man_page(out, "pagesum", cmd.clone())?;
    for sub in cmd.get_subcommands() {
        let name = format!("pagesum-{}", sub.get_name());
        write_man_page(out, &name, sub.clone().bin_name(name.clone()))?;
    }
    println!("man pages written to {}", out.display());
    Ok(())
}

fn write_man_page(out: &Path, name: &str, cmd: clap::Command) -> anyhow::Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd)
        .render(&mut buffer)
        .with_context(|| format!("failed to render man page for {name}"))?;
    let path = out.join(format!("{name}.1"));
    fs::write(&path, buffer).with_context(|| format!("failed to write {}", path.display()))
}

fn generate_completions(out: &Path, shell: Option<Shell>) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
    let shells = shell.map_or_else(
        || {
            vec![
                Shell::Bash,
                Shell::Elvish,
                Shell::Fish,
                Shell::PowerShell,
                Shell::Zsh,
            ]
        },
        |s| vec![s],
    );

    let mut cmd = pagesum::command();
    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, "pagesum", out)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("{}", path.display());
    }
    Ok(())
}
