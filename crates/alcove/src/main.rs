use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "alcove", about = "MkDocs-style admonition renderer for Markdown")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a markdown file to an HTML fragment.
    Render {
        /// The markdown file to render.
        file: PathBuf,

        /// Write the HTML here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render { file, out } => {
            let html = alcove::convert(&file)?;
            match out {
                Some(path) => fs::write(&path, html)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{html}"),
            }
        }
    }

    Ok(())
}
