// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 exportstore developers

//! Operator CLI over the export artifact store and log viewer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use exportstore::{DirectoryLayout, ExportStore, LogReader, append_row};

#[derive(Parser, Debug)]
#[command(name = "exportstore", version, about = "Export artifact lifecycle CLI")]
struct Cli {
    #[arg(long, help = "Base variable directory the export tree lives under")]
    var_dir: PathBuf,
    #[arg(long, help = "Directory holding the application log files")]
    log_dir: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Move a completed artifact from the output area into the archive.
    Archive { filename: String },
    /// Print the current path of an artifact, wherever it lives.
    Resolve { filename: String },
    /// Check whether an artifact exists in either area.
    Exists { filename: String },
    /// Report the lifecycle state of an artifact.
    State { filename: String },
    /// Print the bounded tail of an application log file.
    Logs { key: String },
    /// Append one CSV row to an artifact in the output area.
    Append {
        filename: String,
        #[arg(required = true)]
        fields: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Keep stdout clean for command output; events go to stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let layout = DirectoryLayout::new(cli.var_dir, cli.log_dir);
    let store = ExportStore::new(&layout);

    match cli.command {
        Commands::Archive { filename } => {
            let dest = store
                .archive(&filename)
                .with_context(|| format!("Failed to archive {filename}"))?;
            println!("{}", dest.display());
        }
        Commands::Resolve { filename } => {
            let path = store
                .resolve(&filename)
                .with_context(|| format!("Failed to resolve {filename}"))?;
            println!("{}", path.display());
        }
        Commands::Exists { filename } => {
            println!("{}", store.exists(&filename));
        }
        Commands::State { filename } => {
            println!("{}", store.state(&filename).as_str());
        }
        Commands::Logs { key } => {
            // Diagnostic regime: invalid keys and unreadable files print as
            // text and exit zero.
            let reader = LogReader::new(&layout);
            print!("{}", reader.tail_or_diagnostic(&key));
        }
        Commands::Append { filename, fields } => {
            let path = store
                .output_dir()
                .context("Failed to provision the output directory")?
                .join(&filename);
            append_row(&path, &fields)
                .with_context(|| format!("Failed to append a row to {filename}"))?;
        }
    }

    Ok(())
}
