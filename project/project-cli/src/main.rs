//! IntelliSlice command-line front end.
//!
//! # Commands
//!
//! - `intellislice export <MESH>... --settings settings.json` - Write 3MF projects
//! - `intellislice inspect <MESH>` - Report encoding, counts and bounds
//! - `intellislice keys` - Print the settings mapping table
//!
//! Logging goes to stderr. `RUST_LOG` takes precedence over `-v`.

mod export;
mod inspect;
mod keys;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Package STL meshes with slicer settings into 3MF projects
#[derive(Parser)]
#[command(name = "intellislice")]
#[command(about = "Package STL meshes with slicer settings into 3MF projects", long_about = None)]
#[command(version)]
struct Cli {
    /// Log pipeline stages and package parts
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert meshes into 3MF project packages
    Export(export::ExportArgs),

    /// Report encoding, triangle count and bounds of a mesh
    Inspect {
        /// Mesh file (binary or ASCII STL)
        #[arg(name = "MESH")]
        path: PathBuf,
    },

    /// List settings keys with their profile names
    Keys {
        /// Hide keys that are not written to the profile
        #[arg(long)]
        mapped_only: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Export(args) => export::run(&args),
        Commands::Inspect { path } => inspect::run(&path),
        Commands::Keys { mapped_only } => {
            keys::run(mapped_only);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
