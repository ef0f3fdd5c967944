//! CLI frontend for the Plaza arena layout engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "plaza",
    about = "Plaza — a configuration-driven arena layout engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a preset to a freshly scaffolded arena and report the outcome
    Apply {
        /// Explicit preset file (otherwise environment, then default discovery)
        #[arg(short, long)]
        preset: Option<PathBuf>,

        /// Project root for resolving relative preset paths
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// RNG seed for deterministic placement
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Map preset skin names through the built-in skin table
        #[arg(long)]
        skins: bool,

        /// Show all diagnostics (not just warnings)
        #[arg(short, long)]
        verbose: bool,
    },

    /// Build the arena from a preset, introspect it, and print what is there
    Inspect {
        /// Explicit preset file (otherwise environment, then default discovery)
        #[arg(short, long)]
        preset: Option<PathBuf>,

        /// Project root for resolving relative preset paths
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// RNG seed for deterministic placement
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Emit the full Markdown manifest instead of the summary
        #[arg(short, long)]
        markdown: bool,

        /// Write the Markdown manifest to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode a preset and print the resulting configuration
    Show {
        /// Explicit preset file (otherwise environment, then default discovery)
        #[arg(short, long)]
        preset: Option<PathBuf>,

        /// Project root for resolving relative preset paths
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// List preset files available under the project root
    Presets {
        /// Project root whose presets directory is listed
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Write a configuration out as a preset document
    Save {
        /// Destination file
        path: PathBuf,

        /// Preset name recorded in the document
        #[arg(short, long, default_value = "Custom Plaza")]
        name: String,

        /// Free-text description recorded in the document
        #[arg(short, long, default_value = "")]
        description: String,

        /// Start from this preset instead of the built-in defaults
        #[arg(long)]
        from: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Apply {
            preset,
            root,
            seed,
            skins,
            verbose,
        } => commands::apply::run(preset.as_deref(), &root, seed, skins, verbose),
        Commands::Inspect {
            preset,
            root,
            seed,
            markdown,
            output,
        } => commands::inspect::run(preset.as_deref(), &root, seed, markdown, output.as_deref()),
        Commands::Show { preset, root } => commands::show::run(preset.as_deref(), &root),
        Commands::Presets { root } => commands::presets::run(&root),
        Commands::Save {
            path,
            name,
            description,
            from,
        } => commands::save::run(&path, &name, &description, from.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
