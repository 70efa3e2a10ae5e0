//! readiness CLI, the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "readiness",
    version,
    about = "Career-readiness questionnaire scoring"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the questions in a catalog
    Questions {
        /// Catalog TOML file (default: built-in carbon auditor catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only show one category: psychometric, technical, wiscar
        #[arg(long)]
        category: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score a response file
    Score {
        /// Responses file (.json array or .toml with [[responses]])
        #[arg(long)]
        responses: PathBuf,

        /// Catalog TOML file (default: built-in carbon auditor catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Answer the questionnaire interactively
    Take {
        /// Catalog TOML file (default: built-in carbon auditor catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate catalog TOML files
    Validate {
        /// Path to catalog file or directory
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Create starter config, example catalog and example responses
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("readiness=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Questions {
            catalog,
            category,
            config,
        } => commands::questions::execute(catalog, category, config),
        Commands::Score {
            responses,
            catalog,
            format,
            config,
        } => commands::score::execute(responses, catalog, format, config),
        Commands::Take {
            catalog,
            format,
            config,
        } => commands::take::execute(catalog, format, config),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
