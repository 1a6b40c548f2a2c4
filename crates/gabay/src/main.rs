// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gabay - AI learning-roadmap generation service.
//!
//! This is the binary entry point for the Gabay service and CLI.

use clap::{Parser, Subcommand};

mod generate;
mod serve;

/// Gabay - AI learning-roadmap generation service.
#[derive(Parser, Debug)]
#[command(name = "gabay", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the generation gateway HTTP server.
    Serve,
    /// Generate a roadmap from the command line.
    Generate {
        /// Free-text category, e.g. "IT".
        category: String,
        /// Free-text course, e.g. "Networking".
        course: String,
        /// Restrict enrichment to the free-resource allow-list.
        #[arg(long)]
        free_only: bool,
        /// Per-milestone resource cap (2-5).
        #[arg(long)]
        max_resources: Option<usize>,
    },
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gabay={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match gabay_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            gabay_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.service.log_level);

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Generate {
            category,
            course,
            free_only,
            max_resources,
        }) => generate::run_generate(config, &category, &course, free_only, max_resources).await,
        None => {
            println!("gabay: use --help for available commands");
            Ok(())
        }
    };

    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
