mod commands;
pub mod error;
mod utils;


use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::commands::navigate::NavigateParams;
use crate::cli::error::CliResult;

#[derive(Parser)]
#[command(name = "paginate")]
#[command(author, version, about = "Numbered pagination window calculator", long_about = None)]
pub struct Cli {
    /// Output format: table or json (default: PAGINATE_FORMAT env or table)
    #[arg(long, global = true)]
    pub format: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the page window for an active page
    Window {
        /// Active page (1-based)
        active: usize,
        /// Total number of pages
        total_pages: usize,
    },
    /// Replay navigation events against a pagination control
    Navigate {
        /// JSON config file (totalResults, resultsPerPage, activePage, label)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Total number of results
        #[arg(long, allow_negative_numbers = true)]
        total_results: Option<i64>,
        /// Results per page (default: 10)
        #[arg(long, allow_negative_numbers = true)]
        per_page: Option<i64>,
        /// Initial active page (default: 1)
        #[arg(long, allow_negative_numbers = true)]
        active: Option<i64>,
        /// Accessible label of the navigation region
        #[arg(long)]
        label: Option<String>,
        /// Events: next, prev, <page>, resize=<total results>, per-page=<n>
        events: Vec<String>,
    },
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paginate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing();

    let format = utils::resolve_format(cli.format);

    match cli.command {
        Some(Commands::Window {
            active,
            total_pages,
        }) => {
            println!(
                "{}",
                commands::window::show_window(active, total_pages, &format)?
            );
        }
        Some(Commands::Navigate {
            config,
            total_results,
            per_page,
            active,
            label,
            events,
        }) => {
            let params = NavigateParams {
                total_results,
                per_page,
                active,
                label,
            };
            println!(
                "{}",
                commands::navigate::navigate(config.as_deref(), params, &events, &format)?
            );
        }
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["paginate", "--help"]);
        }
    }

    Ok(())
}
