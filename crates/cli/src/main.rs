//! Issue-ops CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Load configuration** — `.env` (local runs only), then command-line
//!    flags with `GITHUB_EVENT_PATH` / `GITHUB_WORKSPACE` fallbacks.
//! 2. **Wire observability** — `tracing-subscriber` writing to stderr, as
//!    JSON when `ISSUE_OPS_LOG_FORMAT=json`.
//! 3. **Run one subcommand** — `collection-index` or `pizza-order`.
//!
//! Any error aborts the process with a non-zero exit status and the error chain
//! on stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use forms::InvocationId;
use github::ActionsConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

const LOG_FORMAT_VAR: &str = "ISSUE_OPS_LOG_FORMAT";

#[derive(Parser, Debug)]
#[command(name = "issue-ops", version, about = "Issue-form and order automation for GitHub Actions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Append a collection-index record parsed from an issue-form submission.
    CollectionIndex {
        #[arg(long, env = github::EVENT_PATH_VAR, help = "Path to the issue event payload")]
        event_path: Option<PathBuf>,
        #[arg(long, env = github::WORKSPACE_VAR, help = "Repository checkout directory")]
        workspace: Option<PathBuf>,
    },
    /// Append the sender's pizza order to the README.
    PizzaOrder {
        #[arg(long, env = github::EVENT_PATH_VAR, help = "Path to the event payload")]
        event_path: Option<PathBuf>,
        #[arg(long, default_value = "order.json", help = "Order record to read")]
        order: PathBuf,
        #[arg(long, default_value = "README.md", help = "File the order line is appended to")]
        readme: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let invocation = InvocationId::new_random();
    let span = tracing::info_span!("invocation", id = %invocation);
    let _guard = span.enter();

    match cli.command {
        Commands::CollectionIndex {
            event_path,
            workspace,
        } => {
            let config = ActionsConfig::new(event_path, workspace);
            commands::collection_index(&config)?;
        }
        Commands::PizzaOrder {
            event_path,
            order,
            readme,
        } => {
            let config = ActionsConfig::new(event_path, None);
            commands::pizza_order(&config, &order, &readme)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let json = std::env::var(LOG_FORMAT_VAR).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}
