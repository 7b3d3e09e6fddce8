use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mentormatch::{explain_json, open_store};
use mm_core::config::Config;
use mm_core::SearchEngine;
use tracing_subscriber::EnvFilter;

const DEBUG_LOG: &str = "/tmp/mentormatch-debug.log";

#[derive(Parser)]
#[command(name = "mentormatch", about = "Career cluster and mentor matching service")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/mentormatch/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/mentormatch-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default).
    Serve,
    /// Run a keyword search against the configured catalog and print JSON.
    Search {
        #[arg(value_enum)]
        kind: Kind,
        query: String,
        /// Include the rule that admitted each result.
        #[arg(long)]
        explain: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Clusters,
    Mentors,
}

fn init_tracing(debug: bool, default_filter: &str) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(DEBUG_LOG)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("mentormatch debug log started, tail -f {DEBUG_LOG}");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| EnvFilter::new(default_filter)),
            )
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(cli.debug, &config.log.filter)?;

    let store = open_store(&config)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => mm_server::serve(&config.server, store).await,
        Command::Search {
            kind,
            query,
            explain,
        } => {
            let clusters = store.clusters()?;
            let engine = SearchEngine::new(&clusters);
            let output = match (kind, explain) {
                (Kind::Clusters, false) => serde_json::to_value(engine.search(&query, &clusters))?,
                (Kind::Clusters, true) => explain_json(&engine.explain(&query, &clusters))?,
                (Kind::Mentors, false) => {
                    serde_json::to_value(engine.search(&query, &store.mentors()?))?
                }
                (Kind::Mentors, true) => {
                    let mentors = store.mentors()?;
                    explain_json(&engine.explain(&query, &mentors))?
                }
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
    }
}
