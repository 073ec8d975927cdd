// src/main.rs
// OpenAlgo UI probe - smoke-tests a running frontend, or serves the
// preview pages for manual inspection.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use openalgo_probe::config::{ProbeConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use openalgo_probe::preview;
use openalgo_probe::probe::{run_all_checks, ProbeClient};

#[derive(Parser)]
#[command(name = "openalgo-probe")]
#[command(about = "Smoke-test probe and preview server for the OpenAlgo UI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe a running frontend (default)
    Check {
        /// Base URL of the target application
        #[arg(long, env = "OPENALGO_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,

        /// Also print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the preview pages for manual inspection
    Preview {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 5000)]
        port: u16,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Check {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            json: false,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Commands::Check {
            base_url,
            timeout_secs,
            json,
        } => {
            let config = ProbeConfig::new(&base_url, timeout_secs)?;
            let client = ProbeClient::new(config)?;

            let report = run_all_checks(&client).await;
            report.print_summary();

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }

            // Exit code is the run's only externally visible outcome
            if !report.is_success() {
                std::process::exit(1);
            }
        }
        Commands::Preview { host, port } => {
            preview::serve(&host, port).await?;
        }
    }

    Ok(())
}
