//! monetization-evaluator: evaluate, assess, recommend, publish.
//!
//! Single-shot Tokio application that:
//! 1. Loads candidate strategies from config (or a JSON file)
//! 2. Evaluates the first strategy and assesses its risks
//! 3. Recommends the first strategy above the feasibility threshold
//! 4. Publishes the result to the ecosystem dashboard

mod config;

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, warn};

use dashboard_client::HttpDashboardClient;
use evaluator::{
    resolve_journal_dir, DashboardClient, DryRunDashboard, Journal, JsonlJournal, NullJournal,
    Orchestrator, RunOutcome, StrategyRecommender,
};

/// Monetization strategy evaluator
#[derive(Parser)]
#[command(
    name = "monetization-evaluator",
    about = "Evaluate monetization strategies and publish a recommendation"
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// JSON array of strategies, replacing the configured list.
    #[arg(long)]
    strategies: Option<PathBuf>,

    /// Log the dashboard payload instead of sending it.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "monetization_evaluator=info,evaluator=info,dashboard_client=info".into()
            }),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let cfg = match config::load_config(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let strategies = match &cli.strategies {
        Some(path) => match config::load_strategies(path) {
            Ok(s) => s,
            Err(e) => {
                error!("Failed to load strategies from {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => cfg.strategies.clone(),
    };

    let recommender = match StrategyRecommender::from_config(&cfg.recommender) {
        Ok(r) => r,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let dashboard: Box<dyn DashboardClient> = if cli.dry_run {
        info!("Dry run: dashboard payloads will only be logged");
        Box::new(DryRunDashboard)
    } else {
        match HttpDashboardClient::new(&cfg.dashboard) {
            Ok(client) => {
                info!("Dashboard endpoint: {}", client.ingest_url());
                Box::new(client)
            }
            Err(e) => {
                error!("Dashboard client error: {}", e);
                std::process::exit(1);
            }
        }
    };

    let journal: Box<dyn Journal> = if cfg.journal.enabled {
        let dir = resolve_journal_dir(&cfg.journal.dir);
        match JsonlJournal::open(dir.clone()) {
            Ok(j) => {
                info!("Run journal: {}", j.dir().display());
                Box::new(j)
            }
            Err(e) => {
                warn!("Journal disabled, cannot open {}: {}", dir.display(), e);
                Box::new(NullJournal)
            }
        }
    } else {
        Box::new(NullJournal)
    };

    info!(
        "Evaluating {} strategies (feasibility threshold {})",
        strategies.len(),
        recommender.threshold()
    );

    let mut orchestrator = Orchestrator::new(recommender, dashboard, journal);
    match orchestrator.run(&strategies).await {
        Ok(RunOutcome::Published(payload)) => {
            info!(
                "Recommended {} (risk score {}), published to dashboard",
                payload.recommendation.name, payload.risk_assessment.risk_score
            );
        }
        Ok(RunOutcome::NoRecommendation { risk_assessment, .. }) => {
            info!(
                "No strategy recommended (risk score {})",
                risk_assessment.risk_score
            );
        }
        Err(failure) => {
            error!("Evaluation run failed: {}", failure);
            std::process::exit(1);
        }
    }
}
