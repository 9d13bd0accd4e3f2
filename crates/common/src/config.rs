//! Evaluator configuration types.

use serde::{Deserialize, Serialize};

use crate::types::Strategy;

/// Top-level evaluator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Candidate strategies, in priority order.
    #[serde(default = "default_strategies")]
    pub strategies: Vec<Strategy>,

    /// Recommendation parameters.
    #[serde(default)]
    pub recommender: RecommenderConfig,

    /// Dashboard endpoint settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Run journal settings.
    #[serde(default)]
    pub journal: JournalConfig,
}

/// Recommendation thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// A strategy qualifies when its feasibility is strictly above this.
    #[serde(default = "default_feasibility_threshold")]
    pub feasibility_threshold: f64,
}

/// Where and how results are published.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_dashboard_base_url")]
    pub base_url: String,

    #[serde(default = "default_dashboard_ingest_path")]
    pub ingest_path: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_dashboard_timeout")]
    pub timeout_ms: u64,

    /// Name of the env var holding a bearer token. Empty disables auth.
    #[serde(default)]
    pub auth_token_env: String,
}

/// Run journal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Output directory. Empty means "resolve from the repo root".
    #[serde(default)]
    pub dir: String,
}

// ── Defaults ──────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}

fn default_feasibility_threshold() -> f64 {
    80.0
}

fn default_dashboard_base_url() -> String {
    "http://127.0.0.1:8787".into()
}
fn default_dashboard_ingest_path() -> String {
    "/dashboard/ingest".into()
}
fn default_dashboard_timeout() -> u64 {
    2_000
}

fn default_strategies() -> Vec<Strategy> {
    vec![
        Strategy::new("Strategy A", 90.0),
        Strategy::new("Strategy B", 85.0),
    ]
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            feasibility_threshold: default_feasibility_threshold(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: default_dashboard_base_url(),
            ingest_path: default_dashboard_ingest_path(),
            timeout_ms: default_dashboard_timeout(),
            auth_token_env: String::new(),
        }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: String::new(),
        }
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            strategies: default_strategies(),
            recommender: RecommenderConfig::default(),
            dashboard: DashboardConfig::default(),
            journal: JournalConfig::default(),
        }
    }
}
