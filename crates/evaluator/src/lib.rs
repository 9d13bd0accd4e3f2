//! Strategy evaluation crate.
//!
//! Evaluates monetization strategies, scores their risks, picks a
//! recommendation and publishes the result to a dashboard.

pub mod dashboard;
pub mod evaluator;
pub mod journal;
pub mod orchestrator;
pub mod recommender;
pub mod risk;

pub use dashboard::{DashboardClient, DryRunDashboard, SUCCESS_STATUS};
pub use evaluator::StrategyEvaluator;
pub use journal::{resolve_journal_dir, Journal, JsonlJournal, MemoryJournal, NullJournal};
pub use orchestrator::{FailureKind, Orchestrator, RunFailure, RunOutcome};
pub use recommender::StrategyRecommender;
pub use risk::{RiskAssessor, DEFAULT_MITIGATION};
