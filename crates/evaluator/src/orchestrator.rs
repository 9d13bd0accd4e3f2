//! Orchestration: evaluate, assess, recommend, publish.
//!
//! One run per call. Failures from any step come back as a `RunFailure`
//! instead of propagating; "no recommendation" is a successful run that
//! never touches the dashboard.

use common::{DashboardPayload, Error, EvaluationResult, RiskAssessmentResult, Strategy};
use serde::Serialize;
use serde_json::json;
use tracing::{error, info, warn};

use crate::dashboard::{DashboardClient, SUCCESS_STATUS};
use crate::evaluator::StrategyEvaluator;
use crate::journal::{now_iso, Journal};
use crate::recommender::StrategyRecommender;
use crate::risk::RiskAssessor;

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    /// A strategy was recommended and the dashboard accepted the payload.
    Published(DashboardPayload),
    /// Nothing qualified; the dashboard was not contacted.
    NoRecommendation {
        evaluation: EvaluationResult,
        risk_assessment: RiskAssessmentResult,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InvalidInput,
    Assessment,
    Integration,
}

/// Structured reason a run failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&Error> for RunFailure {
    fn from(e: &Error) -> Self {
        let kind = match e {
            Error::Assessment(_) => FailureKind::Assessment,
            Error::Integration(_) | Error::Http(_) => FailureKind::Integration,
            Error::InvalidInput(_) | Error::Config(_) | Error::Json(_) | Error::Io(_) => {
                FailureKind::InvalidInput
            }
        };
        Self {
            kind,
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for RunFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

pub struct Orchestrator {
    evaluator: StrategyEvaluator,
    assessor: RiskAssessor,
    recommender: StrategyRecommender,
    dashboard: Box<dyn DashboardClient>,
    journal: Box<dyn Journal>,
}

impl Orchestrator {
    pub fn new(
        recommender: StrategyRecommender,
        dashboard: Box<dyn DashboardClient>,
        journal: Box<dyn Journal>,
    ) -> Self {
        Self {
            evaluator: StrategyEvaluator::new(),
            assessor: RiskAssessor::new(),
            recommender,
            dashboard,
            journal,
        }
    }

    /// Run once and report failures as data.
    pub async fn run(&mut self, strategies: &[Strategy]) -> Result<RunOutcome, RunFailure> {
        match self.try_run(strategies).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                let failure = RunFailure::from(&e);
                error!("Run failed: {}", failure);
                self.journal.write_event(json!({
                    "ts": now_iso(),
                    "event": "run_failed",
                    "failure": failure,
                }));
                Err(failure)
            }
        }
    }

    /// Same flow as [`Orchestrator::run`], returning the underlying error.
    pub async fn try_run(&mut self, strategies: &[Strategy]) -> Result<RunOutcome, Error> {
        self.journal.write_event(json!({
            "ts": now_iso(),
            "event": "run_started",
            "strategies": strategies.len(),
        }));

        let first = strategies
            .first()
            .ok_or_else(|| Error::InvalidInput("no strategies to evaluate".into()))?;

        let evaluation = self.evaluator.evaluate(first)?;
        self.journal.write_event(json!({
            "ts": now_iso(),
            "event": "strategy_evaluated",
            "strategy": first.name,
            "evaluation": evaluation,
        }));

        let risk_assessment = self.assessor.assess(&evaluation.risk_assessment.risks)?;
        self.journal.write_event(json!({
            "ts": now_iso(),
            "event": "risks_assessed",
            "risk_score": risk_assessment.risk_score,
        }));

        let Some(recommendation) = self.recommender.recommend(strategies) else {
            info!(
                "No strategy above feasibility {}; skipping dashboard",
                self.recommender.threshold()
            );
            self.journal.write_event(json!({
                "ts": now_iso(),
                "event": "no_recommendation",
                "threshold": self.recommender.threshold(),
            }));
            return Ok(RunOutcome::NoRecommendation {
                evaluation,
                risk_assessment,
            });
        };
        self.journal.write_event(json!({
            "ts": now_iso(),
            "event": "strategy_recommended",
            "strategy": recommendation,
        }));

        let payload = DashboardPayload {
            evaluation,
            recommendation: recommendation.clone(),
            risk_assessment,
        };

        let status = self.dashboard.send(&payload).await.map_err(|e| {
            warn!("Dashboard unreachable: {}", e);
            Error::Integration(format!("dashboard unreachable: {e}"))
        })?;
        if status != SUCCESS_STATUS {
            return Err(Error::Integration(format!(
                "dashboard returned status {status}"
            )));
        }

        info!("Published recommendation {} to dashboard", payload.recommendation.name);
        self.journal.write_event(json!({
            "ts": now_iso(),
            "event": "dashboard_published",
            "strategy": payload.recommendation.name,
            "status": status,
        }));

        Ok(RunOutcome::Published(payload))
    }
}
