//! Strategy evaluator.
//!
//! No business rules exist yet, so every well-formed strategy receives the
//! same result.

use common::{Error, EvaluationResult, RiskSummary, Status, Strategy};
use tracing::info;

const PLACEHOLDER_SCORE: u32 = 95;

#[derive(Debug, Clone, Default)]
pub struct StrategyEvaluator;

impl StrategyEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a single strategy.
    ///
    /// Fails with `InvalidInput` when the strategy has no name.
    pub fn evaluate(&self, strategy: &Strategy) -> Result<EvaluationResult, Error> {
        if strategy.name.trim().is_empty() {
            return Err(Error::InvalidInput("strategy name must not be empty".into()));
        }

        info!("Evaluating strategy: {}", strategy.name);

        Ok(EvaluationResult {
            status: Status::Success,
            evaluation_score: PLACEHOLDER_SCORE,
            risk_assessment: RiskSummary {
                high_risk: false,
                risks: Vec::new(),
            },
            recommendation: true,
        })
    }
}
