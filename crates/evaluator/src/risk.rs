//! Risk assessor: scores a list of risk records.

use common::{Error, Risk, RiskAssessmentResult, Status};
use tracing::{info, warn};

/// Mitigation advice returned for every assessment.
pub const DEFAULT_MITIGATION: &str = "Mitigate each risk identified";

#[derive(Debug, Clone, Default)]
pub struct RiskAssessor;

impl RiskAssessor {
    pub fn new() -> Self {
        Self
    }

    /// Score `risks` as the sum of their sizes.
    ///
    /// Returns `Err(Error::Assessment)` for the first risk without a size.
    pub fn assess(&self, risks: &[Risk]) -> Result<RiskAssessmentResult, Error> {
        info!("Assessing {} risks", risks.len());

        let mut risk_score = 0u64;
        for (idx, risk) in risks.iter().enumerate() {
            let Some(size) = risk.size() else {
                warn!("Risk #{} has no size ({})", idx, risk.kind());
                return Err(Error::Assessment(format!(
                    "risk #{} is a {} and has no size",
                    idx,
                    risk.kind()
                )));
            };
            risk_score += size as u64;
        }

        Ok(RiskAssessmentResult {
            status: Status::Success,
            risk_score,
            mitigation_strategies: vec![DEFAULT_MITIGATION.to_string()],
        })
    }
}
