//! Strategy recommender: picks the first sufficiently feasible strategy.

use common::config::RecommenderConfig;
use common::{Error, Strategy};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct StrategyRecommender {
    feasibility_threshold: f64,
}

impl StrategyRecommender {
    pub fn new(feasibility_threshold: f64) -> Result<Self, Error> {
        if !feasibility_threshold.is_finite() {
            return Err(Error::InvalidInput(format!(
                "feasibility threshold must be finite, got {feasibility_threshold}"
            )));
        }
        Ok(Self {
            feasibility_threshold,
        })
    }

    pub fn from_config(config: &RecommenderConfig) -> Result<Self, Error> {
        Self::new(config.feasibility_threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.feasibility_threshold
    }

    /// Return the first strategy whose feasibility is strictly above the
    /// threshold. Order matters: earlier entries win ties.
    ///
    /// Strategies without a numeric feasibility never qualify. `None` is a
    /// normal outcome, not an error.
    pub fn recommend<'a>(&self, strategies: &'a [Strategy]) -> Option<&'a Strategy> {
        info!("Recommending from {} strategies", strategies.len());

        for strategy in strategies {
            let Some(feasibility) = strategy.feasibility else {
                debug!("{}: no numeric feasibility, skipping", strategy.name);
                continue;
            };
            if feasibility > self.feasibility_threshold {
                info!(
                    "RECOMMEND: {} (feasibility={} > {})",
                    strategy.name, feasibility, self.feasibility_threshold
                );
                return Some(strategy);
            }
            debug!(
                "{}: feasibility {} <= {}",
                strategy.name, feasibility, self.feasibility_threshold
            );
        }

        None
    }
}

impl Default for StrategyRecommender {
    fn default() -> Self {
        Self {
            feasibility_threshold: RecommenderConfig::default().feasibility_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strategies(raw: serde_json::Value) -> Vec<Strategy> {
        serde_json::from_value(raw).expect("strategies should deserialize")
    }

    #[test]
    fn test_first_qualifying_wins() {
        let list = vec![Strategy::new("A", 90.0), Strategy::new("B", 85.0)];
        let picked = StrategyRecommender::default().recommend(&list);
        assert_eq!(picked, Some(&list[0]));
    }

    #[test]
    fn test_none_when_all_below_threshold() {
        let list = vec![Strategy::new("C", 50.0)];
        assert!(StrategyRecommender::default().recommend(&list).is_none());
        assert!(StrategyRecommender::default().recommend(&[]).is_none());
    }

    #[test]
    fn test_threshold_is_strict() {
        let list = vec![Strategy::new("Edge", 80.0), Strategy::new("Just over", 80.5)];
        let picked = StrategyRecommender::default().recommend(&list).unwrap();
        assert_eq!(picked.name, "Just over");
    }

    #[test]
    fn test_malformed_feasibility_is_skipped() {
        let list = strategies(json!([
            {"name": "Missing"},
            {"name": "Text", "feasibility": "95"},
            {"name": "Null", "feasibility": null},
            {"name": "Real", "feasibility": 81}
        ]));
        let picked = StrategyRecommender::default().recommend(&list).unwrap();
        assert_eq!(picked.name, "Real");
    }

    #[test]
    fn test_custom_threshold() {
        let list = vec![Strategy::new("Low", 40.0), Strategy::new("Mid", 60.0)];
        let recommender = StrategyRecommender::new(50.0).unwrap();
        assert_eq!(recommender.recommend(&list).unwrap().name, "Mid");
    }

    #[test]
    fn test_non_finite_threshold_rejected() {
        assert!(StrategyRecommender::new(f64::NAN).is_err());
        assert!(StrategyRecommender::new(f64::INFINITY).is_err());
    }
}
