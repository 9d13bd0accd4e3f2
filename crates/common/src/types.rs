//! Domain types shared across the evaluator.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── Inputs ────────────────────────────────────────────────────────────

/// A candidate monetization strategy.
///
/// Only `name` and `feasibility` are interpreted; any other attributes are
/// carried through to the dashboard untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StrategyRecord")]
pub struct Strategy {
    pub name: String,
    /// Feasibility score, 0-100 by convention. `None` when the field is
    /// missing or not a number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feasibility: Option<f64>,
    /// Extra fields. A non-numeric `feasibility` is parked here verbatim.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Strategy {
    pub fn new(name: impl Into<String>, feasibility: f64) -> Self {
        Self {
            name: name.into(),
            feasibility: Some(feasibility),
            attributes: Map::new(),
        }
    }
}

/// Wire shape of a strategy before feasibility is interpreted.
#[derive(Deserialize)]
struct StrategyRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    feasibility: Option<Value>,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl From<StrategyRecord> for Strategy {
    fn from(record: StrategyRecord) -> Self {
        let mut attributes = record.attributes;
        let feasibility = match record.feasibility {
            Some(Value::Number(n)) => n.as_f64(),
            Some(other) => {
                attributes.insert("feasibility".into(), other);
                None
            }
            None => None,
        };
        Self {
            name: record.name,
            feasibility,
            attributes,
        }
    }
}

/// An identified risk record. Opaque apart from its size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Risk(pub Value);

impl Risk {
    /// Element count: characters of a string, entries of an array or object.
    /// Scalars have no size.
    pub fn size(&self) -> Option<usize> {
        match &self.0 {
            Value::String(s) => Some(s.chars().count()),
            Value::Array(items) => Some(items.len()),
            Value::Object(fields) => Some(fields.len()),
            Value::Null | Value::Bool(_) | Value::Number(_) => None,
        }
    }

    /// JSON kind name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match &self.0 {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<&str> for Risk {
    fn from(s: &str) -> Self {
        Risk(Value::String(s.to_string()))
    }
}

impl From<Value> for Risk {
    fn from(v: Value) -> Self {
        Risk(v)
    }
}

// ── Results ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
}

/// Risk summary embedded in an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub high_risk: bool,
    pub risks: Vec<Risk>,
}

/// Outcome of evaluating a single strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub status: Status,
    pub evaluation_score: u32,
    pub risk_assessment: RiskSummary,
    pub recommendation: bool,
}

/// Outcome of assessing a list of risks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessmentResult {
    pub status: Status,
    pub risk_score: u64,
    pub mitigation_strategies: Vec<String>,
}

/// What gets published to the dashboard after a successful recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPayload {
    pub evaluation: EvaluationResult,
    pub recommendation: Strategy,
    pub risk_assessment: RiskAssessmentResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strategy_numeric_feasibility() {
        let s: Strategy = serde_json::from_value(json!({"name": "A", "feasibility": 90}))
            .expect("strategy should deserialize");
        assert_eq!(s.name, "A");
        assert_eq!(s.feasibility, Some(90.0));
        assert!(s.attributes.is_empty());
    }

    #[test]
    fn test_strategy_non_numeric_feasibility_is_none() {
        for raw in [json!("high"), json!(null), json!(true), json!([90]), json!({"v": 90})] {
            let s: Strategy = serde_json::from_value(json!({"name": "X", "feasibility": raw}))
                .expect("strategy should deserialize");
            assert_eq!(s.feasibility, None);
        }

        let missing: Strategy =
            serde_json::from_value(json!({"name": "Y"})).expect("strategy should deserialize");
        assert_eq!(missing.feasibility, None);
    }

    #[test]
    fn test_non_numeric_feasibility_survives_reserialization() {
        let raw = json!({"name": "Z", "feasibility": "high", "tier": "pro"});
        let s: Strategy = serde_json::from_value(raw.clone()).expect("strategy should deserialize");
        assert_eq!(s.feasibility, None);

        let back = serde_json::to_value(&s).expect("strategy should serialize");
        assert_eq!(back, raw);
    }

    #[test]
    fn test_strategy_keeps_extra_attributes() {
        let s: Strategy = serde_json::from_value(
            json!({"name": "Ads", "feasibility": 82.5, "channel": "web"}),
        )
        .expect("strategy should deserialize");
        assert_eq!(s.attributes.get("channel"), Some(&json!("web")));

        let back = serde_json::to_value(&s).expect("strategy should serialize");
        assert_eq!(back, json!({"name": "Ads", "feasibility": 82.5, "channel": "web"}));
    }

    #[test]
    fn test_risk_sizes() {
        assert_eq!(Risk::from("ab").size(), Some(2));
        assert_eq!(Risk::from("héllo").size(), Some(5));
        assert_eq!(Risk(json!([1, 2, 3])).size(), Some(3));
        assert_eq!(Risk(json!({"a": 1})).size(), Some(1));
        assert_eq!(Risk(json!(7)).size(), None);
        assert_eq!(Risk(json!(null)).size(), None);
        assert_eq!(Risk(json!(7)).kind(), "number");
    }

    #[test]
    fn test_status_serializes_as_success() {
        assert_eq!(
            serde_json::to_value(Status::Success).expect("status should serialize"),
            json!("success")
        );
    }
}
