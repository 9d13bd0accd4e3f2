//! Configuration loader: merges .env file, config.toml, and env vars.

use std::path::Path;

use common::{Error, EvaluatorConfig, Strategy};

fn parse_bool(raw: &str) -> bool {
    let lowered = raw.trim().to_ascii_lowercase();
    lowered != "0" && lowered != "false" && lowered != "no" && lowered != "off"
}

fn parse_positive_u64(raw: &str, env_name: &str) -> Result<u64, Error> {
    let parsed = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| Error::Config(format!("{env_name} must be an integer > 0")))?;
    if parsed == 0 {
        return Err(Error::Config(format!("{env_name} must be an integer > 0")));
    }
    Ok(parsed)
}

fn parse_finite_f64(raw: &str, env_name: &str) -> Result<f64, Error> {
    let parsed = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::Config(format!("{env_name} must be a number")))?;
    if !parsed.is_finite() {
        return Err(Error::Config(format!("{env_name} must be finite")));
    }
    Ok(parsed)
}

pub fn validate_config(config: &EvaluatorConfig) -> Result<(), Error> {
    let mut issues: Vec<String> = Vec::new();

    if config.strategies.is_empty() {
        issues.push("strategies must contain at least one strategy".into());
    }
    if !config.recommender.feasibility_threshold.is_finite() {
        issues.push("recommender.feasibility_threshold must be finite".into());
    }

    let base_url = config.dashboard.base_url.trim();
    if base_url.is_empty() {
        issues.push("dashboard.base_url must not be empty".into());
    } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        issues.push("dashboard.base_url must start with http:// or https://".into());
    }
    if config.dashboard.timeout_ms == 0 {
        issues.push("dashboard.timeout_ms must be > 0".into());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "Invalid config:\n - {}",
            issues.join("\n - ")
        )))
    }
}

/// Apply env-var overrides. `lookup` stands in for `std::env::var`.
pub fn apply_env_overrides<F>(config: &mut EvaluatorConfig, lookup: F) -> Result<(), Error>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DASHBOARD_URL") {
        config.dashboard.base_url = url.trim().to_string();
    }
    if let Some(path) = lookup("DASHBOARD_INGEST_PATH") {
        config.dashboard.ingest_path = path.trim().to_string();
    }
    if let Some(raw) = lookup("DASHBOARD_TIMEOUT_MS") {
        config.dashboard.timeout_ms = parse_positive_u64(&raw, "DASHBOARD_TIMEOUT_MS")?;
    }
    if let Some(raw) = lookup("FEASIBILITY_THRESHOLD") {
        config.recommender.feasibility_threshold =
            parse_finite_f64(&raw, "FEASIBILITY_THRESHOLD")?;
    }
    if let Some(raw) = lookup("JOURNAL_ENABLED") {
        config.journal.enabled = parse_bool(&raw);
    }
    if let Some(dir) = lookup("JOURNAL_DIR") {
        config.journal.dir = dir;
    }
    Ok(())
}

/// Load configuration from `.env`, the optional TOML file, and environment.
pub fn load_config(path: &Path) -> Result<EvaluatorConfig, Error> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }

    let mut config = EvaluatorConfig::default();

    if path.exists() {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
    } else {
        tracing::debug!("{} not found, using defaults", path.display());
    }

    apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;
    validate_config(&config)?;

    Ok(config)
}

/// Read a JSON array of strategies.
pub fn load_strategies(path: &Path) -> Result<Vec<Strategy>, Error> {
    let contents = std::fs::read_to_string(path)?;
    let strategies: Vec<Strategy> = serde_json::from_str(&contents)?;
    if strategies.is_empty() {
        return Err(Error::InvalidInput(format!(
            "{} contains no strategies",
            path.display()
        )));
    }
    Ok(strategies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = EvaluatorConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.strategies.len(), 2);
        assert_eq!(config.recommender.feasibility_threshold, 80.0);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let raw = r#"
            [recommender]
            feasibility_threshold = 70

            [dashboard]
            base_url = "https://dash.example.com"
            timeout_ms = 500

            [[strategies]]
            name = "Subscriptions"
            feasibility = 75
            tier = "pro"
        "#;
        let config: EvaluatorConfig = toml::from_str(raw).expect("config should parse");

        assert_eq!(config.recommender.feasibility_threshold, 70.0);
        assert_eq!(config.dashboard.base_url, "https://dash.example.com");
        assert_eq!(config.dashboard.ingest_path, "/dashboard/ingest");
        assert_eq!(config.strategies.len(), 1);
        assert_eq!(config.strategies[0].feasibility, Some(75.0));
        assert!(config.journal.enabled);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = EvaluatorConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[
                ("DASHBOARD_URL", " http://10.0.0.5:9000 "),
                ("DASHBOARD_TIMEOUT_MS", "750"),
                ("FEASIBILITY_THRESHOLD", "65.5"),
                ("JOURNAL_ENABLED", "off"),
            ]),
        )
        .unwrap();

        assert_eq!(config.dashboard.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.dashboard.timeout_ms, 750);
        assert_eq!(config.recommender.feasibility_threshold, 65.5);
        assert!(!config.journal.enabled);
    }

    #[test]
    fn test_bad_env_values_rejected() {
        let mut config = EvaluatorConfig::default();
        assert!(apply_env_overrides(&mut config, env(&[("DASHBOARD_TIMEOUT_MS", "0")])).is_err());
        assert!(apply_env_overrides(&mut config, env(&[("FEASIBILITY_THRESHOLD", "high")])).is_err());
        assert!(apply_env_overrides(&mut config, env(&[("FEASIBILITY_THRESHOLD", "inf")])).is_err());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let mut config = EvaluatorConfig::default();
        config.strategies.clear();
        config.dashboard.base_url = "ftp://nope".into();
        config.dashboard.timeout_ms = 0;

        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("strategies"));
        assert!(err.contains("base_url"));
        assert!(err.contains("timeout_ms"));
    }

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_strategies_reads_array() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(
            &tmp,
            "strategies.json",
            r#"[{"name": "Ads", "feasibility": 70}, {"name": "Tiers", "feasibility": 88}]"#,
        );

        let strategies = load_strategies(&path).unwrap();
        assert_eq!(strategies.len(), 2);
        assert_eq!(strategies[1].name, "Tiers");
        assert_eq!(strategies[1].feasibility, Some(88.0));
    }

    #[test]
    fn test_load_strategies_empty_array_is_invalid_input() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "empty.json", "[]");

        assert!(matches!(load_strategies(&path), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_load_strategies_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "broken.json", r#"[{"name": "Ads", "#);

        assert!(matches!(load_strategies(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_load_strategies_keeps_non_numeric_feasibility() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(
            &tmp,
            "mixed.json",
            r#"[{"name": "Vague", "feasibility": "high"}, {"name": "Solid", "feasibility": 92}]"#,
        );

        let strategies = load_strategies(&path).expect("non-numeric feasibility should not fail the load");
        assert_eq!(strategies.len(), 2);
        assert_eq!(strategies[0].feasibility, None);
        assert_eq!(strategies[1].feasibility, Some(92.0));
    }

    #[test]
    fn test_load_strategies_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.json");

        assert!(matches!(load_strategies(&missing), Err(Error::Io(_))));
    }
}
