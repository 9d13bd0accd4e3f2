//! HTTP dashboard client.
//!
//! POSTs evaluation payloads as JSON to the ecosystem dashboard and hands the
//! status code back to the orchestrator, which decides what counts as success.

use std::time::Duration;

use async_trait::async_trait;
use common::config::DashboardConfig;
use common::{DashboardPayload, Error};
use evaluator::DashboardClient;
use reqwest::Client;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpDashboardClient {
    client: Client,
    base_url: String,
    ingest_path: String,
    auth_token: Option<String>,
}

impl HttpDashboardClient {
    pub fn new(config: &DashboardConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent("monetization-evaluator/0.1")
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::Http(format!("failed to build dashboard HTTP client: {e}")))?;

        Ok(Self::with_http_client(config, client))
    }

    /// Use a caller-built `reqwest::Client`; `config.timeout_ms` is ignored.
    pub fn with_http_client(config: &DashboardConfig, client: Client) -> Self {
        let auth_token = if config.auth_token_env.trim().is_empty() {
            None
        } else {
            std::env::var(config.auth_token_env.trim()).ok()
        };

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            ingest_path: config.ingest_path.clone(),
            auth_token,
        }
    }

    pub fn ingest_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url,
            self.ingest_path.trim_start_matches('/')
        )
    }

    fn add_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = &self.auth_token {
            req.bearer_auth(token)
        } else {
            req
        }
    }
}

#[async_trait]
impl DashboardClient for HttpDashboardClient {
    async fn send(&self, payload: &DashboardPayload) -> Result<u16, Error> {
        let url = self.ingest_url();
        debug!("Posting payload for {} to {}", payload.recommendation.name, url);

        let resp = self
            .add_auth(self.client.post(&url))
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Http(format!("timed out posting to {url}"))
                } else {
                    Error::Http(format!("HTTP error for {url}: {e}"))
                }
            })?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(500).collect();
            debug!("Dashboard returned {}: {}", status, snippet);
        }
        Ok(status)
    }
}
