//! Dashboard client interface.
//!
//! The evaluator only consumes this trait; transports live in their own
//! crates.

use async_trait::async_trait;
use common::{DashboardPayload, Error};
use tracing::info;

/// Status code the dashboard returns for an accepted payload.
pub const SUCCESS_STATUS: u16 = 200;

#[async_trait]
pub trait DashboardClient: Send + Sync {
    /// Deliver `payload` once and return the dashboard's status code.
    ///
    /// `Err` means the dashboard could not be reached at all.
    async fn send(&self, payload: &DashboardPayload) -> Result<u16, Error>;
}

/// Logs payloads instead of sending them. Always reports success.
#[derive(Debug, Clone, Default)]
pub struct DryRunDashboard;

#[async_trait]
impl DashboardClient for DryRunDashboard {
    async fn send(&self, payload: &DashboardPayload) -> Result<u16, Error> {
        let body = serde_json::to_string(payload)?;
        info!("[DRY RUN] Would publish to dashboard: {}", body);
        Ok(SUCCESS_STATUS)
    }
}
