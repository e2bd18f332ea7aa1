//! Admin dashboard summary counts.

use serde::{Deserialize, Serialize};

use crate::config::AdminConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::Client;
use crate::session::Session;

/// Message shown when the stats request fails.
pub const STATS_FAILURE: &str = "Failed to load dashboard stats.";

/// Counts from `/admin-dashboard-stats/`. Non-staff accounts get a 403.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_vendors: i64,
    pub total_ngos: i64,
    pub total_bags: i64,
    pub donated_bags: i64,
    pub total_reservations: i64,
}

/// GET `/api/admin-dashboard-stats/`
pub async fn fetch_dashboard_stats(
    config: &AdminConfig,
    session: &Session,
) -> ApiResult<DashboardStats> {
    let credential = session.require()?;
    let url = format!("{}/admin-dashboard-stats/", config.api_url());

    let response = Client::get(&url)
        .bearer(Some(credential.access.as_str()))
        .send()
        .await?;

    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }

    response
        .json()
        .map_err(|e| ApiError::decode(format!("Failed to parse DashboardStats: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_stats_payload() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{
                "total_users": 120,
                "total_vendors": 14,
                "total_ngos": 6,
                "total_bags": 87,
                "donated_bags": 19,
                "total_reservations": 230
            }"#,
        )
        .unwrap();

        assert_eq!(stats.total_users, 120);
        assert_eq!(stats.donated_bags, 19);
    }
}
