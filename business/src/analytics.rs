//! Typed analytics payloads.
//!
//! The backend guards every analytics endpoint with the staff permission,
//! but the original console fetched them through an ambient interceptor that
//! attached the bearer whenever one existed. [`AdminConfig::analytics_auth`]
//! makes that choice explicit: true (the default) sends the token when the
//! session has one, false sends none.
//!
//! Date- and name-keyed maps use `BTreeMap` so tables come out in a stable
//! order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::AdminConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::Client;
use crate::session::Session;

/// Reservation volume per vendor, from `/vendor-analytics/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorActivity {
    pub name: String,
    pub reservations: i64,
}

/// Ratings summary per vendor, from `/review-analytics/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewAnalytics {
    pub avg_ratings: BTreeMap<String, f64>,
    pub review_counts: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationStatusCounts {
    pub collected: i64,
    pub not_collected: i64,
}

/// Thirty-day reservation trends, from `/reservation-analytics/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationAnalytics {
    /// ISO date -> reservation count.
    pub daily_counts: BTreeMap<String, i64>,
    pub paid: i64,
    pub unpaid: i64,
    pub status_counts: ReservationStatusCounts,
}

/// Bag inventory summary, from `/bag-analytics/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BagAnalytics {
    pub active: i64,
    pub expired: i64,
    pub bags_per_vendor: BTreeMap<String, i64>,
}

/// User population summary, from `/user-analytics/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAnalytics {
    pub role_counts: BTreeMap<String, i64>,
    pub ngo_regions: BTreeMap<String, i64>,
    /// ISO date -> signups that day, last thirty days.
    pub new_users: BTreeMap<String, i64>,
}

async fn fetch<T: serde::de::DeserializeOwned>(
    config: &AdminConfig,
    session: &Session,
    endpoint: &str,
    shape: &str,
) -> ApiResult<T> {
    let url = format!("{}/{endpoint}/", config.api_url());

    let token = if config.analytics_auth {
        session.access_token()
    } else {
        None
    };

    let response = Client::get(&url).bearer(token).send().await?;

    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }

    response
        .json()
        .map_err(|e| ApiError::decode(format!("Failed to parse {shape}: {e}")))
}

/// GET `/api/vendor-analytics/`
pub async fn fetch_vendor_analytics(
    config: &AdminConfig,
    session: &Session,
) -> ApiResult<Vec<VendorActivity>> {
    fetch(config, session, "vendor-analytics", "VendorActivity list").await
}

/// GET `/api/review-analytics/`
pub async fn fetch_review_analytics(
    config: &AdminConfig,
    session: &Session,
) -> ApiResult<ReviewAnalytics> {
    fetch(config, session, "review-analytics", "ReviewAnalytics").await
}

/// GET `/api/reservation-analytics/`
pub async fn fetch_reservation_analytics(
    config: &AdminConfig,
    session: &Session,
) -> ApiResult<ReservationAnalytics> {
    fetch(config, session, "reservation-analytics", "ReservationAnalytics").await
}

/// GET `/api/bag-analytics/`
pub async fn fetch_bag_analytics(
    config: &AdminConfig,
    session: &Session,
) -> ApiResult<BagAnalytics> {
    fetch(config, session, "bag-analytics", "BagAnalytics").await
}

/// GET `/api/user-analytics/`
pub async fn fetch_user_analytics(
    config: &AdminConfig,
    session: &Session,
) -> ApiResult<UserAnalytics> {
    fetch(config, session, "user-analytics", "UserAnalytics").await
}
