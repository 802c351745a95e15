//! Waste reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecosankalp_core::{ReportId, ReportStatus, Severity, UserId};

/// A point on the map with its street address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Human-readable address.
    pub address: String,
}

/// A citizen's report of a waste site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteReport {
    pub id: ReportId,
    /// Reporting user.
    pub user_id: UserId,
    /// Reporter's display name at submission time.
    pub user_name: String,
    pub image_url: String,
    pub location: GeoLocation,
    pub description: String,
    pub severity: Severity,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    /// Set when the report reaches `verified`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,
    /// Set when the report reaches `cleaned`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleaned_at: Option<DateTime<Utc>>,
}

/// What a citizen fills in when reporting a site.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDraft {
    pub image_url: String,
    pub location: GeoLocation,
    pub description: String,
    pub severity: Severity,
}
