//! Support queries submitted through the contact form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecosankalp_core::{QueryId, QueryStatus};

/// A support ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub id: QueryId,
    /// Submitter's name.
    pub name: String,
    /// Submitter's email, kept as entered once validated.
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub status: QueryStatus,
}

/// Contact form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
