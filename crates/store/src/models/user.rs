//! Session user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecosankalp_core::{Email, UserId, UserRole};

/// Titles shown next to a user's level, lowest first.
pub const LEVEL_TITLES: [&str; 5] = [
    "Beginner",
    "Waste Warrior",
    "Eco Champion",
    "Green Legend",
    "Earth Guardian",
];

/// The active session user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque user id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Platform role.
    pub role: UserRole,
    /// Green Points balance.
    pub green_points: u32,
    /// Level, starting at 1.
    pub level: u32,
    /// Set once every training module is completed.
    pub training_completed: bool,
    /// When the account joined.
    #[serde(rename = "joinedDate")]
    pub joined_at: DateTime<Utc>,
}

impl User {
    /// Credit Green Points to the balance.
    pub const fn award(&mut self, points: u32) {
        self.green_points = self.green_points.saturating_add(points);
    }

    /// Title for the user's level; levels past the last title keep it.
    #[must_use]
    pub fn level_title(&self) -> &'static str {
        let index = usize::try_from(self.level.saturating_sub(1)).unwrap_or(usize::MAX);
        LEVEL_TITLES
            .get(index)
            .or_else(|| LEVEL_TITLES.last())
            .copied()
            .unwrap_or_default()
    }
}
