//! Derived figures computed from the canonical collections.
//!
//! Nothing here is stored; every value is recomputed on read.

use serde::Serialize;

use ecosankalp_core::{OrderStatus, QueryStatus, ReportStatus};

use crate::models::{Order, TrainingModule, User, UserQuery, WasteReport};

/// Report counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total: usize,
    pub pending: usize,
    pub verified: usize,
    pub cleaned: usize,
}

/// Count reports by status.
pub fn report_stats<'a>(reports: impl IntoIterator<Item = &'a WasteReport>) -> ReportStats {
    reports
        .into_iter()
        .fold(ReportStats::default(), |mut stats, report| {
            stats.total += 1;
            match report.status {
                ReportStatus::Pending => stats.pending += 1,
                ReportStatus::Verified => stats.verified += 1,
                ReportStatus::Cleaned => stats.cleaned += 1,
            }
            stats
        })
}

/// Percentage of completed modules, rounded half up. An empty chain is 0.
#[must_use]
pub fn training_progress(modules: &[TrainingModule]) -> u8 {
    let total = modules.len();
    if total == 0 {
        return 0;
    }
    let completed = modules.iter().filter(|m| m.is_completed).count();
    let percent = (200 * completed + total) / (2 * total);
    u8::try_from(percent).unwrap_or(100)
}

/// Tickets still awaiting an answer.
#[must_use]
pub fn open_query_count(queries: &[UserQuery]) -> usize {
    queries
        .iter()
        .filter(|q| q.status == QueryStatus::Open)
        .count()
}

/// Orders per status, in [`OrderStatus::ALL`] order.
#[must_use]
pub fn order_status_counts(orders: &[Order]) -> Vec<(OrderStatus, usize)> {
    OrderStatus::ALL
        .into_iter()
        .map(|status| (status, orders.iter().filter(|o| o.status == status).count()))
        .collect()
}

/// Figures on a user's dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub green_points: u32,
    pub level: u32,
    pub level_title: &'static str,
    /// Only the user's own reports.
    pub reports: ReportStats,
    pub completed_modules: usize,
    pub training_progress: u8,
}

/// Dashboard figures for `user`.
#[must_use]
pub fn dashboard(user: &User, reports: &[WasteReport], modules: &[TrainingModule]) -> DashboardStats {
    DashboardStats {
        green_points: user.green_points,
        level: user.level,
        level_title: user.level_title(),
        reports: report_stats(reports.iter().filter(|r| r.user_id == user.id)),
        completed_modules: modules.iter().filter(|m| m.is_completed).count(),
        training_progress: training_progress(modules),
    }
}
