//! Waste report submission and the `pending -> verified -> cleaned` lifecycle.

use chrono::Utc;
use tracing::{info, instrument};

use ecosankalp_core::{ReportId, ReportStatus};

use super::{DomainStore, require_non_empty};
use crate::error::{Result, StoreError};
use crate::models::{ReportDraft, WasteReport};
use crate::storage::Slot;

impl DomainStore {
    /// File a report as the signed-in user and credit the report award.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AuthRequired` without a session, or
    /// `StoreError::Validation` if the description or address is blank.
    #[instrument(skip(self, draft), fields(severity = %draft.severity))]
    pub fn submit_report(&mut self, draft: ReportDraft) -> Result<WasteReport> {
        let award = self.rewards.report_award;
        let user = self.user.as_ref().ok_or(StoreError::AuthRequired)?;
        require_non_empty("description", &draft.description)?;
        require_non_empty("address", &draft.location.address)?;

        let report = WasteReport {
            id: ReportId::generate(),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            image_url: draft.image_url,
            location: draft.location,
            description: draft.description,
            severity: draft.severity,
            status: ReportStatus::Pending,
            created_at: Utc::now(),
            verified_at: None,
            cleaned_at: None,
        };
        self.reports.push(report.clone());

        let user = self.require_user()?;
        user.award(award);
        info!(
            report_id = %report.id,
            user_id = %user.id,
            green_points = user.green_points,
            "Report submitted"
        );
        self.persist(Slot::User);

        Ok(report)
    }

    /// Move a report along its lifecycle, stamping the matching timestamp.
    ///
    /// Re-applying the current status changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id, or
    /// `StoreError::InvalidTransition` for anything but a single step forward.
    #[instrument(skip(self), fields(report_id = %id, to = %status))]
    pub fn set_report_status(&mut self, id: &ReportId, status: ReportStatus) -> Result<()> {
        let report = self
            .reports
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| StoreError::not_found("report", id))?;

        if report.status == status {
            return Ok(());
        }
        if !report.status.can_transition_to(status) {
            return Err(StoreError::invalid_transition("report", report.status, status));
        }

        let now = Utc::now();
        match status {
            ReportStatus::Verified => report.verified_at = Some(now),
            ReportStatus::Cleaned => report.cleaned_at = Some(now),
            ReportStatus::Pending => {}
        }
        info!(from = %report.status, "Report status updated");
        report.status = status;
        Ok(())
    }
}
