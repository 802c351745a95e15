//! Waste report commands.

use tracing::info;

use ecosankalp_core::Severity;
use ecosankalp_store::DomainStore;
use ecosankalp_store::models::{GeoLocation, ReportDraft, WasteReport};

/// Fields of `eco report submit`.
pub struct SubmitArgs {
    pub description: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub severity: Severity,
    pub image: String,
}

pub fn submit(store: &mut DomainStore, args: SubmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let report = store.submit_report(ReportDraft {
        image_url: args.image,
        location: GeoLocation {
            lat: args.lat,
            lng: args.lng,
            address: args.address,
        },
        description: args.description,
        severity: args.severity,
    })?;
    let points = store.user().map_or(0, |u| u.green_points);
    info!(
        "Report {} filed ({} severity). Balance: {} Green Points",
        report.id, report.severity, points
    );
    Ok(())
}

pub fn list(store: &DomainStore, mine: bool) -> Result<(), Box<dyn std::error::Error>> {
    let reports: Vec<&WasteReport> = if mine {
        let user = store.user().ok_or_else(super::not_signed_in)?;
        store.reports_for_user(&user.id).collect()
    } else {
        store.reports().collect()
    };

    if reports.is_empty() {
        info!("No reports");
    }
    for r in reports {
        info!(
            "{:<6} {:<9} {:<6} {} - {} ({})",
            r.id.as_str(),
            r.status.as_str(),
            r.severity.as_str(),
            r.created_at.format("%Y-%m-%d"),
            r.description,
            r.location.address
        );
    }
    Ok(())
}
