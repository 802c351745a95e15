//! Read-only figures.

use tracing::info;

use ecosankalp_core::FacilityType;
use ecosankalp_store::DomainStore;

pub fn stats(store: &DomainStore) {
    let live = store.live_stats();
    info!(
        "Platform: {} reported, {} treated, {} active users, {} trees planted",
        live.waste_reported, live.waste_treated, live.active_users, live.trees_planted
    );

    let reports = store.report_stats();
    info!(
        "Reports: {} total, {} pending, {} verified, {} cleaned",
        reports.total, reports.pending, reports.verified, reports.cleaned
    );
    info!("Open tickets: {}", store.open_query_count());
    for (status, count) in store.order_status_counts() {
        info!("Orders {}: {count}", status.label());
    }

    if let Some(dash) = store.dashboard() {
        info!(
            "You: {} points, level {} ({}), {} reports, {} modules done, training {}%",
            dash.green_points,
            dash.level,
            dash.level_title,
            dash.reports.total,
            dash.completed_modules,
            dash.training_progress
        );
    }
}

pub fn facilities(store: &DomainStore, facility_type: Option<FacilityType>) {
    let facilities = store
        .facilities()
        .iter()
        .filter(|f| facility_type.is_none_or(|t| f.facility_type == t));
    for f in facilities {
        info!(
            "{} {} [{}] {} | {} | {}",
            f.id, f.name, f.facility_type, f.location.address, f.phone, f.hours
        );
    }
}
