//! Training chain overview.

use tracing::info;

use ecosankalp_store::DomainStore;

pub fn show(store: &DomainStore) {
    for module in store.training_modules() {
        let state = if module.is_completed {
            "done"
        } else if module.is_locked {
            "locked"
        } else {
            "next"
        };
        info!(
            "[{state:<6}] {} {} ({}, {}, {} quiz questions)",
            module.id,
            module.title,
            module.module_type,
            module.duration,
            module.quiz.len()
        );
    }
    info!("Progress: {}%", store.training_progress());
}
