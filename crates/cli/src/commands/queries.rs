//! Support ticket commands.

use tracing::info;

use ecosankalp_core::QueryId;
use ecosankalp_store::DomainStore;
use ecosankalp_store::models::QueryDraft;

pub fn add(
    store: &mut DomainStore,
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = store.add_query(QueryDraft {
        name,
        email,
        subject,
        message,
    })?;
    info!("Ticket {} opened", query.id);
    Ok(())
}

pub fn close(store: &mut DomainStore, query_id: &str) {
    store.close_query(&QueryId::new(query_id));
    info!("Open tickets: {}", store.open_query_count());
}

pub fn list(store: &DomainStore) {
    for q in store.queries() {
        info!(
            "{} [{}] {} <{}> {}: {}",
            q.id, q.status, q.name, q.email, q.subject, q.message
        );
    }
}
