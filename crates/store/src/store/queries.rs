//! Support tickets.

use chrono::Utc;
use tracing::{info, instrument};

use ecosankalp_core::{Email, QueryId, QueryStatus};

use super::{DomainStore, require_non_empty};
use crate::error::{Result, StoreError};
use crate::models::{QueryDraft, UserQuery};
use crate::storage::Slot;

impl DomainStore {
    /// Open a ticket from the contact form.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if a field is blank or the email is
    /// malformed.
    #[instrument(skip(self, draft))]
    pub fn add_query(&mut self, draft: QueryDraft) -> Result<UserQuery> {
        require_non_empty("name", &draft.name)?;
        require_non_empty("subject", &draft.subject)?;
        require_non_empty("message", &draft.message)?;
        let email = Email::parse(&draft.email)
            .map_err(|e| StoreError::Validation(format!("email: {e}")))?;

        let query = UserQuery {
            id: QueryId::generate(),
            name: draft.name.trim().to_owned(),
            email: email.as_str().to_owned(),
            subject: draft.subject,
            message: draft.message,
            created_at: Utc::now(),
            status: QueryStatus::Open,
        };
        self.queries.push(query.clone());

        info!(query_id = %query.id, "Query opened");
        self.persist(Slot::Queries);
        Ok(query)
    }

    /// Close a ticket. Missing or already-closed tickets change nothing.
    #[instrument(skip(self), fields(query_id = %id))]
    pub fn close_query(&mut self, id: &QueryId) {
        let Some(query) = self
            .queries
            .iter_mut()
            .find(|q| &q.id == id && q.status == QueryStatus::Open)
        else {
            return;
        };
        query.status = QueryStatus::Closed;
        info!("Query closed");
        self.persist(Slot::Queries);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft() -> QueryDraft {
        QueryDraft {
            name: "Meera".to_owned(),
            email: "meera@example.com".to_owned(),
            subject: "Missed pickup".to_owned(),
            message: "Nobody collected the dry waste on Tuesday.".to_owned(),
        }
    }

    #[test]
    fn test_add_query_opens_newest_ticket() {
        let mut store = DomainStore::in_memory();
        let query = store.add_query(draft()).unwrap();

        assert_eq!(query.status, QueryStatus::Open);
        assert_eq!(store.queries().next(), Some(&query));
        assert_eq!(store.open_query_count(), 3);
    }

    #[test]
    fn test_add_query_validation() {
        let mut store = DomainStore::in_memory();
        let bad = [
            QueryDraft {
                name: " ".to_owned(),
                ..draft()
            },
            QueryDraft {
                subject: String::new(),
                ..draft()
            },
            QueryDraft {
                message: "\n".to_owned(),
                ..draft()
            },
            QueryDraft {
                email: "meera at example".to_owned(),
                ..draft()
            },
        ];
        for d in bad {
            assert!(matches!(store.add_query(d), Err(StoreError::Validation(_))));
        }
        assert_eq!(store.queries().count(), 2);
    }

    #[test]
    fn test_close_query_is_idempotent() {
        let mut store = DomainStore::in_memory();
        let id = QueryId::new("q1");

        store.close_query(&id);
        assert_eq!(store.query(&id).unwrap().status, QueryStatus::Closed);
        assert_eq!(store.open_query_count(), 1);

        store.close_query(&id);
        assert_eq!(store.query(&id).unwrap().status, QueryStatus::Closed);

        store.close_query(&QueryId::new("q404"));
        assert_eq!(store.queries().count(), 2);
    }
}
