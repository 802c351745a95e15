//! Training chain progression.

use tracing::{debug, info, instrument};

use ecosankalp_core::ModuleId;

use super::DomainStore;
use crate::error::{Result, StoreError};
use crate::stats;
use crate::storage::Slot;

impl DomainStore {
    /// Complete the frontier module, unlock its successor and credit the
    /// module award.
    ///
    /// Unknown ids and already-completed modules change nothing. When the
    /// last module is completed the user's `training_completed` flag is set.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AuthRequired` without a session, or
    /// `StoreError::InvalidTransition` if the module is still locked.
    #[instrument(skip(self), fields(module_id = %id))]
    pub fn complete_module(&mut self, id: &ModuleId) -> Result<()> {
        if self.user.is_none() {
            return Err(StoreError::AuthRequired);
        }
        let Some(index) = self.modules.iter().position(|m| &m.id == id) else {
            debug!("Unknown module, nothing to complete");
            return Ok(());
        };
        let Some(module) = self.modules.get_mut(index) else {
            return Ok(());
        };

        if module.is_completed {
            return Ok(());
        }
        if module.is_locked {
            return Err(StoreError::invalid_transition("module", "locked", "completed"));
        }
        module.is_completed = true;
        if let Some(next) = self.modules.get_mut(index + 1) {
            next.is_locked = false;
        }

        let award = self.rewards.module_award;
        let finished = stats::training_progress(&self.modules) == 100;
        let user = self.require_user()?;
        user.award(award);
        if finished {
            user.training_completed = true;
        }
        info!(
            user_id = %user.id,
            green_points = user.green_points,
            training_completed = user.training_completed,
            "Module completed"
        );
        self.persist(Slot::User);
        Ok(())
    }
}
