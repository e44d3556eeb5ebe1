//! Delete confirmation controller

use tracing::{error, info};

use crate::cache::{CUSTOMERS_KEY, QueryStore};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteState {
    #[default]
    Idle,
    Deleting,
    Deleted,
    Failed,
}

/// What the parent should do after a delete result is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Close,
    StayOpen,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct DeleteConfirmation {
    session: u64,
    customer_id: String,
    state: DeleteState,
}

impl DeleteConfirmation {
    pub fn open(session: u64, customer_id: impl Into<String>) -> Self {
        let customer_id = customer_id.into();
        info!("Opening delete confirmation #{} for {}", session, customer_id);
        Self {
            session,
            customer_id,
            state: DeleteState::Idle,
        }
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    #[cfg(test)]
    pub fn state(&self) -> &DeleteState {
        &self.state
    }

    pub fn is_deleting(&self) -> bool {
        self.state == DeleteState::Deleting
    }

    /// Returns the id to delete, or None while a delete is already running
    pub fn confirm(&mut self) -> Option<String> {
        match self.state {
            DeleteState::Idle | DeleteState::Failed => {
                self.state = DeleteState::Deleting;
                Some(self.customer_id.clone())
            }
            DeleteState::Deleting | DeleteState::Deleted => None,
        }
    }

    pub fn complete<V>(
        &mut self,
        result: Result<(), String>,
        cache: &mut impl QueryStore<V>,
    ) -> DeleteOutcome {
        if self.state != DeleteState::Deleting {
            return DeleteOutcome::Ignored;
        }

        match result {
            Ok(()) => {
                info!("Customer {} deleted", self.customer_id);
                cache.invalidate(CUSTOMERS_KEY);
                self.state = DeleteState::Deleted;
                DeleteOutcome::Close
            }
            Err(e) => {
                error!("Failed to delete customer {}: {}", self.customer_id, e);
                self.state = DeleteState::Failed;
                DeleteOutcome::StayOpen
            }
        }
    }
}
