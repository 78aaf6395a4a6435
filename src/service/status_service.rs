//! Status log: append and list client check-ins.

use std::sync::Arc;

use crate::domain::StatusCheck;
use crate::error::GatewayError;
use crate::persistence::{LIST_LIMIT, Store};

/// Records and lists [`StatusCheck`]s.
#[derive(Debug, Clone)]
pub struct StatusService {
    store: Arc<dyn Store>,
}

impl StatusService {
    /// Creates a new `StatusService`.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Creates and persists a status check for `client_name`.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] if the store write fails.
    pub async fn append(&self, client_name: &str) -> Result<StatusCheck, GatewayError> {
        let check = StatusCheck::new(client_name);
        self.store.insert_status_check(&check).await?;
        tracing::debug!(id = %check.id, client_name, "status check recorded");
        Ok(check)
    }

    /// Returns up to [`LIST_LIMIT`] stored status checks.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] if the store read fails.
    pub async fn list(&self) -> Result<Vec<StatusCheck>, GatewayError> {
        self.store.list_status_checks(LIST_LIMIT).await
    }
}
