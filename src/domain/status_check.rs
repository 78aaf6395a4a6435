//! Liveness status records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A single client check-in stored in the `status_checks` collection.
///
/// Immutable once created. Nothing in the service deletes these records
/// and `client_name` carries no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusCheck {
    /// Record identifier (UUID v4).
    pub id: Uuid,
    /// Name reported by the client.
    pub client_name: String,
    /// Server time at which the check was recorded.
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Creates a fresh record stamped with the current UTC time.
    #[must_use]
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name: client_name.into(),
            timestamp: Utc::now(),
        }
    }
}
