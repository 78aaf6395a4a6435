//! Status check DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /api/status`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusCheckCreate {
    /// Name the client reports for itself.
    pub client_name: String,
}
