//! Data Transfer Objects for REST request/response serialization.
//!
//! Request DTOs mirror the JSON accepted on the wire and convert into
//! the domain input types.

pub mod llm_config_dto;
pub mod notification_dto;
pub mod status_dto;

pub use llm_config_dto::*;
pub use notification_dto::*;
pub use status_dto::*;
