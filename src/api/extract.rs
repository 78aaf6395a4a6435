//! Request extractors whose rejections use the gateway error body.

use axum::extract::FromRequest;

use crate::error::GatewayError;

/// JSON body extractor. A body that is malformed, mistyped, or missing a
/// field is rejected with [`GatewayError::InvalidRequest`] instead of
/// axum's plain-text rejection.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(GatewayError))]
pub struct ApiJson<T>(pub T);
