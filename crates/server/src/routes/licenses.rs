use axum::{extract::State, Json};
use serde::Serialize;
use service::errors::ServiceError;
use service::licenses::{LicenseRequest, LicenseStatus};

use crate::errors::ApiError;
use crate::state::ServerState;

/// License replies carry the status fields at the top level rather than
/// under a named key.
#[derive(Debug, Serialize)]
pub struct LicenseReply {
    pub success: bool,
    #[serde(flatten)]
    pub status: LicenseStatus,
}

fn reply(result: Result<LicenseStatus, ServiceError>) -> Result<Json<LicenseReply>, ApiError> {
    result
        .map(|status| Json(LicenseReply { success: true, status }))
        .map_err(|e| match e {
            ServiceError::NotFound(_) => ApiError::LicenseNotFound,
            other => other.into(),
        })
}

pub async fn verify(
    State(state): State<ServerState>,
    Json(req): Json<LicenseRequest>,
) -> Result<Json<LicenseReply>, ApiError> {
    reply(state.services.licenses.verify(&req).await)
}

pub async fn enable(
    State(state): State<ServerState>,
    Json(req): Json<LicenseRequest>,
) -> Result<Json<LicenseReply>, ApiError> {
    reply(state.services.licenses.set_enabled(&req, true).await)
}

pub async fn disable(
    State(state): State<ServerState>,
    Json(req): Json<LicenseRequest>,
) -> Result<Json<LicenseReply>, ApiError> {
    reply(state.services.licenses.set_enabled(&req, false).await)
}

pub async fn decrement_uses_count(
    State(state): State<ServerState>,
    Json(req): Json<LicenseRequest>,
) -> Result<Json<LicenseReply>, ApiError> {
    reply(state.services.licenses.decrement_uses(&req).await)
}
