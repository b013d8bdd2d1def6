use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::CustomField;

use crate::envelope::{envelope, Envelope};
use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn list_custom_fields(
    State(state): State<ServerState>,
    Path(product_id): Path<String>,
) -> Result<Json<Envelope<Vec<CustomField>>>, ApiError> {
    let fields = state.services.custom_fields.list(&product_id).await?;
    Ok(envelope("custom_fields", fields))
}

pub async fn get_custom_field(
    State(state): State<ServerState>,
    Path((product_id, name)): Path<(String, String)>,
) -> Result<Json<Envelope<CustomField>>, ApiError> {
    let field = state.services.custom_fields.get(&product_id, &name).await?;
    Ok(envelope("custom_field", field))
}

pub async fn create_custom_field(
    State(state): State<ServerState>,
    Path(product_id): Path<String>,
    Json(input): Json<CustomField>,
) -> Result<(StatusCode, Json<Envelope<CustomField>>), ApiError> {
    let created = state.services.custom_fields.create(&product_id, input).await?;
    Ok((StatusCode::CREATED, envelope("custom_field", created)))
}

/// 仅 `required` 可修改
pub async fn edit_custom_field(
    State(state): State<ServerState>,
    Path((product_id, name)): Path<(String, String)>,
    Json(input): Json<CustomField>,
) -> Result<StatusCode, ApiError> {
    state.services.custom_fields.edit(&product_id, &name, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_custom_field(
    State(state): State<ServerState>,
    Path((product_id, name)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.services.custom_fields.delete(&product_id, &name).await?;
    Ok(StatusCode::NO_CONTENT)
}
