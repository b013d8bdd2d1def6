use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::OfferCode;

use crate::envelope::{envelope, Envelope};
use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn list_offer_codes(
    State(state): State<ServerState>,
    Path(product_id): Path<String>,
) -> Result<Json<Envelope<Vec<OfferCode>>>, ApiError> {
    let codes = state.services.offer_codes.list(&product_id).await?;
    Ok(envelope("offer_codes", codes))
}

pub async fn get_offer_code(
    State(state): State<ServerState>,
    Path((product_id, id)): Path<(String, String)>,
) -> Result<Json<Envelope<OfferCode>>, ApiError> {
    let code = state.services.offer_codes.get(&product_id, &id).await?;
    Ok(envelope("offer_code", code))
}

pub async fn create_offer_code(
    State(state): State<ServerState>,
    Path(product_id): Path<String>,
    Json(input): Json<OfferCode>,
) -> Result<(StatusCode, Json<Envelope<OfferCode>>), ApiError> {
    let created = state.services.offer_codes.create(&product_id, input).await?;
    Ok((StatusCode::CREATED, envelope("offer_code", created)))
}

pub async fn edit_offer_code(
    State(state): State<ServerState>,
    Path((product_id, id)): Path<(String, String)>,
    Json(input): Json<OfferCode>,
) -> Result<StatusCode, ApiError> {
    state.services.offer_codes.edit(&product_id, &id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_offer_code(
    State(state): State<ServerState>,
    Path((product_id, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.services.offer_codes.delete(&product_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
