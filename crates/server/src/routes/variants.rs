//! Variant categories of a product, and the variants inside each category.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::{Variant, VariantCategory};

use crate::envelope::{envelope, Envelope};
use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn list_categories(
    State(state): State<ServerState>,
    Path(product_id): Path<String>,
) -> Json<Envelope<Vec<VariantCategory>>> {
    envelope("variant_categories", state.services.variants.list_categories(&product_id).await)
}

pub async fn get_category(
    State(state): State<ServerState>,
    Path((product_id, id)): Path<(String, String)>,
) -> Result<Json<Envelope<VariantCategory>>, ApiError> {
    let category = state.services.variants.get_category(&product_id, &id).await?;
    Ok(envelope("variant_category", category))
}

pub async fn create_category(
    State(state): State<ServerState>,
    Path(product_id): Path<String>,
    Json(input): Json<VariantCategory>,
) -> (StatusCode, Json<Envelope<VariantCategory>>) {
    let created = state.services.variants.create_category(&product_id, input).await;
    (StatusCode::CREATED, envelope("variant_category", created))
}

pub async fn edit_category(
    State(state): State<ServerState>,
    Path((product_id, id)): Path<(String, String)>,
    Json(input): Json<VariantCategory>,
) -> Result<StatusCode, ApiError> {
    state.services.variants.edit_category(&product_id, &id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_category(
    State(state): State<ServerState>,
    Path((product_id, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.services.variants.delete_category(&product_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_variants(
    State(state): State<ServerState>,
    Path((_product_id, category_id)): Path<(String, String)>,
) -> Json<Envelope<Vec<Variant>>> {
    envelope("variants", state.services.variants.list_variants(&category_id).await)
}

pub async fn get_variant(
    State(state): State<ServerState>,
    Path((_product_id, category_id, id)): Path<(String, String, String)>,
) -> Result<Json<Envelope<Variant>>, ApiError> {
    let variant = state.services.variants.get_variant(&category_id, &id).await?;
    Ok(envelope("variant", variant))
}

pub async fn create_variant(
    State(state): State<ServerState>,
    Path((_product_id, category_id)): Path<(String, String)>,
    Json(input): Json<Variant>,
) -> (StatusCode, Json<Envelope<Variant>>) {
    let created = state.services.variants.create_variant(&category_id, input).await;
    (StatusCode::CREATED, envelope("variant", created))
}

pub async fn edit_variant(
    State(state): State<ServerState>,
    Path((_product_id, category_id, id)): Path<(String, String, String)>,
    Json(input): Json<Variant>,
) -> Result<StatusCode, ApiError> {
    state.services.variants.edit_variant(&category_id, &id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_variant(
    State(state): State<ServerState>,
    Path((_product_id, category_id, id)): Path<(String, String, String)>,
) -> Result<StatusCode, ApiError> {
    state.services.variants.delete_variant(&category_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
