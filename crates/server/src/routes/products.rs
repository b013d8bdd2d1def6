use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::Product;

use crate::envelope::{envelope, Envelope};
use crate::errors::ApiError;
use crate::state::ServerState;

fn parse_product_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid product id: {raw}")))
}

/// 列出全部商品
pub async fn list_products(State(state): State<ServerState>) -> Json<Envelope<Vec<Product>>> {
    envelope("products", state.services.products.list().await)
}

pub async fn get_product(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    let product = state.services.products.get(parse_product_id(&id)?).await?;
    Ok(envelope("product", product))
}

/// 创建商品，id 由存储分配
pub async fn create_product(
    State(state): State<ServerState>,
    Json(input): Json<Product>,
) -> (StatusCode, Json<Envelope<Product>>) {
    let created = state.services.products.create(input).await;
    (StatusCode::CREATED, envelope("product", created))
}

pub async fn delete_product(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.services.products.delete(parse_product_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn enable_product(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.services.products.set_published(parse_product_id(&id)?, true).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn disable_product(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.services.products.set_published(parse_product_id(&id)?, false).await?;
    Ok(StatusCode::NO_CONTENT)
}
