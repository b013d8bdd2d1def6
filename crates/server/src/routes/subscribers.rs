use axum::{
    extract::{Path, Query, State},
    Json,
};
use models::Subscriber;
use serde::Deserialize;

use crate::envelope::{envelope, Envelope};
use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize)]
pub struct SubscriberQuery {
    pub email: Option<String>,
}

pub async fn list_subscribers(
    State(state): State<ServerState>,
    Path(product_id): Path<String>,
    Query(query): Query<SubscriberQuery>,
) -> Json<Envelope<Vec<Subscriber>>> {
    let email = query.email.as_deref().filter(|e| !e.is_empty());
    let subscribers = state.services.subscribers.list_for_product(&product_id, email).await;
    envelope("subscribers", subscribers)
}

pub async fn get_subscriber(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Subscriber>>, ApiError> {
    Ok(envelope("subscriber", state.services.subscribers.get(&id).await?))
}
