use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use models::ResourceSubscription;
use serde::Deserialize;

use crate::envelope::{envelope, Envelope};
use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionQuery {
    pub resource_name: Option<String>,
}

pub async fn subscribe(
    State(state): State<ServerState>,
    Json(input): Json<ResourceSubscription>,
) -> Json<Envelope<ResourceSubscription>> {
    let created = state.services.resource_subscriptions.subscribe(input).await;
    envelope("resource_subscription", created)
}

/// 不带 `resourceName` 时返回全部订阅
pub async fn list_subscriptions(
    State(state): State<ServerState>,
    Query(query): Query<SubscriptionQuery>,
) -> Json<Envelope<Vec<ResourceSubscription>>> {
    let subs = state
        .services
        .resource_subscriptions
        .list(query.resource_name.as_deref())
        .await;
    envelope("resource_subscriptions", subs)
}

pub async fn unsubscribe(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.services.resource_subscriptions.unsubscribe(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
