use axum::{
    extract::{Path, Query, State},
    Json,
};
use models::Sale;
use serde::Deserialize;
use service::sales::SalesFilter;

use crate::envelope::{envelope, Envelope};
use crate::errors::ApiError;
use crate::extract::OptionalJson;
use crate::state::ServerState;

/// `mark_as_shipped` body: a bare JSON string (or `null`), or `{"trackingUrl": ...}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ShipBody {
    Url(Option<String>),
    Fields(ShipRequest),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShipRequest {
    pub tracking_url: Option<String>,
}

impl ShipBody {
    fn tracking_url(self) -> Option<String> {
        match self {
            ShipBody::Url(url) => url,
            ShipBody::Fields(req) => req.tracking_url,
        }
    }
}

/// `refund` body: a bare JSON integer (or `null`), or `{"amountCents": ...}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RefundBody {
    Amount(Option<i64>),
    Fields(RefundRequest),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RefundRequest {
    pub amount_cents: Option<i64>,
}

impl RefundBody {
    fn amount_cents(self) -> Option<i64> {
        match self {
            RefundBody::Amount(amount) => amount,
            RefundBody::Fields(req) => req.amount_cents,
        }
    }
}

pub async fn list_sales(
    State(state): State<ServerState>,
    Query(filter): Query<SalesFilter>,
) -> Json<Envelope<Vec<Sale>>> {
    envelope("sales", state.services.sales.list(&filter).await)
}

pub async fn get_sale(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Sale>>, ApiError> {
    Ok(envelope("sale", state.services.sales.get(&id).await?))
}

pub async fn mark_as_shipped(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    OptionalJson(body): OptionalJson<ShipBody>,
) -> Result<Json<Envelope<Sale>>, ApiError> {
    let tracking_url = body.and_then(ShipBody::tracking_url);
    let sale = state.services.sales.mark_as_shipped(&id, tracking_url).await?;
    Ok(envelope("sale", sale))
}

/// 仅在请求体为空或未给出金额时全额退款
pub async fn refund(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    OptionalJson(body): OptionalJson<RefundBody>,
) -> Result<Json<Envelope<Sale>>, ApiError> {
    let amount_cents = body.and_then(RefundBody::amount_cents);
    let sale = state.services.sales.refund(&id, amount_cents).await?;
    Ok(envelope("sale", sale))
}
