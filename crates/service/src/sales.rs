use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use models::Sale;
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::storage::ResourceStore;

/// Query parameters accepted by the sales listing.
///
/// Every filter is optional and they combine with AND. `page_key` is
/// accepted for compatibility but results are never paginated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesFilter {
    pub after: Option<String>,
    pub before: Option<String>,
    pub product_id: Option<String>,
    pub email: Option<String>,
    pub order_id: Option<String>,
    pub page_key: Option<String>,
}

/// Parse a filter date. Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD` (midnight UTC).
pub fn parse_filter_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

/// Resolve a date bound; unparsable input disables the bound.
fn date_bound(name: &str, raw: &Option<String>) -> Option<DateTime<Utc>> {
    let raw = non_empty(raw)?;
    let parsed = parse_filter_date(raw);
    if parsed.is_none() {
        debug!(filter = name, value = raw, "ignoring unparsable date filter");
    }
    parsed
}

impl SalesFilter {
    fn predicate(&self) -> impl Fn(&Sale) -> bool + '_ {
        let after = date_bound("after", &self.after);
        let before = date_bound("before", &self.before);
        let product_id = non_empty(&self.product_id);
        let email = non_empty(&self.email);
        let order_id = non_empty(&self.order_id);

        move |s: &Sale| {
            after.map_or(true, |a| s.created_at > a)
                && before.map_or(true, |b| s.created_at < b)
                && product_id.map_or(true, |p| s.product_id == p)
                && email.map_or(true, |e| s.email == e)
                && order_id.map_or(true, |o| s.order_id.to_string() == o)
        }
    }
}

#[derive(Clone, Default)]
pub struct SaleService {
    store: ResourceStore<Sale>,
}

impl SaleService {
    pub fn new(store: ResourceStore<Sale>) -> Self { Self { store } }

    pub async fn list(&self, filter: &SalesFilter) -> Vec<Sale> {
        self.store.find_many(filter.predicate()).await
    }

    pub async fn get(&self, id: &str) -> Result<Sale, ServiceError> {
        self.store.find_one(|s| s.id == id).await
    }

    pub async fn mark_as_shipped(&self, id: &str, tracking_url: Option<String>) -> Result<Sale, ServiceError> {
        let sale = self
            .store
            .modify(|s| s.id == id, |s| {
                s.mark_as_shipped(tracking_url);
                Ok(s.clone())
            })
            .await?;
        info!(sale_id = id, tracking_url = ?sale.tracking_url, "sale_marked_shipped");
        Ok(sale)
    }

    /// Refund part of a sale, or all of it when `amount_cents` is absent.
    /// Repeating a partial refund deducts the amount again. Negative amounts
    /// and totals beyond `i64` are rejected without touching the sale.
    pub async fn refund(&self, id: &str, amount_cents: Option<i64>) -> Result<Sale, ServiceError> {
        if matches!(amount_cents, Some(amount) if amount < 0) {
            return Err(ServiceError::invalid("refund amount must not be negative"));
        }
        let sale = self
            .store
            .modify(|s| s.id == id, |s| {
                s.refund(amount_cents)
                    .ok_or_else(|| ServiceError::invalid("refunded total overflows"))?;
                Ok(s.clone())
            })
            .await?;
        info!(sale_id = id, ?amount_cents, refunded = sale.refunded_amount_cents, "sale_refunded");
        Ok(sale)
    }
}
