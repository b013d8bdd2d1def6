use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::sale::Card;

/// A license key issued for a product, keyed by `(product_id, license_key)`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct License {
    pub product_id: String,
    pub license_key: String,
    pub uses: i64,
    pub enabled: bool,
    pub purchase: Purchase,
}

impl License {
    pub fn matches(&self, product_id: &str, license_key: &str) -> bool {
        self.product_id == product_id && self.license_key == license_key
    }
}

impl Resource for License {
    const KIND: &'static str = "license";
}

/// Snapshot of the purchase a license was issued for.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Purchase {
    pub seller_id: String,
    pub product_id: String,
    pub product_name: String,
    pub permalink: String,
    pub product_permalink: String,
    pub email: String,
    pub price: i64,
    pub gumroad_fee: i64,
    pub currency: String,
    pub quantity: i64,
    pub discover_fee_charged: bool,
    pub can_contact: bool,
    pub referrer: String,
    pub card: Card,
    pub order_number: i64,
    pub sale_id: String,
    pub sale_timestamp: Option<DateTime<Utc>>,
    pub purchaser_id: String,
    pub subscription_id: Option<String>,
    pub variants: String,
    pub license_key: String,
    pub is_multiseat_license: bool,
    pub ip_country: String,
    pub recurrence: Option<String>,
    pub is_gift_receiver_purchase: bool,
    pub refunded: bool,
    pub disputed: bool,
    pub dispute_won: bool,
    pub chargebacked: bool,
    pub subscription_ended_at: Option<DateTime<Utc>>,
    pub subscription_cancelled_at: Option<DateTime<Utc>>,
    pub subscription_failed_at: Option<DateTime<Utc>>,
}
