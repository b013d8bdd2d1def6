use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::product::OfferCode;
use crate::resource::Resource;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sale {
    pub id: String,
    pub email: String,
    pub seller_id: String,
    pub created_at: DateTime<Utc>,
    pub product_name: String,
    pub product_has_variants: bool,
    pub price: i64,
    pub gumroad_fee: i64,
    pub subscription_duration: Option<String>,
    pub formatted_display_price: String,
    pub formatted_total_price: String,
    pub currency_symbol: String,
    pub amount_refundable_in_currency: String,
    pub product_id: String,
    pub product_permalink: String,
    pub partially_refunded: bool,
    pub chargedback: bool,
    pub purchase_email: String,
    pub zip_code: Option<String>,
    pub paid: bool,
    pub has_variants: bool,
    pub variants: BTreeMap<String, String>,
    pub variants_and_quantity: String,
    pub has_custom_fields: bool,
    pub custom_fields: BTreeMap<String, String>,
    pub order_id: i64,
    pub is_product_physical: bool,
    pub purchaser_id: String,
    pub is_recurring_billing: bool,
    pub can_contact: bool,
    pub is_following: bool,
    pub disputed: bool,
    pub dispute_won: bool,
    pub is_additional_contribution: bool,
    pub discover_fee_charged: bool,
    pub is_gift_sender_purchase: bool,
    pub is_gift_receiver_purchase: bool,
    pub referrer: String,
    pub card: Card,
    pub product_rating: Option<i64>,
    pub reviews_count: i64,
    pub average_rating: i64,
    pub subscription_id: Option<String>,
    pub cancelled: bool,
    pub ended: bool,
    pub recurring_charge: bool,
    pub license_key: Option<String>,
    pub license_id: Option<String>,
    pub license_disabled: bool,
    pub affiliate: Option<Affiliate>,
    pub quantity: i64,
    pub shipped: bool,
    pub tracking_url: Option<String>,
    pub refunded_amount_cents: i64,
    pub offer_code: Option<OfferCode>,
}

impl Sale {
    /// Deduct `amount_cents` on top of earlier refunds, or refund the full
    /// price when no amount is given. Returns the new refunded total, or
    /// `None` (and leaves the sale untouched) if the total would overflow.
    pub fn refund(&mut self, amount_cents: Option<i64>) -> Option<i64> {
        let total = match amount_cents {
            Some(amount) => self.refunded_amount_cents.checked_add(amount)?,
            None => self.price,
        };
        self.refunded_amount_cents = total;
        Some(total)
    }

    pub fn mark_as_shipped(&mut self, tracking_url: Option<String>) {
        self.shipped = true;
        self.tracking_url = tracking_url;
    }
}

impl Resource for Sale {
    const KIND: &'static str = "sale";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    pub visual: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Affiliate {
    pub email: String,
    pub amount: String,
}
