use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::resource::{new_token, Resource};

/// A sellable product together with its nested offer codes and custom fields.
///
/// Request bodies may omit any field; missing ones take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub published: bool,
    pub url: String,
    pub currency: String,
    pub thumbnail_url: Option<String>,
    pub tags: Vec<String>,
    pub formatted_price: String,
    pub sales_count: i64,
    pub sales_usd_cents: i64,
    pub is_tiered_membership: bool,
    pub recurrences: Vec<String>,
    pub variant_categories: Vec<VariantCategory>,
    pub offer_codes: Vec<OfferCode>,
    pub custom_fields: Vec<CustomField>,
}

impl Product {
    /// Routes address products by the string form of their integer id.
    pub fn has_id(&self, id: &str) -> bool {
        self.id.to_string() == id
    }
}

impl Resource for Product {
    const KIND: &'static str = "product";

    fn assign_id(&mut self, existing: usize) {
        self.id = existing as i64 + 1;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OfferCode {
    pub id: String,
    pub name: String,
    pub amount_cents: Option<i64>,
    pub percent_off: Option<i64>,
    pub max_purchase_count: Option<i64>,
    pub universal: bool,
    pub times_used: i64,
}

impl OfferCode {
    /// Copy the seller-editable discount fields, leaving `id` and `times_used`.
    pub fn apply_edit(&mut self, edit: &OfferCode) {
        self.name = edit.name.clone();
        self.amount_cents = edit.amount_cents;
        self.percent_off = edit.percent_off;
        self.max_purchase_count = edit.max_purchase_count;
        self.universal = edit.universal;
    }
}

impl Resource for OfferCode {
    const KIND: &'static str = "offer code";

    fn assign_id(&mut self, _existing: usize) {
        self.id = new_token();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomField {
    pub name: String,
    pub required: bool,
}

impl Resource for CustomField {
    const KIND: &'static str = "custom field";
}

/// A configuration dimension of a product, e.g. "Tier".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariantCategory {
    pub id: String,
    pub product_id: String,
    pub title: String,
    pub options: Vec<VariantOption>,
}

impl Resource for VariantCategory {
    const KIND: &'static str = "variant category";

    fn assign_id(&mut self, _existing: usize) {
        self.id = new_token();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariantOption {
    pub name: String,
    pub price_difference: i64,
    pub purchasing_power_parity_prices: BTreeMap<String, i64>,
    pub is_pay_what_you_want: bool,
    pub recurrence_prices: BTreeMap<String, RecurrencePrice>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecurrencePrice {
    pub price_cents: i64,
    pub suggested_price_cents: Option<i64>,
    pub purchasing_power_parity_prices: BTreeMap<String, i64>,
}

/// A selectable value within a variant category, with its price delta.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Variant {
    pub id: String,
    pub variant_category_id: String,
    pub name: String,
    pub price_difference_cents: i64,
    pub max_purchase_count: Option<i64>,
}

impl Variant {
    pub fn apply_edit(&mut self, edit: &Variant) {
        self.name = edit.name.clone();
        self.price_difference_cents = edit.price_difference_cents;
        self.max_purchase_count = edit.max_purchase_count;
    }
}

impl Resource for Variant {
    const KIND: &'static str = "variant";

    fn assign_id(&mut self, _existing: usize) {
        self.id = new_token();
    }
}
