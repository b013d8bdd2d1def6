use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::Resource;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subscriber {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub user_id: String,
    pub user_email: String,
    pub purchase_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub user_requested_cancellation_at: Option<DateTime<Utc>>,
    pub charge_occurrence_count: Option<i64>,
    pub recurrence: String,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub failed_at: Option<DateTime<Utc>>,
    pub free_trial_ends_at: Option<DateTime<Utc>>,
    pub license_key: Option<String>,
    pub status: String,
}

impl Resource for Subscriber {
    const KIND: &'static str = "subscriber";
}
