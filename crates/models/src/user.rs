use serde::{Deserialize, Serialize};

/// Profile of the seller owning the API credentials.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub bio: Option<String>,
    pub name: String,
    pub twitter_handle: Option<String>,
    pub user_id: String,
    pub email: String,
    pub url: String,
}
