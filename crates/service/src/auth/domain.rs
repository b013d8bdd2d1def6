use serde::{Deserialize, Serialize};

/// Caller identity established from a verified token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Token subject (`sub` claim).
    pub subject: String,
    pub email: Option<String>,
}
