use axum::{extract::State, Extension, Json};
use models::User;
use service::auth::Identity;
use tracing::debug;

use crate::envelope::{envelope, Envelope};
use crate::state::ServerState;

/// The seller profile behind the API credentials.
pub async fn get_user(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
) -> Json<Envelope<User>> {
    debug!(subject = %identity.subject, "user profile requested");
    envelope("user", state.services.users.current())
}
