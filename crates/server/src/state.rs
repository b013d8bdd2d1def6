use std::sync::Arc;

use service::auth::{JwtVerifier, TokenVerifier};
use service::AppServices;

/// Shared by every handler. Cloning is cheap; all clones see the same stores.
#[derive(Clone)]
pub struct ServerState {
    pub services: AppServices,
    pub verifier: Arc<dyn TokenVerifier>,
}

impl ServerState {
    pub fn new(services: AppServices, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { services, verifier }
    }

    pub fn from_config(cfg: &configs::AppConfig) -> Self {
        Self::new(
            AppServices::build(cfg.seed.enabled),
            Arc::new(JwtVerifier::from_config(&cfg.auth)),
        )
    }
}
