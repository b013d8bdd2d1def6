pub mod auth;
pub mod envelope;
pub mod errors;
pub mod extract;
pub mod metrics;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::{run, run_with};
pub use state::ServerState;
