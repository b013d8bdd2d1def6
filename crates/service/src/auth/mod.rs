//! Bearer-token verification.
//!
//! The HTTP layer extracts the token and hands it to a [`TokenVerifier`];
//! on success the resulting [`Identity`] travels with the request.

pub mod domain;
pub mod errors;
pub mod verifier;

pub use domain::Identity;
pub use errors::AuthError;
pub use verifier::{bearer_token, JwtVerifier, TokenVerifier};
