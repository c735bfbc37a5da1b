//! Login models.
//!
//! Re-exports the login form models from the `eduguard-models` crate.

pub use eduguard_models::auth::{LoginRequest, LoginState};
