//! Student data models and DTOs.
//!
//! This module re-exports student and roster models from the
//! `eduguard-models` crate so the store and screen code share one path.

pub use eduguard_models::ids::StudentId;
pub use eduguard_models::roster::RosterState;
pub use eduguard_models::students::*;
