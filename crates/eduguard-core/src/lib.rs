//! # EduGuard Core
//!
//! Core types shared by every EduGuard crate.
//!
//! - [`errors`]: Application error type with an explicit outcome kind
//! - [`validation`]: Helpers for turning `validator` failures into [`AppError`]s
//!
//! # Example
//!
//! ```ignore
//! use eduguard_core::errors::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Student not found"));
//! assert!(error.is_not_found());
//! ```

pub mod errors;
pub mod validation;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind};
pub use validation::{format_errors, validate};
