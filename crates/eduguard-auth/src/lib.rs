//! # EduGuard Auth
//!
//! The admin login check.
//!
//! The shell ships with a single demo account whose username and PIN are
//! compiled in and compared in plaintext. This is a placeholder for a real
//! credential issuing and verification service and must not be reused as one.
//!
//! - [`credentials`]: PIN entry rules and the credential comparison
//!
//! # Example
//!
//! ```ignore
//! use eduguard_auth::{accept_pin_input, check_credentials};
//!
//! assert!(accept_pin_input("1234"));
//! assert!(!accept_pin_input("12a4"));
//! check_credentials("admin", "123456")?;
//! ```

pub mod credentials;

// Re-export commonly used items at crate root
pub use credentials::{
    DEMO_PIN, DEMO_USERNAME, INVALID_CREDENTIALS_MESSAGE, MAX_PIN_LENGTH, accept_pin_input,
    check_credentials, check_request,
};
