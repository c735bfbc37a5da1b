//! # EduGuard Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`login`]: Login flow timing
//! - [`logging`]: Log level and log file destination
//! - [`roster`]: Roster seeding
//!
//! # Example
//!
//! ```ignore
//! use eduguard_config::{LoggingConfig, LoginConfig, RosterConfig};
//!
//! let login = LoginConfig::from_env();
//! let logging = LoggingConfig::from_env();
//! let roster = RosterConfig::from_env();
//! ```

pub mod logging;
pub mod login;
pub mod roster;

// Re-export commonly used types at crate root
pub use logging::LoggingConfig;
pub use login::LoginConfig;
pub use roster::RosterConfig;

/// Parse a boolean flag the way `.env` files usually spell them.
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
