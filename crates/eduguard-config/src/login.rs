use std::env;
use std::time::Duration;

/// Default artificial latency of a login attempt.
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

#[derive(Clone, Debug)]
pub struct LoginConfig {
    /// Simulated network delay before credentials are checked.
    pub delay: Duration,
}

impl LoginConfig {
    pub fn from_env() -> Self {
        let delay_ms = env::var("LOGIN_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_LOGIN_DELAY_MS);

        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }

    /// Config without any delay, handy in tests and scripted runs.
    pub fn immediate() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
        }
    }
}
