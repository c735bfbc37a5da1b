use anyhow::anyhow;
use eduguard_core::AppError;
use eduguard_models::LoginRequest;
use tracing::{info, warn};

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PIN: &str = "123456";

/// PINs are at most this many digits.
pub const MAX_PIN_LENGTH: usize = 6;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials. Try admin/123456";

/// Whether `pin` may be stored as the PIN field's new value.
///
/// Rejected input is dropped by the caller rather than reported.
pub fn accept_pin_input(pin: &str) -> bool {
    pin.len() <= MAX_PIN_LENGTH && pin.chars().all(|c| c.is_ascii_digit())
}

pub fn check_credentials(username: &str, pin: &str) -> Result<(), AppError> {
    if username == DEMO_USERNAME && pin == DEMO_PIN {
        info!(username = %username, "Admin credentials accepted");
        Ok(())
    } else {
        warn!(username = %username, "Admin credentials rejected");
        Err(AppError::unauthorized(anyhow!(INVALID_CREDENTIALS_MESSAGE)))
    }
}

pub fn check_request(request: &LoginRequest) -> Result<(), AppError> {
    check_credentials(&request.username, &request.pin)
}
