//! Login form models.

use serde::{Deserialize, Serialize};

/// Observable state of the admin login form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LoginState {
    pub username: String,
    pub pin: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// A username/PIN pair submitted for checking.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub pin: String,
}

impl From<&LoginState> for LoginRequest {
    fn from(state: &LoginState) -> Self {
        Self {
            username: state.username.clone(),
            pin: state.pin.clone(),
        }
    }
}
