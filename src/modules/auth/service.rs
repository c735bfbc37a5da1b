//! Admin login flow.
//!
//! [`LoginService`] holds the login form state, filters PIN input, simulates
//! network latency and runs the credential check. Its state is published on a
//! `watch` channel like the roster's.

use eduguard_auth::{accept_pin_input, check_request};
use eduguard_config::LoginConfig;
use eduguard_core::AppError;
use tokio::sync::watch;
use tracing::{debug, info, instrument};

use super::model::{LoginRequest, LoginState};

pub struct LoginService {
    tx: watch::Sender<LoginState>,
    config: LoginConfig,
}

impl LoginService {
    pub fn new(config: LoginConfig) -> Self {
        let (tx, _rx) = watch::channel(LoginState::default());
        Self { tx, config }
    }

    pub fn subscribe(&self) -> watch::Receiver<LoginState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> LoginState {
        self.tx.borrow().clone()
    }

    /// Replace the username and clear any error.
    pub fn update_username(&mut self, username: impl Into<String>) {
        let username = username.into();
        self.tx.send_modify(|state| {
            state.username = username;
            state.error = None;
        });
    }

    /// Replace the PIN if `pin` is at most six digits. Anything else is
    /// dropped and the previous PIN stays. Returns whether it was accepted.
    pub fn update_pin(&mut self, pin: &str) -> bool {
        if !accept_pin_input(pin) {
            debug!(len = pin.len(), "Dropped PIN input");
            return false;
        }
        self.tx.send_modify(|state| {
            state.pin = pin.to_string();
            state.error = None;
        });
        true
    }

    /// Check the entered credentials after the configured delay.
    ///
    /// On success `on_success` runs once the loading flag is cleared. On
    /// failure the fixed error message is stored in the state and returned.
    #[instrument(skip(self, on_success))]
    pub async fn login<F>(&mut self, on_success: F) -> Result<(), AppError>
    where
        F: FnOnce(),
    {
        self.tx.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });

        // Simulated network latency
        tokio::time::sleep(self.config.delay).await;

        let request = LoginRequest::from(&*self.tx.borrow());
        match check_request(&request) {
            Ok(()) => {
                self.tx.send_modify(|state| state.is_loading = false);
                info!(username = %request.username, "Admin logged in");
                on_success();
                Ok(())
            }
            Err(err) => {
                let message = err.message();
                self.tx.send_modify(|state| {
                    state.is_loading = false;
                    state.error = Some(message);
                });
                Err(err)
            }
        }
    }

    pub fn clear_error(&mut self) {
        self.tx.send_if_modified(|state| state.error.take().is_some());
    }

    /// Forget the entered credentials, used on logout.
    pub fn reset(&mut self) {
        self.tx.send_replace(LoginState::default());
    }
}

impl Default for LoginService {
    fn default() -> Self {
        Self::new(LoginConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduguard_auth::INVALID_CREDENTIALS_MESSAGE;
    use eduguard_core::ErrorKind;
    use std::time::Duration;

    #[test]
    fn test_update_username_clears_error() {
        let mut service = LoginService::default();
        service.tx.send_modify(|s| s.error = Some("boom".to_string()));
        service.update_username("admin");
        let state = service.snapshot();
        assert_eq!(state.username, "admin");
        assert!(state.error.is_none());
    }

    #[test]
    fn test_update_pin_drops_invalid_input() {
        let mut service = LoginService::default();
        assert!(service.update_pin("1234"));
        assert!(!service.update_pin("1234a"));
        assert!(!service.update_pin("1234567"));
        assert_eq!(service.snapshot().pin, "1234");
    }

    #[test]
    fn test_clear_error_publishes_only_when_set() {
        let mut service = LoginService::default();
        let rx = service.subscribe();
        service.clear_error();
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_reset() {
        let mut service = LoginService::default();
        service.update_username("admin");
        service.update_pin("123");
        service.reset();
        assert_eq!(service.snapshot(), LoginState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_configured_delay() {
        let mut service = LoginService::new(LoginConfig {
            delay: Duration::from_millis(1000),
        });
        service.update_username("admin");
        service.update_pin("123456");

        let start = tokio::time::Instant::now();
        service.login(|| {}).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert!(!service.snapshot().is_loading);
    }

    #[tokio::test]
    async fn test_login_failure_sets_message() {
        let mut service = LoginService::new(LoginConfig::immediate());
        service.update_username("admin");
        service.update_pin("000000");

        let mut called = false;
        let err = service.login(|| called = true).await.unwrap_err();

        assert!(!called);
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        let state = service.snapshot();
        assert_eq!(state.error.as_deref(), Some(INVALID_CREDENTIALS_MESSAGE));
        assert!(!state.is_loading);
    }
}
