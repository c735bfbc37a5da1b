//! Login screen.

use eduguard_core::{AppError, ErrorKind};
use tracing::instrument;

use crate::cli::{Flow, Prompt};
use crate::state::AppState;

/// Ask for username and PIN until the admin logs in or gives up.
#[instrument(skip_all)]
pub async fn login_screen<P: Prompt + ?Sized>(
    state: &mut AppState,
    prompt: &mut P,
) -> Result<Flow, AppError> {
    prompt.say("\n🛡️  EduGuard AI Admin\n");

    loop {
        let current = state.login.snapshot();
        let username = prompt.input("Username", &current.username)?;
        state.login.update_username(username.trim());

        let pin = prompt.secret("PIN (6 digits)")?;
        // A rejected entry clears the PIN; the last attempt's PIN is never reused
        if !state.login.update_pin(pin.trim()) {
            state.login.update_pin("");
        }

        prompt.say("⏳ Signing in...");
        let AppState {
            login, navigator, ..
        } = &mut *state;
        match login.login(|| navigator.on_login_success()).await {
            Ok(()) => {
                prompt.say("✅ Welcome back!");
                return Ok(Flow::Continue);
            }
            Err(err) if err.kind == ErrorKind::Unauthorized => {
                prompt.say(&format!("❌ {}", err.message()));
                if !prompt.confirm("Try again?")? {
                    return Ok(Flow::Quit);
                }
                state.login.clear_error();
            }
            Err(err) => return Err(err),
        }
    }
}
