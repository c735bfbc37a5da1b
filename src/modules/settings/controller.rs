//! Settings screen.

use eduguard_core::AppError;

use crate::cli::prompt::choose;
use crate::cli::{Flow, Prompt, render, shell};
use crate::router::Screen;
use crate::state::AppState;

#[derive(Clone, Copy)]
enum Action {
    DarkTheme,
    Notifications,
    Back,
    Menu,
    Quit,
}

pub fn settings_screen<P: Prompt + ?Sized>(
    state: &mut AppState,
    prompt: &mut P,
) -> Result<Flow, AppError> {
    prompt.say(&format!("\n== {} ==", Screen::Settings.title()));
    prompt.say(&render::settings_table(&state.settings.snapshot()));

    let actions = [
        (Action::DarkTheme, "Toggle dark theme"),
        (Action::Notifications, "Toggle push notifications"),
        (Action::Back, "Back"),
        (Action::Menu, "Open menu"),
        (Action::Quit, "Quit"),
    ];
    match choose(prompt, "Settings", &actions)? {
        Some(Action::DarkTheme) => {
            state.settings.toggle_dark_theme();
        }
        Some(Action::Notifications) => {
            state.settings.toggle_notifications();
        }
        Some(Action::Back) | None => {
            state.navigator.back();
        }
        Some(Action::Menu) => return shell::open_drawer(state, prompt),
        Some(Action::Quit) => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
