//! The screen loop.

use eduguard_core::AppError;
use tracing::{debug, info};

use crate::cli::prompt::{Flow, Prompt};
use crate::modules::{analytics, auth, dashboard, settings, students};
use crate::router::{DrawerItem, Screen};
use crate::state::AppState;

/// Show the current screen until one of them asks to quit.
pub async fn run_shell<P: Prompt + ?Sized>(
    state: &mut AppState,
    prompt: &mut P,
) -> Result<(), AppError> {
    info!("Shell started");
    loop {
        let screen = state.navigator.current();
        debug!(route = screen.route(), "Showing screen");

        let flow = match screen {
            Screen::AdminLogin => auth::controller::login_screen(state, prompt).await?,
            Screen::AdminDashboard => dashboard::controller::dashboard_screen(state, prompt)?,
            Screen::ManageStudents => students::controller::students_screen(state, prompt)?,
            Screen::Analytics => analytics::controller::analytics_screen(state, prompt)?,
            Screen::Settings => settings::controller::settings_screen(state, prompt)?,
        };

        if flow == Flow::Quit {
            info!("Shell closed");
            prompt.say("👋 Goodbye");
            return Ok(());
        }
    }
}

/// The navigation drawer. Logging out also forgets the entered credentials.
pub fn open_drawer<P: Prompt + ?Sized>(
    state: &mut AppState,
    prompt: &mut P,
) -> Result<Flow, AppError> {
    let items: Vec<String> = DrawerItem::ALL
        .iter()
        .map(|item| {
            let current = matches!(item, DrawerItem::Open(screen) if *screen == state.navigator.current());
            if current {
                format!("• {}", item.label())
            } else {
                item.label().to_string()
            }
        })
        .collect();

    let Some(item) = prompt
        .select("Menu", &items)?
        .and_then(|index| DrawerItem::ALL.get(index).copied())
    else {
        return Ok(Flow::Continue);
    };

    if item == DrawerItem::Logout {
        state.login.reset();
    }
    state.navigator.select_drawer_item(item)?;
    Ok(Flow::Continue)
}
