//! Dashboard screen.

use eduguard_core::AppError;

use super::service::DashboardService;
use crate::cli::prompt::choose;
use crate::cli::{Flow, Prompt, render, shell};
use crate::router::Screen;
use crate::state::AppState;

#[derive(Clone, Copy)]
enum Action {
    Analytics,
    Students,
    Menu,
    Quit,
}

pub fn dashboard_screen<P: Prompt + ?Sized>(
    state: &mut AppState,
    prompt: &mut P,
) -> Result<Flow, AppError> {
    let stats = DashboardService::stats(&state.roster.snapshot());

    prompt.say(&format!("\n== {} ==", Screen::AdminDashboard.title()));
    prompt.say("Welcome back!\nHere's what's happening with your school today.");
    prompt.say(&render::dashboard_cards(&stats));

    let actions = [
        (Action::Analytics, "View analytics"),
        (Action::Students, "Manage students"),
        (Action::Menu, "Open menu"),
        (Action::Quit, "Quit"),
    ];
    match choose(prompt, "Dashboard", &actions)? {
        Some(Action::Analytics) => state.navigator.navigate(Screen::Analytics)?,
        Some(Action::Students) => state.navigator.navigate(Screen::ManageStudents)?,
        Some(Action::Menu) | None => return shell::open_drawer(state, prompt),
        Some(Action::Quit) => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
