//! Usage analytics screen.

use eduguard_core::AppError;
use std::path::PathBuf;

use super::service::AnalyticsService;
use crate::cli::prompt::choose;
use crate::cli::{Flow, Prompt, render, shell};
use crate::router::Screen;
use crate::state::AppState;

pub const DEFAULT_EXPORT_PATH: &str = "storage/reports/analytics.json";

#[derive(Clone, Copy)]
enum Action {
    Export,
    Back,
    Menu,
    Quit,
}

pub fn analytics_screen<P: Prompt + ?Sized>(
    state: &mut AppState,
    prompt: &mut P,
) -> Result<Flow, AppError> {
    let report = AnalyticsService::weekly_report(&state.roster.snapshot());

    prompt.say(&format!("\n== {} ==", Screen::Analytics.title()));
    prompt.say(&render::usage_chart(&report));
    prompt.say("\nKey Metrics");
    prompt.say(&render::key_metrics(&report));
    prompt.say(&render::weekly_summary(&report));

    let actions = [
        (Action::Export, "Export report"),
        (Action::Back, "Back"),
        (Action::Menu, "Open menu"),
        (Action::Quit, "Quit"),
    ];
    match choose(prompt, "Analytics", &actions)? {
        Some(Action::Export) => {
            let path = prompt.input("Export to", DEFAULT_EXPORT_PATH)?;
            let path = PathBuf::from(path.trim());
            match AnalyticsService::export_report(&report, &path) {
                Ok(()) => prompt.say(&format!("📄 Report written to {}", path.display())),
                Err(err) => prompt.say(&format!("❌ {}", err.message())),
            }
        }
        Some(Action::Back) | None => {
            state.navigator.back();
        }
        Some(Action::Menu) => return shell::open_drawer(state, prompt),
        Some(Action::Quit) => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
