use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use eduguard::cli::{DialoguerPrompt, render, run_shell};
use eduguard::eduguard_config::{LoggingConfig, LoginConfig, RosterConfig};
use eduguard::eduguard_core::AppError;
use eduguard::logging::init_tracing;
use eduguard::modules::analytics::AnalyticsService;
use eduguard::modules::auth::LoginService;
use eduguard::modules::dashboard::DashboardService;
use eduguard::state::AppState;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eduguard")]
#[command(about = "EduGuard AI - School device monitoring admin shell", long_about = None)]
struct Cli {
    /// Start with an empty roster instead of the sample students
    #[arg(long, global = true)]
    no_seed: bool,

    /// Number of generated students appended to the roster
    #[arg(long, global = true)]
    extra_students: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive admin shell (default)
    Shell,
    /// Print the initial roster and dashboard numbers
    Roster,
    /// Print the weekly usage report
    Analytics {
        /// Also write the report as JSON to this path
        #[arg(short = 'e', long)]
        export: Option<PathBuf>,
    },
    /// Check admin credentials without starting the shell
    Login {
        /// Admin username (prompted if not provided)
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// PIN (prompted securely if not provided)
        #[arg(short = 'p', long)]
        pin: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&LoggingConfig::from_env())?;

    let mut roster_config = RosterConfig::from_env();
    if cli.no_seed {
        roster_config.seed_sample_roster = false;
    }
    if let Some(extra) = cli.extra_students {
        roster_config.extra_students = extra;
    }
    let mut state = AppState::new(LoginConfig::from_env(), &roster_config);

    let result = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(&mut state, &mut DialoguerPrompt).await,
        Commands::Roster => {
            handle_roster(&state);
            Ok(())
        }
        Commands::Analytics { export } => handle_analytics(&state, export),
        Commands::Login { username, pin } => handle_login(&mut state.login, username, pin).await,
    };

    result.map_err(AppError::into_anyhow)
}

fn handle_roster(state: &AppState) {
    let roster = state.roster.snapshot();
    println!("{}", render::roster_table(&roster));
    println!("{}", render::dashboard_cards(&DashboardService::stats(&roster)));
}

fn handle_analytics(state: &AppState, export: Option<PathBuf>) -> Result<(), AppError> {
    let report = AnalyticsService::weekly_report(&state.roster.snapshot());
    println!("{}", render::usage_chart(&report));
    println!("{}", render::key_metrics(&report));
    println!("{}", render::weekly_summary(&report));

    if let Some(path) = export {
        AnalyticsService::export_report(&report, &path)?;
        println!("📄 Report written to {}", path.display());
    }
    Ok(())
}

async fn handle_login(
    login: &mut LoginService,
    username: Option<String>,
    pin: Option<String>,
) -> Result<(), AppError> {
    let username = match username {
        Some(username) => username,
        None => Input::<String>::new()
            .with_prompt("Username")
            .interact_text()
            .context("Failed to read username")?,
    };
    let pin = match pin {
        Some(pin) => pin,
        None => Password::new()
            .with_prompt("PIN")
            .interact()
            .context("Failed to read PIN")?,
    };

    login.update_username(username);
    login.update_pin(&pin);

    println!("⏳ Signing in...");
    login
        .login(|| println!("✅ Credentials accepted"))
        .await
        .inspect_err(|err| eprintln!("❌ {}", err.message()))
}
