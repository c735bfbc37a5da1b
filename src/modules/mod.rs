pub mod analytics;
pub mod auth;
pub mod dashboard;
pub mod settings;
pub mod students;

pub use self::auth::LoginService;
pub use self::settings::SettingsStore;
pub use self::students::RosterStore;
