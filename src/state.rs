use eduguard_config::{LoginConfig, RosterConfig};
use eduguard_seeder::seeder::{SeedConfig, seed_roster};

use crate::modules::auth::LoginService;
use crate::modules::settings::SettingsStore;
use crate::modules::students::RosterStore;
use crate::router::Navigator;

/// Everything the shell screens work on, passed explicitly to each controller.
pub struct AppState {
    pub login: LoginService,
    pub roster: RosterStore,
    pub settings: SettingsStore,
    pub navigator: Navigator,
}

impl AppState {
    pub fn new(login_config: LoginConfig, roster_config: &RosterConfig) -> Self {
        let students = seed_roster(&SeedConfig {
            sample_roster: roster_config.seed_sample_roster,
            extra_students: roster_config.extra_students,
        });

        Self {
            login: LoginService::new(login_config),
            roster: RosterStore::new(students),
            settings: SettingsStore::default(),
            navigator: Navigator::new(),
        }
    }
}
