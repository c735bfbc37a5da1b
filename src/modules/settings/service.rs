use eduguard_models::Settings;
use tokio::sync::watch;
use tracing::info;

/// Observable app settings.
pub struct SettingsStore {
    tx: watch::Sender<Settings>,
}

impl SettingsStore {
    pub fn new(settings: Settings) -> Self {
        let (tx, _rx) = watch::channel(settings);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> Settings {
        self.tx.borrow().clone()
    }

    pub fn set_dark_theme(&mut self, enabled: bool) {
        let changed = self.tx.send_if_modified(|s| {
            let changed = s.dark_theme != enabled;
            s.dark_theme = enabled;
            changed
        });
        if changed {
            info!(enabled, "Dark theme changed");
        }
    }

    pub fn set_notifications(&mut self, enabled: bool) {
        let changed = self.tx.send_if_modified(|s| {
            let changed = s.notifications != enabled;
            s.notifications = enabled;
            changed
        });
        if changed {
            info!(enabled, "Push notifications changed");
        }
    }

    pub fn toggle_dark_theme(&mut self) -> bool {
        let enabled = !self.tx.borrow().dark_theme;
        self.set_dark_theme(enabled);
        enabled
    }

    pub fn toggle_notifications(&mut self) -> bool {
        let enabled = !self.tx.borrow().notifications;
        self.set_notifications(enabled);
        enabled
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
