use log::error;

use crate::{Settings, SettingsRepository, SettingsService};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: SettingsRepository> Service<R> {
    /// Returns the stored settings, or the defaults if they cannot be read.
    pub fn settings_or_default(&self) -> Settings {
        self.get_settings().unwrap_or_else(|err| {
            error!("failed to read settings, using defaults: {err}");
            Settings::default()
        })
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    fn get_settings(&self) -> Result<Settings, String> {
        self.repository.read_settings()
    }
}
