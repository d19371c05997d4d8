use std::path::PathBuf;

use log::LevelFilter;

pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, String>;
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, String>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub database: PathBuf,
    pub window_width: u32,
    pub window_height: u32,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: PathBuf::from("customer_info.db"),
            window_width: 450,
            window_height: 350,
            log_level: LevelFilter::Info,
        }
    }
}
