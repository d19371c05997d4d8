use std::{
    collections::VecDeque,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use customer_info_app::{Settings, SettingsRepository, log};

const FILE_SETTINGS: &str = "settings.json";
const FILE_LOG: &str = "customer_info.log";

/// Settings and log entries kept as JSON files in one directory.
#[derive(Debug, Clone)]
pub struct LocalFile {
    dir: PathBuf,
}

impl LocalFile {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, std::io::Error> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

impl SettingsRepository for LocalFile {
    fn read_settings(&self) -> Result<Settings, String> {
        let path = self.path(FILE_SETTINGS);
        match read_optional(&path).map_err(|err| format!("{}: {err}", path.display()))? {
            Some(content) => serde_json::from_str(&content)
                .map_err(|err| format!("{}: {err}", path.display())),
            None => Ok(Settings::default()),
        }
    }
}

impl log::Repository for LocalFile {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match read_optional(&self.path(FILE_LOG)) {
            Ok(Some(content)) => serde_json::from_str(&content).map_err(|err| err.to_string()),
            Ok(None) => Ok(VecDeque::new()),
            Err(err) => Err(err.to_string()),
        }
        .map_err(log::Error::Unknown)
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        serde_json::to_string(&entries)
            .map_err(|err| err.to_string())
            .and_then(|content| {
                fs::write(self.path(FILE_LOG), content).map_err(|err| err.to_string())
            })
            .map_err(log::Error::Unknown)
    }
}
