use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Keys the settings screen knows about. `set` accepts any key; `reset`
/// drops everything back to these.
pub mod keys {
    pub const DARK_MODE: &str = "dark_mode";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const USER_NAME: &str = "user_name";
    pub const USER_EMAIL: &str = "user_email";
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// User preferences, persisted as a flat JSON object of strings. This is
/// the only durable state in the program; the ledger never touches disk.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

fn default_values() -> BTreeMap<String, String> {
    BTreeMap::from([
        (keys::DARK_MODE.to_string(), "false".to_string()),
        (keys::NOTIFICATIONS.to_string(), "false".to_string()),
        (keys::USER_NAME.to_string(), String::new()),
        (keys::USER_EMAIL.to_string(), String::new()),
    ])
}

impl SettingsStore {
    /// Open the store at `path`, reading the file when it exists. A missing
    /// file is not an error; the defaults apply until the first `set`.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let stored: BTreeMap<String, String> = serde_json::from_str(&content)?;
            // Defaults fill in keys the file predates
            let mut values = default_values();
            values.extend(stored);
            values
        } else {
            default_values()
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a key and write the whole store through to disk.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), SettingsError> {
        self.values.insert(key.into(), value.into());
        self.save()
    }

    /// Drop every key back to its default and persist the result. Unknown
    /// keys are removed.
    pub fn reset(&mut self) -> Result<(), SettingsError> {
        self.values = default_values();
        self.save()
    }

    /// Entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn save(&self) -> Result<(), SettingsError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, format!("{json}\n"))?;
        Ok(())
    }
}
