use anyhow::Result;
use soletrack::storage::{keys, SettingsStore};
use tempfile::TempDir;

#[test]
fn test_defaults_apply_without_a_file() -> Result<()> {
    let dir = TempDir::new()?;
    let store = SettingsStore::load_or_default(dir.path().join("settings.json"))?;

    assert_eq!(store.get(keys::DARK_MODE), Some("false"));
    assert_eq!(store.get(keys::NOTIFICATIONS), Some("false"));
    assert_eq!(store.get(keys::USER_NAME), Some(""));
    assert_eq!(store.get(keys::USER_EMAIL), Some(""));
    Ok(())
}

#[test]
fn test_set_persists_across_reload() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("settings.json");

    let mut store = SettingsStore::load_or_default(&path)?;
    store.set(keys::DARK_MODE, "true")?;
    store.set(keys::USER_NAME, "Hunter")?;
    store.set(keys::USER_EMAIL, "hunter@example.com")?;

    let reloaded = SettingsStore::load_or_default(&path)?;
    assert_eq!(reloaded.get(keys::DARK_MODE), Some("true"));
    assert_eq!(reloaded.get(keys::USER_NAME), Some("Hunter"));
    assert_eq!(reloaded.get(keys::USER_EMAIL), Some("hunter@example.com"));
    Ok(())
}

#[test]
fn test_unknown_keys_are_allowed_and_persisted() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("settings.json");

    let mut store = SettingsStore::load_or_default(&path)?;
    store.set("favorite_color", "red")?;

    let reloaded = SettingsStore::load_or_default(&path)?;
    assert_eq!(reloaded.get("favorite_color"), Some("red"));
    Ok(())
}

#[test]
fn test_reset_restores_defaults_and_drops_unknown_keys() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("settings.json");

    let mut store = SettingsStore::load_or_default(&path)?;
    store.set(keys::DARK_MODE, "true")?;
    store.set("favorite_color", "red")?;

    store.reset()?;
    assert_eq!(store.get(keys::DARK_MODE), Some("false"));
    assert_eq!(store.get("favorite_color"), None);

    // The reset is written through, not just in memory
    let reloaded = SettingsStore::load_or_default(&path)?;
    assert_eq!(reloaded.get(keys::DARK_MODE), Some("false"));
    assert_eq!(reloaded.get("favorite_color"), None);
    Ok(())
}

#[test]
fn test_malformed_file_is_an_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "not json at all")?;

    assert!(SettingsStore::load_or_default(&path).is_err());
    Ok(())
}

#[test]
fn test_file_from_an_older_version_gains_new_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"user_name": "Hunter"}"#)?;

    let store = SettingsStore::load_or_default(&path)?;
    assert_eq!(store.get(keys::USER_NAME), Some("Hunter"));
    assert_eq!(store.get(keys::DARK_MODE), Some("false"));
    Ok(())
}
