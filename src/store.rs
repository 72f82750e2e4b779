//! Persisted deployment configuration, backed by `azd env`.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::process::Command;

/// String key/value store the wizard persists decisions into.
pub trait ConfigStore {
    /// Current value for the key, if set and non-empty.
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Write-once helper: returns the existing value when the key is already
/// set, otherwise derives one, persists it, and returns it.
pub fn ensure<S, F>(store: &mut S, key: &str, derive: F) -> Result<String>
where
    S: ConfigStore + ?Sized,
    F: FnOnce() -> Result<String>,
{
    if let Some(existing) = store.get(key) {
        return Ok(existing);
    }
    let value = derive()?;
    store.set(key, &value)?;
    Ok(value)
}

/// The real store. Reads come from the values azd exports into the hook's
/// process environment; writes go through `azd env set` and are mirrored
/// into an overlay so a later read in the same run observes them.
pub struct AzdEnv {
    overlay: HashMap<String, String>,
}

impl AzdEnv {
    pub fn new() -> Self {
        Self {
            overlay: HashMap::new(),
        }
    }
}

impl Default for AzdEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for AzdEnv {
    fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.overlay.get(key) {
            return Some(value.clone());
        }
        std::env::var(key).ok().filter(|v| !v.trim().is_empty())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let status = Command::new("azd")
            .args(["env", "set", key, value])
            .status()
            .context("failed to run azd env set")?;
        if !status.success() {
            anyhow::bail!("azd env set {key} exited with {status}");
        }
        self.overlay.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
