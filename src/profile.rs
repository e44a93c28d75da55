//! Local profile persistence.
//!
//! The signed-in user lives under a single key as a JSON blob. No key means
//! nobody is signed in.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const PROFILE_KEY: &str = "userData";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub picture: String,
    pub locale: String,
}

/// What the header shows for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub name: String,
    pub avatar: String,
}

pub trait ProfileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()>;

    fn remove(&mut self, key: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Key-value entries persisted as one JSON object, rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read profile store {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Corrupt profile store {}", path.display()))?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    fn flush(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write profile store {}", self.path.display()))
    }
}

impl ProfileStore for FileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

pub fn load_profile(store: &impl ProfileStore) -> anyhow::Result<Option<UserProfile>> {
    let Some(json) = store.get(PROFILE_KEY)? else {
        return Ok(None);
    };

    let profile = serde_json::from_str(&json).context("Stored profile is not valid JSON")?;
    Ok(Some(profile))
}

pub fn save_profile(store: &mut impl ProfileStore, profile: &UserProfile) -> anyhow::Result<()> {
    store.set(PROFILE_KEY, serde_json::to_string(profile)?)
}

pub fn sign_out(store: &mut impl ProfileStore) -> anyhow::Result<()> {
    store.remove(PROFILE_KEY)?;
    log::info!("Signed out");
    Ok(())
}

/// Changes the stored locale, creating an empty profile if there is none.
pub fn update_locale(store: &mut impl ProfileStore, locale: &str) -> anyhow::Result<UserProfile> {
    let mut profile = load_profile(store)?.unwrap_or_default();
    profile.locale = locale.to_string();
    save_profile(store, &profile)?;
    Ok(profile)
}

pub fn greeting(store: &impl ProfileStore) -> anyhow::Result<Option<Greeting>> {
    Ok(load_profile(store)?.map(|profile| Greeting {
        name: profile.name,
        avatar: profile.picture,
    }))
}
