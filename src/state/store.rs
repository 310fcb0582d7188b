use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Persisted record keys. One serialized record per key, rewritten in full
/// after every mutation.
pub const PROFILE_KEY: &str = "userHealthData";
pub const FOOD_LOG_KEY: &str = "foodLog";
pub const WATER_KEY: &str = "waterIntake";

/// The injected persistence seam. The core treats the store as
/// `load(key) -> JSON | absent` / `save(key, JSON)` and nothing more;
/// in-memory state stays authoritative regardless of what the store does.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Deserialize the record stored under `key`, if any.
pub fn load_record<S: KeyValueStore, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>> {
    match store.load(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `record` and rewrite the record under `key`.
pub fn save_record<S: KeyValueStore, T: Serialize>(
    store: &mut S,
    key: &str,
    record: &T,
) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    store.save(key, &json)
}

/// File-backed store: each key lives in `<dir>/<key>.json`.
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for DirStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.records.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirStore::new(dir.path());

        assert!(store.load(WATER_KEY).unwrap().is_none());

        store.save(WATER_KEY, "3").unwrap();
        assert_eq!(store.load(WATER_KEY).unwrap().as_deref(), Some("3"));

        // One file per key
        assert!(dir.path().join("waterIntake.json").exists());
    }

    #[test]
    fn test_record_helpers_roundtrip() {
        let mut store = MemoryStore::new();
        save_record(&mut store, WATER_KEY, &7u32).unwrap();

        let glasses: Option<u32> = load_record(&store, WATER_KEY).unwrap();
        assert_eq!(glasses, Some(7));

        let missing: Option<u32> = load_record(&store, PROFILE_KEY).unwrap();
        assert_eq!(missing, None);
    }
}
