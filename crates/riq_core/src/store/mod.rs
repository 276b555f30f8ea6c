//! Profile store boundary
//!
//! The core treats persistence as an opaque key-value store addressed by a
//! small fixed set of logical names. Values cross the boundary as JSON; the
//! store decides nothing about their layout.

use std::collections::BTreeMap;

/// The fixed logical keys the core reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    CoachProfile,
    BiasProfile,
    Roster,
    PlayerList,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::CoachProfile => "coach_profile",
            StoreKey::BiasProfile => "bias_profile",
            StoreKey::Roster => "roster",
            StoreKey::PlayerList => "player_list",
        }
    }
}

/// Durable key-value storage as seen from the core.
pub trait ProfileStore {
    fn get(&self, key: StoreKey) -> Option<serde_json::Value>;
    fn put(&mut self, key: StoreKey, value: serde_json::Value);
}

/// In-memory store for tests and the demo binary.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<&'static str, serde_json::Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn get(&self, key: StoreKey) -> Option<serde_json::Value> {
        self.entries.get(key.as_str()).cloned()
    }

    fn put(&mut self, key: StoreKey, value: serde_json::Value) {
        self.entries.insert(key.as_str(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_absent_key() {
        let store = MemoryStore::new();
        assert!(store.get(StoreKey::Roster).is_none());
    }

    #[test]
    fn test_put_overwrites() {
        let mut store = MemoryStore::new();
        store.put(StoreKey::BiasProfile, json!({"v": 1}));
        store.put(StoreKey::BiasProfile, json!({"v": 2}));
        assert_eq!(store.get(StoreKey::BiasProfile).unwrap()["v"], 2);
    }
}
