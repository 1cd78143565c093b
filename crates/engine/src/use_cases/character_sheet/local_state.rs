//! Per-character state kept on the device: HP, toggles and the open tab.
//!
//! Stored as one JSON object per character under `state:<characterId>`.
//! Reads never fail and writes shallow-merge into whatever is already there.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use brewsheet_domain::common::loose_i64;
use brewsheet_domain::{CharacterId, SheetSection};

use crate::infrastructure::ports::KeyValueStore;

pub const CURRENT_HP_KEY: &str = "currentHp";
pub const TEMP_HP_KEY: &str = "tempHp";
pub const ACTIVE_TAB_KEY: &str = "activeTab";

/// Keys with a fixed meaning; everything else boolean is a toggle.
pub const RESERVED_KEYS: [&str; 3] = [CURRENT_HP_KEY, TEMP_HP_KEY, ACTIVE_TAB_KEY];

/// A parsed local state object. Missing or unreadable fields read as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalState {
    values: Map<String, Value>,
}

impl LocalState {
    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    pub fn current_hp(&self) -> Option<i64> {
        self.values.get(CURRENT_HP_KEY).and_then(loose_i64)
    }

    pub fn temp_hp(&self) -> Option<i64> {
        self.values.get(TEMP_HP_KEY).and_then(loose_i64)
    }

    pub fn active_tab(&self) -> Option<SheetSection> {
        self.values
            .get(ACTIVE_TAB_KEY)
            .and_then(Value::as_str)
            .and_then(|raw| raw.parse().ok())
    }

    pub fn toggle(&self, key: &str) -> Option<bool> {
        if RESERVED_KEYS.contains(&key) {
            return None;
        }
        self.values.get(key).and_then(Value::as_bool)
    }

    /// Every boolean that is not a reserved key.
    pub fn toggles(&self) -> BTreeMap<String, bool> {
        self.values
            .iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .filter_map(|(key, value)| value.as_bool().map(|flag| (key.clone(), flag)))
            .collect()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

/// Reads and merges local state through a [`KeyValueStore`].
#[derive(Clone)]
pub struct LocalStateStore {
    store: Arc<dyn KeyValueStore>,
}

impl LocalStateStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn key(character_id: CharacterId) -> String {
        format!("state:{}", character_id)
    }

    /// Never fails: absent, unparseable or non-object state reads as empty.
    pub fn read(&self, character_id: CharacterId) -> LocalState {
        let Some(raw) = self.store.load(&Self::key(character_id)) else {
            return LocalState::default();
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(values)) => LocalState::from_map(values),
            Ok(other) => {
                tracing::warn!(
                    character_id = %character_id,
                    found = %json_kind(&other),
                    "Malformed local state: expected an object"
                );
                LocalState::default()
            }
            Err(e) => {
                tracing::warn!(
                    character_id = %character_id,
                    error = %e,
                    "Malformed local state"
                );
                LocalState::default()
            }
        }
    }

    /// Shallow-merges `patch` into the stored object and persists it.
    pub fn write(&self, character_id: CharacterId, patch: Map<String, Value>) -> LocalState {
        let mut values = self.read(character_id).values;
        let keys: Vec<&str> = patch.keys().map(String::as_str).collect();
        tracing::debug!(character_id = %character_id, keys = ?keys, "Writing local state");
        for (key, value) in patch {
            values.insert(key, value);
        }

        match serde_json::to_string(&values) {
            Ok(raw) => self.store.save(&Self::key(character_id), &raw),
            Err(e) => tracing::error!(
                character_id = %character_id,
                error = %e,
                "Failed to serialize local state"
            ),
        }
        LocalState::from_map(values)
    }

    pub fn clear(&self, character_id: CharacterId) {
        self.store.remove(&Self::key(character_id));
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockKeyValueStore;
    use crate::infrastructure::storage::MemoryKeyValueStore;
    use mockall::predicate::*;
    use serde_json::json;

    fn patch(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("patch must be an object"),
        }
    }

    #[test]
    fn key_is_prefixed_character_id() {
        let id = CharacterId::new();
        assert_eq!(LocalStateStore::key(id), format!("state:{}", id));
    }

    #[test]
    fn missing_state_reads_empty() {
        let store = LocalStateStore::new(Arc::new(MemoryKeyValueStore::new()));
        let state = store.read(CharacterId::new());
        assert_eq!(state, LocalState::default());
        assert_eq!(state.current_hp(), None);
    }

    #[test]
    fn malformed_state_reads_empty() {
        let id = CharacterId::new();
        for raw in ["{not json", "[1, 2]", "42", "null"] {
            let mut kv = MockKeyValueStore::new();
            let owned = raw.to_string();
            kv.expect_load()
                .with(eq(LocalStateStore::key(id)))
                .returning(move |_| Some(owned.clone()));
            let store = LocalStateStore::new(Arc::new(kv));
            assert_eq!(store.read(id), LocalState::default(), "input {:?}", raw);
        }
    }

    #[test]
    fn write_merges_into_existing_object() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let store = LocalStateStore::new(kv.clone());
        let id = CharacterId::new();

        store.write(id, patch(json!({"currentHp": 12, "inspired": true})));
        let state = store.write(id, patch(json!({"tempHp": 4})));

        assert_eq!(state.current_hp(), Some(12));
        assert_eq!(state.temp_hp(), Some(4));
        assert_eq!(state.toggle("inspired"), Some(true));

        let raw = kv.load(&LocalStateStore::key(id)).unwrap();
        let stored: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, json!({"currentHp": 12, "tempHp": 4, "inspired": true}));
    }

    #[test]
    fn write_over_malformed_state_starts_fresh() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let id = CharacterId::new();
        kv.save(&LocalStateStore::key(id), "garbage");

        let store = LocalStateStore::new(kv);
        let state = store.write(id, patch(json!({"currentHp": 3})));
        assert_eq!(state.as_map().len(), 1);
        assert_eq!(store.read(id).current_hp(), Some(3));
    }

    #[test]
    fn fields_read_leniently() {
        let state = LocalState::from_map(patch(json!({
            "currentHp": "15",
            "tempHp": "lots",
            "activeTab": "Notes",
            "concentrating": false,
            "theme": "dark"
        })));
        assert_eq!(state.current_hp(), Some(15));
        assert_eq!(state.temp_hp(), None);
        assert_eq!(state.active_tab(), Some(SheetSection::Notes));
        assert_eq!(state.toggle("currentHp"), None);

        let toggles = state.toggles();
        assert_eq!(toggles.len(), 1);
        assert_eq!(toggles.get("concentrating"), Some(&false));
    }

    #[test]
    fn clear_removes_the_key() {
        let id = CharacterId::new();
        let mut kv = MockKeyValueStore::new();
        kv.expect_remove()
            .with(eq(LocalStateStore::key(id)))
            .times(1)
            .return_const(());
        LocalStateStore::new(Arc::new(kv)).clear(id);
    }
}
