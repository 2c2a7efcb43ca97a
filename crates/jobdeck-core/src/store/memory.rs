//! In-memory session store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;

use super::SessionStore;

/// `HashMap`-backed store. Nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        store.set("authToken", "tok").unwrap();
        assert_eq!(store.get("authToken").unwrap().as_deref(), Some("tok"));
        store.remove("authToken").unwrap();
        assert_eq!(store.get("authToken").unwrap(), None);
    }
}
