use futures_locks::RwLock;

use super::MenuEntry;

/// Entries kept for the lifetime of the process only.
#[derive(Debug)]
pub struct MemoryStore(RwLock<Vec<MenuEntry>>);

impl Default for MemoryStore {
    fn default() -> Self {
        Self(RwLock::new(Vec::new()))
    }
}

impl MemoryStore {
    pub async fn append(&self, entries: &[MenuEntry]) {
        self.0.write().await.extend_from_slice(entries);
    }

    pub async fn list(&self) -> Vec<MenuEntry> {
        self.0.read().await.clone()
    }

    pub fn close(self) {
        log::debug!(
            "Dropping {} in-memory entries",
            self.0.try_unwrap().map_or(0, |v| v.len())
        );
    }
}
