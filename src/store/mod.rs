mod firestore;
mod local;
mod memory;

use std::{path::PathBuf, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_FIRESTORE_PROJECT;

use self::{firestore::Firestore, local::FileStore, memory::MemoryStore};

/// One archived dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    pub date: NaiveDate,
    pub lunch: bool,
}

impl MenuEntry {
    pub fn new(name: impl Into<String>, date: NaiveDate, lunch: bool) -> Self {
        Self {
            name: name.into(),
            date,
            lunch,
        }
    }
}

/// Which backend [`Store::open`] should use.
///
/// Parsed from `:firestore:`, `:memory:`, or any other string as a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    Cloud(String),
    Local(PathBuf),
    Memory,
}

impl FromStr for StoreKind {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ":firestore:" => Ok(Self::Cloud(DEFAULT_FIRESTORE_PROJECT.to_string())),
            ":memory:" => Ok(Self::Memory),
            "" => Err(crate::error::Error::config_error("STORE must not be empty")),
            p => Ok(Self::Local(PathBuf::from(p))),
        }
    }
}

/// Handle to the archive of menu entries. Opened once at start-up, passed to
/// whoever needs it and closed on shutdown.
#[derive(Debug)]
pub enum Store {
    Cloud(Firestore),
    Local(FileStore),
    AdHoc(MemoryStore),
}

impl Store {
    pub async fn open(kind: &StoreKind) -> crate::Result<Self> {
        let store = match kind {
            StoreKind::Cloud(project) => Self::Cloud(Firestore::open(project).await?),
            StoreKind::Local(p) => Self::Local(FileStore::open(p).await?),
            StoreKind::Memory => Self::AdHoc(MemoryStore::default()),
        };
        log::info!("Opened store {kind:?}");
        Ok(store)
    }

    /// Appends `entries` after everything already stored.
    pub async fn append(&self, entries: &[MenuEntry]) -> crate::Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        match self {
            Self::Cloud(fs) => fs.append(entries).await,
            Self::Local(f) => f.append(entries).await,
            Self::AdHoc(m) => {
                m.append(entries).await;
                Ok(())
            }
        }
    }

    pub async fn list(&self) -> crate::Result<Vec<MenuEntry>> {
        match self {
            Self::Cloud(fs) => fs.list().await,
            Self::Local(f) => f.list().await,
            Self::AdHoc(m) => Ok(m.list().await),
        }
    }

    pub async fn close(self) -> crate::Result<()> {
        match self {
            Self::Cloud(fs) => fs.close(),
            Self::Local(f) => f.close().await?,
            Self::AdHoc(m) => m.close(),
        }
        log::info!("Closed store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_kind_from_str() {
        assert_eq!(
            StoreKind::from_str(":firestore:").unwrap(),
            StoreKind::Cloud(DEFAULT_FIRESTORE_PROJECT.to_string())
        );
        assert_eq!(StoreKind::from_str(":memory:").unwrap(), StoreKind::Memory);
        assert_eq!(
            StoreKind::from_str("data/menu.jsonl").unwrap(),
            StoreKind::Local(PathBuf::from("data/menu.jsonl"))
        );
        assert!(StoreKind::from_str("").is_err());
    }

    #[test]
    fn test_entry_serde() {
        let entry = MenuEntry::new(
            "Cajun Catfish",
            NaiveDate::from_ymd_opt(2023, 10, 29).unwrap(),
            true,
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Cajun Catfish","date":"2023-10-29","lunch":true}"#
        );
        assert_eq!(serde_json::from_str::<MenuEntry>(&json).unwrap(), entry);
    }

    #[tokio::test]
    async fn test_empty_append_is_noop() {
        let store = Store::open(&StoreKind::Memory).await.unwrap();
        store.append(&[]).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
        store.close().await.unwrap();
    }
}
