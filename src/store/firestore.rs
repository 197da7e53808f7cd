use chrono::{NaiveDate, Utc};
use firestore::{FirestoreDb, FirestoreQueryDirection};
use serde::{Deserialize, Serialize};

use super::MenuEntry;

const MENU_COLLECTION: &str = "menu";
const RECORDED_AT: &str = "recorded_at";

/// A [`MenuEntry`] as stored in the collection.
///
/// `recorded_at` is nanoseconds since the epoch at the start of the batch
/// plus the entry's position in it, so ordering by it alone gives insertion
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct MenuDocument {
    name: String,
    date: NaiveDate,
    lunch: bool,
    recorded_at: i64,
}

impl MenuDocument {
    fn batch(entries: &[MenuEntry], recorded_at: i64) -> Vec<Self> {
        entries
            .iter()
            .zip(recorded_at..)
            .map(|(entry, recorded_at)| Self {
                name: entry.name.clone(),
                date: entry.date,
                lunch: entry.lunch,
                recorded_at,
            })
            .collect()
    }
}

impl From<MenuDocument> for MenuEntry {
    fn from(doc: MenuDocument) -> Self {
        Self::new(doc.name, doc.date, doc.lunch)
    }
}

#[derive(Debug)]
pub struct Firestore {
    db: FirestoreDb,
}

impl Firestore {
    pub async fn open(project: &str) -> crate::Result<Self> {
        let db = FirestoreDb::new(project).await?;
        Ok(Self { db })
    }

    pub async fn append(&self, entries: &[MenuEntry]) -> crate::Result<()> {
        let now = Utc::now().timestamp_micros().saturating_mul(1_000);
        for doc in MenuDocument::batch(entries, now) {
            self.db
                .fluent()
                .insert()
                .into(MENU_COLLECTION)
                .generate_document_id()
                .object(&doc)
                .execute::<MenuDocument>()
                .await?;
        }
        Ok(())
    }

    /// Entries in the order they were appended.
    pub async fn list(&self) -> crate::Result<Vec<MenuEntry>> {
        let docs: Vec<MenuDocument> = self
            .db
            .fluent()
            .select()
            .from(MENU_COLLECTION)
            .order_by([(RECORDED_AT.to_string(), FirestoreQueryDirection::Ascending)])
            .obj::<MenuDocument>()
            .query()
            .await?;
        Ok(docs.into_iter().map(MenuEntry::from).collect())
    }

    pub fn close(self) {
        log::debug!("Dropping firestore client");
        drop(self.db);
    }
}
