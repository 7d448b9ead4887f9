use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::models::document::{Document, DocumentKind};

/// A stored document plus its insertion sequence, the tie-breaker for
/// documents created within the same clock tick.
struct Entry {
    seq: u64,
    document: Document,
}

#[derive(Default)]
struct Inner {
    next_seq: u64,
    entries: HashMap<Uuid, Entry>,
}

#[derive(Clone, Default)]
pub struct DocumentStore {
    inner: Arc<RwLock<Inner>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, title: String, kind: DocumentKind, raw_text: String) -> Document {
        let now = Utc::now();
        let document = Document {
            id: Uuid::new_v4(),
            title,
            kind,
            raw_text,
            created_at: now,
            updated_at: now,
        };

        {
            let mut inner = self.inner.write().await;
            let seq = inner.next_seq;
            inner.next_seq += 1;
            inner.entries.insert(
                document.id,
                Entry {
                    seq,
                    document: document.clone(),
                },
            );
        }
        info!(
            "Stored {:?} document {} ({} chars)",
            kind,
            document.id,
            document.raw_text.chars().count()
        );
        document
    }

    pub async fn get(&self, id: Uuid) -> Option<Document> {
        self.inner
            .read()
            .await
            .entries
            .get(&id)
            .map(|entry| entry.document.clone())
    }

    /// Replaces a document's text. Returns `None` if the id is unknown.
    pub async fn replace_text(&self, id: Uuid, raw_text: String) -> Option<Document> {
        let mut inner = self.inner.write().await;
        let document = &mut inner.entries.get_mut(&id)?.document;
        document.raw_text = raw_text;
        document.updated_at = Utc::now();
        info!("Document {id} updated from preview");
        Some(document.clone())
    }

    /// All documents, oldest first. Equal timestamps keep insertion order.
    pub async fn list(&self) -> Vec<Document> {
        let inner = self.inner.read().await;
        let mut entries: Vec<&Entry> = inner.entries.values().collect();
        entries.sort_by_key(|entry| (entry.document.created_at, entry.seq));
        entries.into_iter().map(|entry| entry.document.clone()).collect()
    }
}
