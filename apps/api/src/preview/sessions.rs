//! Preview sessions keyed by document id. Holding at most one controller per
//! document keeps a single edit session per document.
//!
//! Saved text is written to the document store before the session lock is
//! released, so store writes for one document land in save order.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::documents::DocumentStore;
use crate::preview::controller::{HostEvent, Outbox, PreviewController, TransitionError};
use crate::preview::render::{view, PreviewView};

/// Result of a preview operation: the new view plus owner notifications.
#[derive(Debug)]
pub struct SessionOutcome {
    pub view: PreviewView,
    pub events: Vec<HostEvent>,
}

type Session = PreviewController<Outbox>;

#[derive(Clone)]
pub struct PreviewRegistry {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    documents: DocumentStore,
}

impl PreviewRegistry {
    /// `documents` is the owner that receives committed saves.
    pub fn new(documents: DocumentStore) -> Self {
        Self {
            sessions: Arc::default(),
            documents,
        }
    }

    /// Runs one controller operation against a document's session. A document
    /// with no session is `Closed`; closed sessions are dropped from the registry.
    pub async fn run<F>(&self, document_id: Uuid, op: F) -> Result<SessionOutcome, TransitionError>
    where
        F: FnOnce(&mut Session) -> Result<(), TransitionError>,
    {
        let mut sessions = self.sessions.lock().await;
        let controller = sessions
            .entry(document_id)
            .or_insert_with(|| PreviewController::new(Outbox::default()));

        let result = op(controller);
        let events = controller.host_mut().drain();
        let current = view(controller.state());
        debug!(
            "preview {document_id}: {:?}, {} chars shown",
            controller.phase(),
            controller.char_count()
        );

        if current == PreviewView::Closed {
            sessions.remove(&document_id);
        }

        for event in &events {
            if let HostEvent::Saved(text) = event {
                if self
                    .documents
                    .replace_text(document_id, text.clone())
                    .await
                    .is_none()
                {
                    warn!("Saved preview for document {document_id} which no longer exists");
                }
            }
        }
        drop(sessions);

        result.map(|()| SessionOutcome {
            view: current,
            events,
        })
    }

    pub async fn view(&self, document_id: Uuid) -> PreviewView {
        self.sessions
            .lock()
            .await
            .get(&document_id)
            .map(|controller| view(controller.state()))
            .unwrap_or(PreviewView::Closed)
    }
}
