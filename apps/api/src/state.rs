use std::sync::Arc;

use crate::config::Config;
use crate::documents::DocumentStore;
use crate::generation::generator::DocumentGenerator;
use crate::preview::sessions::PreviewRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; handlers currently read nothing from it.
    #[allow(dead_code)]
    pub config: Config,
    pub documents: DocumentStore,
    /// One preview controller per open document. Writes saves through to `documents`.
    pub previews: PreviewRegistry,
    /// Pluggable generator. LlmGenerator when ANTHROPIC_API_KEY is set, TemplateGenerator otherwise.
    pub generator: Arc<dyn DocumentGenerator>,
}
