pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::documents::handlers as documents;
use crate::generation::handlers as generation;
use crate::preview::handlers as preview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/ai/health", get(generation::handle_ai_health))
        .route("/api/v1/classify", post(preview::handle_classify))
        // Documents
        .route(
            "/api/v1/documents",
            get(documents::handle_list_documents).post(documents::handle_create_document),
        )
        .route(
            "/api/v1/documents/generate",
            post(generation::handle_generate),
        )
        .route("/api/v1/documents/:id", get(documents::handle_get_document))
        // Preview / edit session
        .route(
            "/api/v1/documents/:id/preview",
            get(preview::handle_get_preview)
                .post(preview::handle_open_preview)
                .delete(preview::handle_close_preview),
        )
        .route(
            "/api/v1/documents/:id/preview/html",
            get(preview::handle_preview_html),
        )
        .route(
            "/api/v1/documents/:id/preview/edit",
            post(preview::handle_begin_edit),
        )
        .route(
            "/api/v1/documents/:id/preview/draft",
            put(preview::handle_edit_draft),
        )
        .route(
            "/api/v1/documents/:id/preview/cancel",
            post(preview::handle_cancel_edit),
        )
        .route(
            "/api/v1/documents/:id/preview/save",
            post(preview::handle_save_edit),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::documents::DocumentStore;
    use crate::generation::generator::TemplateGenerator;
    use crate::preview::sessions::PreviewRegistry;

    fn test_state() -> AppState {
        let documents = DocumentStore::new();
        AppState {
            config: Config {
                anthropic_api_key: None,
                port: 0,
                rust_log: "debug".into(),
            },
            previews: PreviewRegistry::new(documents.clone()),
            documents,
            generator: Arc::new(TemplateGenerator),
        }
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(json) => request.body(Body::from(json.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn create_document(router: &Router, raw_text: &str) -> String {
        let (status, doc) = send(
            router,
            Method::POST,
            "/api/v1/documents",
            Some(json!({
                "raw_text": raw_text,
                "document_kind": "resume",
                "title": "My Resume"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        doc["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let router = build_router(test_state());
        let (status, body) = send(&router, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_ai_health_reports_template_backend() {
        let router = build_router(test_state());
        let (_, body) = send(&router, Method::GET, "/api/v1/ai/health", None).await;
        assert_eq!(body["status"], "limited");
        assert_eq!(body["backend"], "template");
    }

    #[tokio::test]
    async fn test_classify_endpoint() {
        let router = build_router(test_state());
        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/classify",
            Some(json!({"raw_text": "JANE DOE\njane@x.io\n\nSKILLS\nLanguages: English, Spanish"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["line_count"], 5);
        let roles: Vec<&str> = body["blocks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["role"].as_str().unwrap())
            .collect();
        assert_eq!(
            roles,
            vec!["person_name", "contact_info", "blank", "section_header", "skill_entry"]
        );
        assert_eq!(body["blocks"][4]["key"], "Languages");
        assert_eq!(body["blocks"][4]["value"], "English, Spanish");
    }

    #[tokio::test]
    async fn test_create_document_requires_title() {
        let router = build_router(test_state());
        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/documents",
            Some(json!({"raw_text": "x", "document_kind": "resume", "title": " "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_required_fields_use_error_envelope() {
        let router = build_router(test_state());

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/documents",
            Some(json!({"raw_text": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/documents/generate",
            Some(json!({"company_name": "Acme"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "job_title cannot be empty");
    }

    #[tokio::test]
    async fn test_unknown_document_is_not_found() {
        let router = build_router(test_state());
        let uri = format!("/api/v1/documents/{}/preview", uuid::Uuid::new_v4());
        let (status, _) = send(&router, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_edit_then_save_round_trip() {
        let router = build_router(test_state());
        let id = create_document(&router, "JANE DOE\njane@x.io").await;
        let base = format!("/api/v1/documents/{id}/preview");

        let (status, view) = send(&router, Method::POST, &base, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["phase"], "viewing");
        assert_eq!(view["char_count"], 18);

        let (_, view) = send(&router, Method::POST, &format!("{base}/edit"), None).await;
        assert_eq!(view["phase"], "editing");
        assert_eq!(view["draft"], "JANE DOE\njane@x.io");

        let (_, view) = send(
            &router,
            Method::PUT,
            &format!("{base}/draft"),
            Some(json!({"text": "JANE DOE\n\nSKILLS"})),
        )
        .await;
        assert_eq!(view["char_count"], 16);

        let (status, view) = send(&router, Method::POST, &format!("{base}/save"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["phase"], "viewing");
        assert_eq!(view["blocks"][2]["role"], "section_header");

        let (_, doc) = send(&router, Method::GET, &format!("/api/v1/documents/{id}"), None).await;
        assert_eq!(doc["raw_text"], "JANE DOE\n\nSKILLS");
    }

    #[tokio::test]
    async fn test_cancel_and_close_leave_document_unchanged() {
        let router = build_router(test_state());
        let id = create_document(&router, "original").await;
        let base = format!("/api/v1/documents/{id}/preview");

        send(&router, Method::POST, &base, None).await;
        send(&router, Method::POST, &format!("{base}/edit"), None).await;
        send(
            &router,
            Method::PUT,
            &format!("{base}/draft"),
            Some(json!({"text": "changed"})),
        )
        .await;
        let (_, view) = send(&router, Method::POST, &format!("{base}/cancel"), None).await;
        assert_eq!(view["phase"], "viewing");
        assert_eq!(view["char_count"], 8);

        send(&router, Method::POST, &format!("{base}/edit"), None).await;
        send(
            &router,
            Method::PUT,
            &format!("{base}/draft"),
            Some(json!({"text": "lost on close"})),
        )
        .await;
        let (status, _) = send(&router, Method::DELETE, &base, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, view) = send(&router, Method::GET, &base, None).await;
        assert_eq!(view["phase"], "closed");
        let (_, doc) = send(&router, Method::GET, &format!("/api/v1/documents/{id}"), None).await;
        assert_eq!(doc["raw_text"], "original");
    }

    #[tokio::test]
    async fn test_invalid_transition_is_conflict() {
        let router = build_router(test_state());
        let id = create_document(&router, "text").await;
        let base = format!("/api/v1/documents/{id}/preview");

        let (status, body) = send(&router, Method::POST, &format!("{base}/save"), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "INVALID_TRANSITION");

        send(&router, Method::POST, &base, None).await;
        let (status, _) = send(&router, Method::POST, &base, None).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_generate_then_preview_html() {
        let router = build_router(test_state());
        let (status, doc) = send(
            &router,
            Method::POST,
            "/api/v1/documents/generate",
            Some(json!({
                "resume_data": {"name": "Linus Torvalds", "contact_info": {"email": "linus@kernel.org"}},
                "job_description": "Maintain a kernel.",
                "job_title": "Maintainer",
                "company_name": "Linux Foundation",
                "contentType": "resume"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(doc["kind"], "resume");
        assert_eq!(doc["title"], "Resume for Maintainer at Linux Foundation");
        let id = doc["id"].as_str().unwrap();

        send(&router, Method::POST, &format!("/api/v1/documents/{id}/preview"), None).await;

        let request = Request::builder()
            .uri(format!("/api/v1/documents/{id}/preview/html"))
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains(r#"class="person_name""#));
        assert!(html.contains("LINUS TORVALDS"));
        assert!(html.contains("characters"));
    }

    #[tokio::test]
    async fn test_generate_requires_company() {
        let router = build_router(test_state());
        let (status, _) = send(
            &router,
            Method::POST,
            "/api/v1/documents/generate",
            Some(json!({"job_title": "Engineer", "company_name": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
