//! Document generators: pluggable, trait-based producers of raw document text.
//!
//! `AppState` holds an `Arc<dyn DocumentGenerator>`, chosen at startup:
//! `LlmGenerator` when an API key is configured, `TemplateGenerator` otherwise.

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::contact_line;
use crate::generation::prompts::{COVER_LETTER_PROMPT_TEMPLATE, RESUME_PROMPT_TEMPLATE};
use crate::generation::template;
use crate::llm_client::prompts::{CAREER_WRITER_SYSTEM, PLAIN_TEXT_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::models::document::DocumentKind;
use crate::models::resume::ResumeData;

/// Request body for document generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub resume_data: ResumeData,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default, alias = "contentType")]
    pub content_type: DocumentKind,
}

impl GenerationRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.job_title.trim().is_empty() {
            return Err(AppError::Validation("job_title cannot be empty".to_string()));
        }
        if self.company_name.trim().is_empty() {
            return Err(AppError::Validation(
                "company_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Title given to the stored document.
    pub fn document_title(&self) -> String {
        format!(
            "{} for {} at {}",
            self.content_type.label(),
            self.job_title.trim(),
            self.company_name.trim()
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap generation backends without touching handlers.
#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, AppError>;

    /// "llm" | "template", reported by the AI health check.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// TemplateGenerator
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic generator with no LLM call.
pub struct TemplateGenerator;

#[async_trait]
impl DocumentGenerator for TemplateGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, AppError> {
        let text = match request.content_type {
            DocumentKind::Resume => template::resume(&request.resume_data),
            DocumentKind::CoverLetter => template::cover_letter(
                &request.resume_data,
                request.job_title.trim(),
                request.company_name.trim(),
                Utc::now().date_naive(),
            ),
        };
        Ok(text)
    }

    fn backend(&self) -> &'static str {
        "template"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmGenerator
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmGenerator(pub LlmClient);

/// Replaces each `{key}` in `template` in a single left-to-right pass.
/// Substituted values are never rescanned, and unknown keys are left as is.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Fills the prompt template for the requested document kind.
pub fn build_prompt(request: &GenerationRequest) -> Result<String, AppError> {
    let data = &request.resume_data;
    let name = if data.name.trim().is_empty() {
        "Candidate"
    } else {
        data.name.trim()
    };
    let resume_json = serde_json::to_string_pretty(data)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("resume data serialization: {e}")))?;

    let template = match request.content_type {
        DocumentKind::Resume => RESUME_PROMPT_TEMPLATE,
        DocumentKind::CoverLetter => COVER_LETTER_PROMPT_TEMPLATE,
    };

    let name_upper = name.to_uppercase();
    let contact = contact_line(&data.contact_info);
    let current_date = Utc::now().format("%B %d, %Y").to_string();
    let prompt = fill_placeholders(
        template,
        &[
            ("candidate_name_upper", name_upper.as_str()),
            ("candidate_name", name),
            ("contact_line", contact.as_str()),
            ("current_date", current_date.as_str()),
            ("job_title", request.job_title.trim()),
            ("company_name", request.company_name.trim()),
            ("resume_json", resume_json.as_str()),
            ("job_description", request.job_description.trim()),
        ],
    );

    Ok(format!("{prompt}\n{PLAIN_TEXT_INSTRUCTION}"))
}

#[async_trait]
impl DocumentGenerator for LlmGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, AppError> {
        let prompt = build_prompt(request)?;
        info!(
            "Generating {:?} via LLM (prompt length {})",
            request.content_type,
            prompt.len()
        );

        self.0
            .call_text(&prompt, CAREER_WRITER_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("document generation failed: {e}")))
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}
