// Document generation: turns parsed resume data plus a job posting into raw
// resume or cover-letter text. The LLM path goes through llm_client; the
// template path needs no network.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod template;

use crate::models::resume::ContactInfo;

/// Websites on these domains are mail providers, not portfolios.
const FREE_MAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "email.com",
];

/// Builds the `phone | email [| linkedin] [| website]` line.
pub fn contact_line(contact: &ContactInfo) -> String {
    let mut parts: Vec<&str> = vec![contact.phone.trim(), contact.email.trim()];

    let linkedin = contact.linkedin.trim();
    if !linkedin.is_empty() {
        parts.push(linkedin);
    }

    let website = contact.website.trim();
    let lower = website.to_lowercase();
    if !website.is_empty() && !FREE_MAIL_DOMAINS.iter().any(|d| lower.contains(d)) {
        parts.push(website);
    }

    parts.join(" | ")
}
