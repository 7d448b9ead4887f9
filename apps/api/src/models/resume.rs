use serde::{Deserialize, Serialize};

/// Structured resume data as produced by the upstream resume parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub name: String,
    pub contact_info: ContactInfo,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<String>,
    pub summary: String,
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub duration: Option<String>,
    pub description: String,
}
