//! Template generator: builds a resume or cover letter straight from the
//! parsed resume data, without an LLM. Used when no API key is configured.
//!
//! The output follows the same plain-text layout the LLM is asked for, so it
//! classifies the same way in the preview.

use chrono::NaiveDate;

use crate::generation::contact_line;
use crate::models::resume::{Experience, ResumeData};

const DEFAULT_NAME: &str = "John Doe";
const DEFAULT_EMAIL: &str = "john.doe@email.com";
const DEFAULT_PHONE: &str = "(555) 123-4567";
const DEFAULT_RESUME_SKILLS: &[&str] = &["Python", "JavaScript", "React", "Node.js"];
const DEFAULT_LETTER_SKILLS: &[&str] = &["Python", "JavaScript", "React"];

const MAX_EXPERIENCES: usize = 3;
const MAX_PROJECTS: usize = 2;
const MAX_EDUCATION: usize = 2;
const PRIMARY_SKILLS: usize = 5;

/// Resume data with the template defaults filled in.
struct Candidate {
    name: String,
    contact: String,
    skills: Vec<String>,
}

fn or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn candidate(data: &ResumeData, default_skills: &[&str]) -> Candidate {
    let mut contact = data.contact_info.clone();
    contact.email = or_default(&contact.email, DEFAULT_EMAIL);
    contact.phone = or_default(&contact.phone, DEFAULT_PHONE);

    let skills: Vec<String> = if data.skills.is_empty() {
        default_skills.iter().map(|s| s.to_string()).collect()
    } else {
        data.skills.clone()
    };

    Candidate {
        name: or_default(&data.name, DEFAULT_NAME),
        contact: contact_line(&contact),
        skills,
    }
}

fn experience_lines(exp: &Experience) -> Vec<String> {
    let title = or_default(&exp.title, "Software Developer");
    let company = or_default(&exp.company, "Tech Company");
    let header = match exp.duration.as_deref().map(str::trim) {
        Some(duration) if !duration.is_empty() => format!("{title} | {company} | {duration}"),
        _ => format!("{title} | {company}"),
    };
    let description = or_default(
        &exp.description,
        "Contributed to software development projects using modern technologies and best practices",
    );

    vec![
        header,
        format!("• {description}"),
        "• Collaborated with cross-functional teams to deliver projects on time".to_string(),
        "• Implemented best practices for code quality and performance optimization".to_string(),
    ]
}

pub fn resume(data: &ResumeData) -> String {
    let candidate = candidate(data, DEFAULT_RESUME_SKILLS);
    let top_skills = candidate
        .skills
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        candidate.name.to_uppercase(),
        candidate.contact,
        String::new(),
        "PROFESSIONAL SUMMARY".to_string(),
        format!(
            "Experienced professional with expertise in {top_skills}. Passionate about technology \
             and innovation with a strong foundation in software development and problem-solving."
        ),
    ];

    if !data.experience.is_empty() {
        lines.push(String::new());
        lines.push("WORK EXPERIENCE".to_string());
        for (i, exp) in data.experience.iter().take(MAX_EXPERIENCES).enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.extend(experience_lines(exp));
        }
    }

    lines.push(String::new());
    lines.push("SKILLS".to_string());
    let (primary, rest) = candidate
        .skills
        .split_at(candidate.skills.len().min(PRIMARY_SKILLS));
    lines.push(format!("Programming Languages: {}", primary.join(", ")));
    if !rest.is_empty() {
        lines.push(format!("Frameworks & Libraries: {}", rest.join(", ")));
    }

    if !data.projects.is_empty() {
        lines.push(String::new());
        lines.push("PROJECTS".to_string());
        lines.extend(data.projects.iter().take(MAX_PROJECTS).cloned());
    }

    lines.push(String::new());
    lines.push("EDUCATION".to_string());
    if data.education.is_empty() {
        lines.push("Bachelor of Science in Computer Science | University Name | 2020".to_string());
    } else {
        lines.extend(data.education.iter().take(MAX_EDUCATION).cloned());
    }

    lines.join("\n")
}

pub fn cover_letter(data: &ResumeData, job_title: &str, company_name: &str, date: NaiveDate) -> String {
    let candidate = candidate(data, DEFAULT_LETTER_SKILLS);
    let name = &candidate.name;
    let lead_skills = candidate
        .skills
        .iter()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let all_skills = candidate.skills.join(", ");
    let experience_context = match data.experience.first() {
        Some(exp) => format!(
            "my experience as a {} at {}",
            or_default(&exp.title, "Software Developer"),
            or_default(&exp.company, "Tech Company")
        ),
        None => "my experience in software development".to_string(),
    };

    format!(
        "{name}
{contact}

{date}

{company_name}
Human Resources Department

Dear Hiring Manager,

I am writing to express my strong interest in the {job_title} position at {company_name}. With my background in {lead_skills} and passion for innovative technology solutions, I am excited about the opportunity to contribute to your team.

My experience in software development has equipped me with the technical skills and problem-solving abilities that align with the requirements for this role. Through {experience_context}, I have delivered projects using {all_skills} and am confident in my ability to make an immediate impact at {company_name}.

I am particularly drawn to {company_name} because of your commitment to innovation and excellence. I am eager to bring my technical expertise and collaborative spirit to your team and contribute to your continued success.

Thank you for considering my application. I look forward to the opportunity to discuss how my skills and experience can benefit {company_name}.

Sincerely,
{name}",
        contact = candidate.contact,
        date = date.format("%B %d, %Y"),
    )
}
