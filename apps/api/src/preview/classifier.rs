//! Document content classifier: recovers the visual structure of a plain-text
//! resume or cover letter, one block per line.
//!
//! # Rule order (first match wins)
//! 1. Blank line
//! 2. Person name (line 0 only, all-caps tokens, > 3 chars)
//! 3. Contact info (`@`, `linkedin.com`, or `|` within the first 5 lines)
//! 4. Section header (all-caps, known section title)
//! 5. Job header (`Title | Company | Dates`)
//! 6. Bullet (`•` prefix)
//! 7. Skill entry (`Key: value`)
//! 8. Paragraph (everything else)
//!
//! Contact lines share `:` and `|` with skill and job lines, so rule 3 must stay
//! ahead of rules 5 and 7.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Section titles recognised by rule 4.
pub const SECTION_TITLES: &[&str] = &[
    "PROFESSIONAL SUMMARY",
    "WORK EXPERIENCE",
    "EDUCATION",
    "SKILLS",
    "PROJECTS",
    "CERTIFICATIONS",
    "EXTRACURRICULAR ACTIVITIES",
    "AWARDS & ACHIEVEMENTS",
    "VOLUNTEER",
    "LANGUAGES",
    "INTERESTS",
];

/// Lines below this index that contain `|` are treated as the contact line.
const CONTACT_PIPE_WINDOW: usize = 5;

const BULLET_GLYPH: char = '•';

static PERSON_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]+(?: +[A-Z]+)*$").expect("static regex"));

static HEADER_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z\s&]+$").expect("static regex"));

// Titles only count as whole words: "TECHNICAL SKILLS" qualifies, "SKILLSET" does not.
static SECTION_VOCABULARY: Lazy<Regex> = Lazy::new(|| {
    let alternation = SECTION_TITLES
        .iter()
        .map(|title| regex::escape(title))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?:^|[^A-Z])(?:{alternation})(?:[^A-Z]|$)")).expect("static regex")
});

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// Rendering role of a classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Blank,
    PersonName,
    ContactInfo,
    SectionHeader,
    JobHeader,
    Bullet,
    SkillEntry,
    Paragraph,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Blank => "blank",
            Role::PersonName => "person_name",
            Role::ContactInfo => "contact_info",
            Role::SectionHeader => "section_header",
            Role::JobHeader => "job_header",
            Role::Bullet => "bullet",
            Role::SkillEntry => "skill_entry",
            Role::Paragraph => "paragraph",
        }
    }
}

/// One classified line. Text is always trimmed; bullets lose their glyph and
/// skill entries are split on the first colon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Block {
    Blank,
    PersonName { text: String },
    ContactInfo { text: String },
    SectionHeader { text: String },
    JobHeader { text: String },
    Bullet { text: String },
    SkillEntry { key: String, value: String },
    Paragraph { text: String },
}

impl Block {
    pub fn role(&self) -> Role {
        match self {
            Block::Blank => Role::Blank,
            Block::PersonName { .. } => Role::PersonName,
            Block::ContactInfo { .. } => Role::ContactInfo,
            Block::SectionHeader { .. } => Role::SectionHeader,
            Block::JobHeader { .. } => Role::JobHeader,
            Block::Bullet { .. } => Role::Bullet,
            Block::SkillEntry { .. } => Role::SkillEntry,
            Block::Paragraph { .. } => Role::Paragraph,
        }
    }

    /// Display text of the block. Skill entries are joined back as `key: value`.
    pub fn display_text(&self) -> String {
        match self {
            Block::Blank => String::new(),
            Block::SkillEntry { key, value } => format!("{key}: {value}"),
            Block::PersonName { text }
            | Block::ContactInfo { text }
            | Block::SectionHeader { text }
            | Block::JobHeader { text }
            | Block::Bullet { text }
            | Block::Paragraph { text } => text.clone(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rule table
// ────────────────────────────────────────────────────────────────────────────

/// A line as seen by the rules: trimmed content plus its position in the document.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    text: &'a str,
    index: usize,
}

struct Rule {
    role: Role,
    apply: fn(Line<'_>) -> Option<Block>,
}

/// Evaluated top to bottom; the first rule returning `Some` decides the block.
const RULES: &[Rule] = &[
    Rule {
        role: Role::Blank,
        apply: blank,
    },
    Rule {
        role: Role::PersonName,
        apply: person_name,
    },
    Rule {
        role: Role::ContactInfo,
        apply: contact_info,
    },
    Rule {
        role: Role::SectionHeader,
        apply: section_header,
    },
    Rule {
        role: Role::JobHeader,
        apply: job_header,
    },
    Rule {
        role: Role::Bullet,
        apply: bullet,
    },
    Rule {
        role: Role::SkillEntry,
        apply: skill_entry,
    },
];

fn blank(line: Line<'_>) -> Option<Block> {
    line.text.is_empty().then_some(Block::Blank)
}

fn person_name(line: Line<'_>) -> Option<Block> {
    (line.index == 0 && line.text.chars().count() > 3 && PERSON_NAME.is_match(line.text)).then(
        || Block::PersonName {
            text: line.text.to_string(),
        },
    )
}

fn contact_info(line: Line<'_>) -> Option<Block> {
    let text = line.text;
    let is_contact = text.contains('@')
        || text.to_ascii_lowercase().contains("linkedin.com")
        || (text.contains('|') && line.index < CONTACT_PIPE_WINDOW);

    is_contact.then(|| Block::ContactInfo {
        text: text.to_string(),
    })
}

fn section_header(line: Line<'_>) -> Option<Block> {
    let text = line.text;
    let is_header = text.chars().count() > 3
        && HEADER_SHAPE.is_match(text)
        && SECTION_VOCABULARY.is_match(text);

    is_header.then(|| Block::SectionHeader {
        text: text.to_string(),
    })
}

fn job_header(line: Line<'_>) -> Option<Block> {
    let text = line.text;
    if !text.contains('|') {
        return None;
    }
    let parts = text.split('|').filter(|p| !p.trim().is_empty()).count();

    (parts >= 2).then(|| Block::JobHeader {
        text: text.to_string(),
    })
}

fn bullet(line: Line<'_>) -> Option<Block> {
    line.text
        .strip_prefix(BULLET_GLYPH)
        .map(|rest| Block::Bullet {
            text: rest.trim().to_string(),
        })
}

fn skill_entry(line: Line<'_>) -> Option<Block> {
    if line.text.contains('@') {
        return None;
    }
    line.text.split_once(':').map(|(key, value)| Block::SkillEntry {
        key: key.trim().to_string(),
        value: value.trim().to_string(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Public API
// ────────────────────────────────────────────────────────────────────────────

/// Classifies a single line given its zero-based position in the document.
pub fn classify_line(raw_line: &str, index: usize) -> Block {
    let line = Line {
        text: raw_line.trim(),
        index,
    };

    RULES
        .iter()
        .find_map(|rule| {
            let block = (rule.apply)(line)?;
            debug_assert_eq!(block.role(), rule.role);
            Some(block)
        })
        .unwrap_or_else(|| Block::Paragraph {
            text: line.text.to_string(),
        })
}

/// Classifies a whole document. Returns exactly one block per `\n`-delimited
/// line, in order; the empty string yields no blocks.
pub fn classify(raw_text: &str) -> Vec<Block> {
    if raw_text.is_empty() {
        return Vec::new();
    }

    raw_text
        .split('\n')
        .enumerate()
        .map(|(index, line)| classify_line(line, index))
        .collect()
}

/// Number of lines `classify` will produce for `raw_text`.
pub fn line_count(raw_text: &str) -> usize {
    if raw_text.is_empty() {
        0
    } else {
        raw_text.split('\n').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE_RESUME: &str = "JANE SMITH
(555) 123-4567 | jane@example.com | linkedin.com/in/janesmith

PROFESSIONAL SUMMARY
Backend engineer with seven years of experience.

WORK EXPERIENCE
Senior Engineer | Acme Corp | 2020 - Present
• Led a team of 5 engineers
• Cut p99 latency by 40%

SKILLS
Programming Languages: Rust, Go, Python
Tools & Technologies: Docker, Kubernetes";

    #[test]
    fn test_empty_input_yields_no_blocks() {
        assert!(classify("").is_empty());
        assert_eq!(line_count(""), 0);
    }

    #[test]
    fn test_one_block_per_line_in_order() {
        let blocks = classify(SAMPLE_RESUME);
        assert_eq!(blocks.len(), SAMPLE_RESUME.lines().count());

        let roles: Vec<Role> = blocks.iter().map(Block::role).collect();
        assert_eq!(
            roles,
            vec![
                Role::PersonName,
                Role::ContactInfo,
                Role::Blank,
                Role::SectionHeader,
                Role::Paragraph,
                Role::Blank,
                Role::SectionHeader,
                Role::JobHeader,
                Role::Bullet,
                Role::Bullet,
                Role::Blank,
                Role::SectionHeader,
                Role::SkillEntry,
                Role::SkillEntry,
            ]
        );
    }

    #[test]
    fn test_trailing_newline_produces_trailing_blank() {
        let blocks = classify("Hello there\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1], Block::Blank);
    }

    #[test]
    fn test_whitespace_only_line_is_blank() {
        assert_eq!(classify_line("   \t ", 3), Block::Blank);
    }

    #[test]
    fn test_contact_beats_job_header_on_first_line() {
        let block = classify_line("John Doe | john@example.com", 0);
        assert_eq!(block.role(), Role::ContactInfo);
    }

    #[test]
    fn test_person_name_only_on_first_line() {
        assert_eq!(
            classify_line("JOHN DOE", 0),
            Block::PersonName {
                text: "JOHN DOE".to_string()
            }
        );
        // A caps company name further down is not a person.
        assert_eq!(classify_line("ACME CORP", 7).role(), Role::Paragraph);
    }

    #[test]
    fn test_person_name_needs_more_than_three_chars() {
        assert_eq!(classify_line("BOB", 0).role(), Role::Paragraph);
        assert_eq!(classify_line("Jane Smith", 0).role(), Role::Paragraph);
    }

    #[test]
    fn test_section_header_vocabulary() {
        assert_eq!(
            classify_line("SKILLS", 4),
            Block::SectionHeader {
                text: "SKILLS".to_string()
            }
        );
        assert_eq!(classify_line("TECHNICAL SKILLS", 9).role(), Role::SectionHeader);
        assert_eq!(
            classify_line("AWARDS & ACHIEVEMENTS", 20).role(),
            Role::SectionHeader
        );
        assert_eq!(classify_line("SKILLSET BUILDING", 4).role(), Role::Paragraph);
        assert_eq!(classify_line("OBJECTIVE", 4).role(), Role::Paragraph);
    }

    #[test]
    fn test_section_header_requires_uppercase() {
        assert_eq!(classify_line("Skills", 4).role(), Role::Paragraph);
    }

    #[test]
    fn test_pipe_in_first_five_lines_is_contact() {
        assert_eq!(classify_line("(555) 123-4567 | Austin", 4).role(), Role::ContactInfo);
        assert_eq!(classify_line("Engineer | Acme", 5).role(), Role::JobHeader);
    }

    #[test]
    fn test_linkedin_is_contact_anywhere() {
        assert_eq!(
            classify_line("https://www.LinkedIn.com/in/someone", 30).role(),
            Role::ContactInfo
        );
    }

    #[test]
    fn test_job_header_needs_two_non_empty_parts() {
        assert_eq!(classify_line("Engineer |", 10).role(), Role::Paragraph);
        assert_eq!(classify_line("| |", 10).role(), Role::Paragraph);
        assert_eq!(
            classify_line("Engineer | Acme | 2021", 10),
            Block::JobHeader {
                text: "Engineer | Acme | 2021".to_string()
            }
        );
    }

    #[test]
    fn test_bullet_strips_glyph() {
        assert_eq!(
            classify_line("• Led a team of 5 engineers", 8),
            Block::Bullet {
                text: "Led a team of 5 engineers".to_string()
            }
        );
        assert_eq!(classify_line("  •   spaced  ", 8).display_text(), "spaced");
    }

    #[test]
    fn test_skill_entry_splits_on_first_colon() {
        assert_eq!(
            classify_line("Languages: English, Spanish", 12),
            Block::SkillEntry {
                key: "Languages".to_string(),
                value: "English, Spanish".to_string()
            }
        );
        assert_eq!(
            classify_line("Meeting: 10:30 daily", 12),
            Block::SkillEntry {
                key: "Meeting".to_string(),
                value: "10:30 daily".to_string()
            }
        );
    }

    #[test]
    fn test_colon_with_at_sign_is_contact_not_skill() {
        assert_eq!(
            classify_line("Email: jane@example.com", 15).role(),
            Role::ContactInfo
        );
    }

    #[test]
    fn test_rule_order_is_canonical() {
        let order: Vec<Role> = RULES.iter().map(|rule| rule.role).collect();
        assert_eq!(
            order,
            vec![
                Role::Blank,
                Role::PersonName,
                Role::ContactInfo,
                Role::SectionHeader,
                Role::JobHeader,
                Role::Bullet,
                Role::SkillEntry,
            ]
        );
    }

    #[test]
    fn test_block_serializes_with_role_tag() {
        let json = serde_json::to_value(Block::SkillEntry {
            key: "Databases".to_string(),
            value: "Postgres".to_string(),
        })
        .unwrap();
        assert_eq!(json["role"], "skill_entry");
        assert_eq!(json["key"], "Databases");
        assert_eq!(serde_json::to_value(Block::Blank).unwrap()["role"], "blank");
    }

    proptest! {
        #[test]
        fn prop_one_block_per_line(text in "(?s).{0,400}") {
            let blocks = classify(&text);
            let expected = if text.is_empty() { 0 } else { text.split('\n').count() };
            prop_assert_eq!(blocks.len(), expected);
            prop_assert_eq!(line_count(&text), expected);
        }

        #[test]
        fn prop_classify_is_deterministic(text in "(?s).{0,400}") {
            prop_assert_eq!(classify(&text), classify(&text));
        }

        #[test]
        fn prop_person_name_only_at_index_zero(
            lines in proptest::collection::vec("[A-Z ]{0,12}", 1..8)
        ) {
            let text = lines.join("\n");
            for (index, block) in classify(&text).iter().enumerate() {
                if block.role() == Role::PersonName {
                    prop_assert_eq!(index, 0);
                }
            }
        }
    }
}
