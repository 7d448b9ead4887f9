//! Rendering contract for the preview: a phase-specific view model plus an HTML
//! rendering with one element per classified block.

use serde::Serialize;

use crate::preview::classifier::{classify, Block, Role};
use crate::preview::controller::PreviewState;

/// Fixed visual treatment for a block role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockStyle {
    pub font_size_px: u8,
    pub bold: bool,
    pub underline: bool,
    pub muted: bool,
    pub margin_top_px: u8,
    pub indent_px: u8,
    /// Glyph drawn before the text (bullets only).
    pub leading_glyph: Option<char>,
}

const BODY: BlockStyle = BlockStyle {
    font_size_px: 12,
    bold: false,
    underline: false,
    muted: false,
    margin_top_px: 0,
    indent_px: 0,
    leading_glyph: None,
};

/// Style table keyed by role. Resume and cover letter share it.
pub fn style_for(role: Role) -> BlockStyle {
    match role {
        Role::Blank => BlockStyle {
            margin_top_px: 8,
            ..BODY
        },
        Role::PersonName => BlockStyle {
            font_size_px: 18,
            bold: true,
            ..BODY
        },
        Role::ContactInfo => BlockStyle {
            font_size_px: 11,
            muted: true,
            ..BODY
        },
        Role::SectionHeader => BlockStyle {
            font_size_px: 13,
            bold: true,
            underline: true,
            margin_top_px: 6,
            ..BODY
        },
        Role::JobHeader => BlockStyle { bold: true, ..BODY },
        Role::Bullet => BlockStyle {
            indent_px: 16,
            leading_glyph: Some('•'),
            ..BODY
        },
        Role::SkillEntry | Role::Paragraph => BODY,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledBlock {
    #[serde(flatten)]
    pub block: Block,
    pub style: BlockStyle,
}

/// What the preview shows in each phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PreviewView {
    Closed,
    #[serde(rename = "viewing")]
    Document {
        title: String,
        label: &'static str,
        blocks: Vec<StyledBlock>,
        char_count: usize,
    },
    #[serde(rename = "editing")]
    Editor {
        title: String,
        label: &'static str,
        draft: String,
        char_count: usize,
    },
}

impl PreviewView {
    pub fn char_count(&self) -> usize {
        match self {
            PreviewView::Closed => 0,
            PreviewView::Document { char_count, .. } | PreviewView::Editor { char_count, .. } => {
                *char_count
            }
        }
    }
}

/// Builds the view for the current state. Viewing re-classifies the raw text
/// every time, so a freshly saved edit shows up immediately.
pub fn view(state: &PreviewState) -> PreviewView {
    let Some(document) = state.document() else {
        return PreviewView::Closed;
    };
    let title = document.title.clone();
    let label = document.document_kind.label();
    let char_count = state.char_count();

    match state {
        PreviewState::Editing { draft, .. } => PreviewView::Editor {
            title,
            label,
            draft: draft.clone(),
            char_count,
        },
        _ => PreviewView::Document {
            title,
            label,
            blocks: classify(&document.raw_text)
                .into_iter()
                .map(|block| StyledBlock {
                    style: style_for(block.role()),
                    block,
                })
                .collect(),
            char_count,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HTML
// ────────────────────────────────────────────────────────────────────────────

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn css(style: &BlockStyle) -> String {
    let mut rules = vec![format!("font-size:{}px", style.font_size_px)];
    if style.bold {
        rules.push("font-weight:bold".to_string());
    }
    if style.underline {
        rules.push("text-decoration:underline".to_string());
    }
    if style.muted {
        rules.push("color:#555".to_string());
    }
    if style.margin_top_px > 0 {
        rules.push(format!("margin-top:{}px", style.margin_top_px));
    }
    if style.indent_px > 0 {
        rules.push(format!("padding-left:{}px", style.indent_px));
    }
    rules.join(";")
}

fn render_block(styled: &StyledBlock) -> String {
    let style = css(&styled.style);
    let role = styled.block.role().as_str();

    let inner = match &styled.block {
        Block::Blank => String::new(),
        Block::SkillEntry { key, value } => format!(
            "<strong>{}:</strong> {}",
            escape_html(key),
            escape_html(value)
        ),
        Block::Bullet { text } => {
            let glyph = styled.style.leading_glyph.unwrap_or('•');
            format!("{glyph} {}", escape_html(text))
        }
        other => escape_html(&other.display_text()),
    };

    format!(r#"<div class="{role}" style="{style}">{inner}</div>"#)
}

fn header(title: &str, label: &str, char_count: usize) -> String {
    format!(
        r#"<header><h2>{}</h2><span class="kind">{label}</span><span class="char-count">{char_count} characters</span></header>"#,
        escape_html(title)
    )
}

/// Renders a view as an HTML fragment. The character count is always present.
pub fn render_html(view: &PreviewView) -> String {
    let char_count = view.char_count();
    match view {
        PreviewView::Closed => String::new(),
        PreviewView::Document {
            title,
            label,
            blocks,
            ..
        } => {
            let body: String = blocks.iter().map(render_block).collect();
            format!(
                r#"<section class="preview">{}<article>{body}</article></section>"#,
                header(title, label, char_count)
            )
        }
        PreviewView::Editor {
            title,
            label,
            draft,
            ..
        } => format!(
            r#"<section class="preview editing">{}<textarea name="draft">{}</textarea></section>"#,
            header(title, label, char_count),
            escape_html(draft)
        ),
    }
}
