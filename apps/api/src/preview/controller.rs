//! Preview/Edit controller: an explicit `Closed | Viewing | Editing` state
//! machine over a single document.
//!
//! `step` is the pure transition function. `PreviewController` owns the current
//! state and forwards save/close notifications to its `PreviewHost`.
//!
//! Closing while editing drops the draft without a prompt.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::document::DocumentKind;

/// What the embedding UI hands over when it opens a preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewInput {
    pub raw_text: String,
    pub document_kind: DocumentKind,
    pub title: String,
}

/// Observable phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Closed,
    Viewing,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewState {
    Closed,
    Viewing {
        document: PreviewInput,
    },
    Editing {
        document: PreviewInput,
        draft: String,
    },
}

impl PreviewState {
    pub fn phase(&self) -> Phase {
        match self {
            PreviewState::Closed => Phase::Closed,
            PreviewState::Viewing { .. } => Phase::Viewing,
            PreviewState::Editing { .. } => Phase::Editing,
        }
    }

    pub fn document(&self) -> Option<&PreviewInput> {
        match self {
            PreviewState::Closed => None,
            PreviewState::Viewing { document } | PreviewState::Editing { document, .. } => {
                Some(document)
            }
        }
    }

    /// The text currently on screen: the draft while editing, otherwise the raw text.
    pub fn shown_text(&self) -> &str {
        match self {
            PreviewState::Closed => "",
            PreviewState::Viewing { document } => &document.raw_text,
            PreviewState::Editing { draft, .. } => draft,
        }
    }

    pub fn char_count(&self) -> usize {
        self.shown_text().chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewAction {
    Open(PreviewInput),
    BeginEdit,
    EditDraft(String),
    CancelEdit,
    SaveEdit,
    Close,
}

impl PreviewAction {
    pub fn name(&self) -> &'static str {
        match self {
            PreviewAction::Open(_) => "open",
            PreviewAction::BeginEdit => "begin_edit",
            PreviewAction::EditDraft(_) => "edit_draft",
            PreviewAction::CancelEdit => "cancel_edit",
            PreviewAction::SaveEdit => "save_edit",
            PreviewAction::Close => "close",
        }
    }
}

/// Notification owed to the document's owner after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Saved(String),
    Closed,
}

/// An action issued from a phase that does not accept it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot {action} while preview is {phase:?}")]
pub struct TransitionError {
    pub phase: Phase,
    pub action: &'static str,
}

#[derive(Debug)]
pub struct Step {
    pub state: PreviewState,
    pub event: Option<HostEvent>,
}

/// A refused action. The state comes back untouched.
#[derive(Debug)]
pub struct Rejected {
    pub state: PreviewState,
    pub error: TransitionError,
}

// ────────────────────────────────────────────────────────────────────────────
// Transition function
// ────────────────────────────────────────────────────────────────────────────

fn stay(state: PreviewState) -> Result<Step, Rejected> {
    Ok(Step { state, event: None })
}

/// Applies one action. Never mutates anything outside the returned state.
pub fn step(state: PreviewState, action: PreviewAction) -> Result<Step, Rejected> {
    use PreviewAction as A;
    use PreviewState as S;

    match (state, action) {
        (S::Closed, A::Open(document)) => stay(S::Viewing { document }),

        (S::Viewing { document }, A::BeginEdit) => {
            let draft = document.raw_text.clone();
            stay(S::Editing { document, draft })
        }

        (S::Editing { document, .. }, A::EditDraft(draft)) => stay(S::Editing { document, draft }),

        (S::Editing { document, .. }, A::CancelEdit) => stay(S::Viewing { document }),

        (S::Editing { mut document, draft }, A::SaveEdit) => {
            document.raw_text = draft;
            let event = HostEvent::Saved(document.raw_text.clone());
            Ok(Step {
                state: S::Viewing { document },
                event: Some(event),
            })
        }

        (S::Closed, A::Close) => stay(S::Closed),

        (S::Viewing { .. } | S::Editing { .. }, A::Close) => Ok(Step {
            state: S::Closed,
            event: Some(HostEvent::Closed),
        }),

        (state, action) => {
            let error = TransitionError {
                phase: state.phase(),
                action: action.name(),
            };
            Err(Rejected { state, error })
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Controller
// ────────────────────────────────────────────────────────────────────────────

/// Receives the controller's outbound notifications.
pub trait PreviewHost {
    /// Called exactly once per successful save with the committed text.
    fn document_saved(&mut self, text: &str);

    /// Called when an open preview is closed. Discarded drafts are not reported.
    fn preview_closed(&mut self);
}

/// Host that queues notifications for the caller to drain later.
#[derive(Debug, Default)]
pub struct Outbox {
    events: Vec<HostEvent>,
}

impl Outbox {
    pub fn drain(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }
}

impl PreviewHost for Outbox {
    fn document_saved(&mut self, text: &str) {
        self.events.push(HostEvent::Saved(text.to_string()));
    }

    fn preview_closed(&mut self) {
        self.events.push(HostEvent::Closed);
    }
}

#[derive(Debug)]
pub struct PreviewController<H: PreviewHost> {
    state: PreviewState,
    host: H,
}

impl<H: PreviewHost> PreviewController<H> {
    pub fn new(host: H) -> Self {
        Self {
            state: PreviewState::Closed,
            host,
        }
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn char_count(&self) -> usize {
        self.state.char_count()
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn dispatch(&mut self, action: PreviewAction) -> Result<(), TransitionError> {
        let name = action.name();
        let current = std::mem::replace(&mut self.state, PreviewState::Closed);

        match step(current, action) {
            Ok(Step { state, event }) => {
                debug!("preview {name}: -> {:?}", state.phase());
                self.state = state;
                match event {
                    Some(HostEvent::Saved(text)) => {
                        info!("preview saved ({} chars)", text.chars().count());
                        self.host.document_saved(&text);
                    }
                    Some(HostEvent::Closed) => self.host.preview_closed(),
                    None => {}
                }
                Ok(())
            }
            Err(Rejected { state, error }) => {
                debug!("preview rejected: {error}");
                self.state = state;
                Err(error)
            }
        }
    }

    pub fn open(&mut self, input: PreviewInput) -> Result<(), TransitionError> {
        self.dispatch(PreviewAction::Open(input))
    }

    pub fn begin_edit(&mut self) -> Result<(), TransitionError> {
        self.dispatch(PreviewAction::BeginEdit)
    }

    pub fn edit_draft(&mut self, text: impl Into<String>) -> Result<(), TransitionError> {
        self.dispatch(PreviewAction::EditDraft(text.into()))
    }

    pub fn cancel_edit(&mut self) -> Result<(), TransitionError> {
        self.dispatch(PreviewAction::CancelEdit)
    }

    pub fn save_edit(&mut self) -> Result<(), TransitionError> {
        self.dispatch(PreviewAction::SaveEdit)
    }

    pub fn close(&mut self) -> Result<(), TransitionError> {
        self.dispatch(PreviewAction::Close)
    }
}
