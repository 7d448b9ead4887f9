// Document preview: line classifier, view/edit state machine, rendering,
// and per-document sessions for the HTTP layer.

pub mod classifier;
pub mod controller;
pub mod handlers;
pub mod render;
pub mod sessions;
