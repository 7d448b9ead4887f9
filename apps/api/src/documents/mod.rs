//! Document ownership: the in-memory store that holds every generated or
//! uploaded document. Previews only hold copies and report saved text back.

pub mod handlers;
pub mod store;

pub use store::DocumentStore;
