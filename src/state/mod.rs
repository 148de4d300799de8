//! State management module
//!
//! This module handles conversation sessions and their in-memory registry

pub mod context;
pub mod flows;
pub mod storage;

// Re-export commonly used state components
pub use context::Session;
pub use flows::{Advance, FieldRule, FieldSpec, FlowSpec, PromptKeyboard};
pub use storage::SessionStore;
