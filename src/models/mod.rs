//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod registration;
pub mod reply;

// Re-export commonly used models
pub use registration::{Category, FlowKind, RegistrationRecord};
pub use reply::{Keyboard, Reply};
