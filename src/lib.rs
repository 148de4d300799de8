//! tawzee Telegram bot
//!
//! A Telegram bot that registers school chair and locker sign-ups over a
//! short question-and-answer conversation. This library provides the
//! registration flows, the per-chat session registry, and the CSV ledger
//! completed registrations are appended to.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod texts;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, StoreError, TawzeeError};

// Re-export main components for easy access
pub use models::{Category, FlowKind, Keyboard, RegistrationRecord, Reply};
pub use services::RegistrationService;
pub use state::SessionStore;
pub use storage::RegistrationStore;
