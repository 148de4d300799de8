//! Storage module
//!
//! Durable persistence for completed registrations

pub mod store;

pub use store::{RegistrationStore, COLUMNS};
