//! Services module
//!
//! This module contains business logic services

pub mod registration;

// Re-export commonly used services
pub use registration::RegistrationService;
