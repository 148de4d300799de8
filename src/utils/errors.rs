//! Error handling for tawzee
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tawzee application
#[derive(Error, Debug)]
pub enum TawzeeError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Registration ledger error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Registration ledger specific errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Ledger read failed at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Ledger content at {} is malformed: {detail}", .path.display())]
    Malformed { path: PathBuf, detail: String },

    #[error("Row encoding failed: {0}")]
    Encode(String),

    #[error("Ledger write failed at {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for tawzee operations
pub type Result<T> = std::result::Result<T, TawzeeError>;

/// Result type alias for ledger operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
