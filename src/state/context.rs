//! Conversation session state
//!
//! This module defines the per-chat session, tracking which flow is in
//! progress and the answers collected so far.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::models::FlowKind;

/// A chat's in-progress registration
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Chat this session belongs to
    pub identity: i64,
    /// Flow selected from the menu; fixed for the session's lifetime
    pub flow: FlowKind,
    /// Index of the field currently being asked for
    pub step: usize,
    /// Answers collected so far, keyed by field name
    pub fields: HashMap<String, String>,
    /// When the flow was started
    pub started_at: DateTime<Utc>,
    /// Last time this session consumed a message
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create a fresh session at the first field of a flow
    pub fn new(identity: i64, flow: FlowKind) -> Self {
        let now = Utc::now();
        Self {
            identity,
            flow,
            step: 0,
            fields: HashMap::new(),
            started_at: now,
            updated_at: now,
        }
    }

    /// Record the answer for a field
    pub fn insert_field(&mut self, name: &str, value: String) {
        self.fields.insert(name.to_string(), value);
        self.updated_at = Utc::now();
    }

    /// Look up a collected answer
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Move on to the next field
    pub fn advance_step(&mut self) {
        self.step += 1;
        self.updated_at = Utc::now();
    }

    /// Whether the session has been untouched for longer than `max_idle`
    pub fn is_idle_for(&self, max_idle: Duration) -> bool {
        Utc::now() - self.updated_at > max_idle
    }
}
