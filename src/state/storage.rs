//! In-memory session registry
//!
//! Keeps one lockable slot per chat so messages from the same chat are
//! handled strictly one at a time, while different chats proceed in
//! parallel. Completed and cancelled sessions leave an empty slot behind;
//! a periodic sweep drops slots nobody came back to.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info};

use super::context::Session;

type Slot = Arc<Mutex<Option<Session>>>;

/// Registry of per-chat session slots
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    slots: Arc<Mutex<HashMap<i64, Slot>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the slot for a chat, creating it on first contact
    ///
    /// The returned guard serializes everything that happens to this chat's
    /// session. The registry-wide lock is released before the slot lock is
    /// taken, so a slow chat never blocks the others.
    pub async fn claim(&self, identity: i64) -> OwnedMutexGuard<Option<Session>> {
        let slot = {
            let mut slots = self.slots.lock().await;
            slots.entry(identity).or_default().clone()
        };
        slot.lock_owned().await
    }

    /// Number of chats with a session in progress
    pub async fn active_count(&self) -> usize {
        let slots = self.slots.lock().await;
        slots
            .values()
            .filter(|slot| matches!(slot.try_lock().as_deref(), Ok(Some(_))))
            .count()
    }

    /// Drop sessions idle for longer than `max_idle` and forget their slots
    ///
    /// Slots currently claimed by a handler are left alone, as is any slot
    /// another task holds a reference to but has not locked yet.
    pub async fn sweep_idle(&self, max_idle: Duration) -> usize {
        let mut slots = self.slots.lock().await;
        let before = slots.len();

        slots.retain(|identity, slot| {
            if Arc::strong_count(slot) > 1 {
                return true;
            }
            let Ok(guard) = slot.try_lock() else {
                return true;
            };
            match guard.as_ref() {
                Some(session) if session.is_idle_for(max_idle) => {
                    info!(
                        identity = *identity,
                        flow = session.flow.as_str(),
                        step = session.step,
                        "Dropping idle session"
                    );
                    false
                }
                Some(_) => true,
                None => false,
            }
        });

        let swept = before - slots.len();
        if swept > 0 {
            debug!(swept = swept, remaining = slots.len(), "Session sweep finished");
        }
        swept
    }
}
