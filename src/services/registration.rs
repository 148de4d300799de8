//! Registration service
//!
//! Owns the session registry and the ledger, turning one inbound message
//! into one outbound reply. All session handling for a chat happens under
//! that chat's slot lock, so a completion is fully persisted before the
//! next message from the same chat is looked at.

use tracing::{debug, error, info};

use crate::models::{FlowKind, RegistrationRecord, Reply};
use crate::state::flows::{self, Advance};
use crate::state::SessionStore;
use crate::storage::RegistrationStore;
use crate::texts;

/// What to do with one inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Begin a flow, replacing any active session
    StartFlow(FlowKind),
    /// Feed the message into the active session
    Continue,
    /// No session and no menu choice: offer the menu
    ShowMenu,
}

/// Decide what a message means for this chat
///
/// Menu labels win over an active session, so picking an operation from
/// the buttons always starts that flow cleanly, even mid-flow.
fn route(text: &str, has_active_session: bool) -> Action {
    if let Some(kind) = FlowKind::from_menu_label(text.trim()) {
        return Action::StartFlow(kind);
    }
    if has_active_session {
        Action::Continue
    } else {
        Action::ShowMenu
    }
}

/// Service handling every conversational event for the bot
#[derive(Debug, Clone)]
pub struct RegistrationService {
    sessions: SessionStore,
    store: RegistrationStore,
}

impl RegistrationService {
    pub fn new(sessions: SessionStore, store: RegistrationStore) -> Self {
        Self { sessions, store }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Handle one ordinary text message from a chat
    pub async fn dispatch(&self, identity: i64, text: &str) -> Reply {
        let mut slot = self.sessions.claim(identity).await;

        match route(text, slot.is_some()) {
            Action::StartFlow(kind) => {
                if let Some(old) = slot.as_ref() {
                    info!(
                        identity,
                        old_flow = old.flow.as_str(),
                        new_flow = kind.as_str(),
                        "Replacing active session on reentry"
                    );
                }
                let (session, prompt) = flows::start(identity, kind);
                *slot = Some(session);
                info!(identity, flow = kind.as_str(), "Flow started");
                prompt
            }
            Action::Continue => {
                // Route only picks Continue when the slot is occupied
                let Some(session) = slot.as_mut() else {
                    return self.show_menu(identity);
                };
                match flows::advance(session, text) {
                    Ok(Advance::Next(reply)) => {
                        debug!(
                            identity,
                            flow = session.flow.as_str(),
                            step = session.step,
                            "Field accepted"
                        );
                        reply
                    }
                    Ok(Advance::Retry(reply)) => {
                        debug!(
                            identity,
                            flow = session.flow.as_str(),
                            step = session.step,
                            "Input rejected, re-prompting"
                        );
                        reply
                    }
                    Ok(Advance::Complete(record)) => {
                        let reply = self.persist(identity, record).await;
                        *slot = None;
                        reply
                    }
                    Err(e) => {
                        error!(identity, error = %e, "Session unusable, discarding");
                        *slot = None;
                        self.show_menu(identity)
                    }
                }
            }
            Action::ShowMenu => self.show_menu(identity),
        }
    }

    /// Handle the cancel command, valid in any state
    pub async fn cancel(&self, identity: i64) -> Reply {
        let mut slot = self.sessions.claim(identity).await;
        match slot.take() {
            Some(session) => info!(
                identity,
                flow = session.flow.as_str(),
                step = session.step,
                "Session cancelled"
            ),
            None => debug!(identity, "Cancel with no active session"),
        }
        Reply::without_keyboard(texts::CANCELLED)
    }

    /// Greeting and operation menu for the start command
    pub fn menu(&self) -> Reply {
        Reply::with_choices(texts::MENU_GREETING, texts::menu_keyboard())
    }

    async fn persist(&self, identity: i64, record: RegistrationRecord) -> Reply {
        match self.store.append(&record).await {
            Ok(()) => {
                info!(
                    identity,
                    kind = record.kind.as_str(),
                    category = record.category.label(),
                    "Registration persisted"
                );
                Reply::without_keyboard(texts::confirmation(&record))
            }
            Err(e) => {
                // Full field set goes to the log so the row can be replayed
                // by hand
                error!(
                    identity,
                    error = %e,
                    kind = record.kind.as_str(),
                    registrant = %record.registrant,
                    category = record.category.label(),
                    partner1 = %record.partner1,
                    partner2 = %record.partner2,
                    "Failed to persist registration, submission lost"
                );
                Reply::plain(texts::SAVE_FAILED)
            }
        }
    }

    fn show_menu(&self, identity: i64) -> Reply {
        debug!(identity, "No active session, offering the menu");
        Reply::with_choices(texts::MENU_CHOOSE, texts::menu_keyboard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_prefers_menu_labels() {
        assert_eq!(
            route("توزيع الكراسي", false),
            Action::StartFlow(FlowKind::Chair)
        );
        assert_eq!(
            route("توزيع الخزنات", true),
            Action::StartFlow(FlowKind::Locker)
        );
        assert_eq!(
            route("  توزيع الكراسي  ", true),
            Action::StartFlow(FlowKind::Chair)
        );
    }

    #[test]
    fn test_route_continues_active_session() {
        assert_eq!(route("Ali", true), Action::Continue);
        assert_eq!(route("الأولى", true), Action::Continue);
    }

    #[test]
    fn test_route_falls_back_to_menu() {
        assert_eq!(route("Ali", false), Action::ShowMenu);
        assert_eq!(route("", false), Action::ShowMenu);
    }
}
