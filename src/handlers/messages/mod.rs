//! Message handlers module
//!
//! Handles ordinary text messages: menu choices and in-flow answers

use std::sync::Arc;

use teloxide::{types::Message, Bot};
use tracing::debug;

use crate::handlers::send_reply;
use crate::services::RegistrationService;
use crate::utils::errors::Result;

/// Handle an incoming text message
///
/// Non-text content is ignored; the flows only consume text. Slash
/// commands other than the registered ones are left unanswered.
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    service: Arc<RegistrationService>,
) -> Result<()> {
    let chat_id = msg.chat.id;

    let Some(text) = msg.text() else {
        debug!(identity = chat_id.0, "Ignoring non-text message");
        return Ok(());
    };
    if text.starts_with('/') {
        debug!(identity = chat_id.0, "Ignoring unrecognized command");
        return Ok(());
    }

    let reply = service.dispatch(chat_id.0, text).await;
    send_reply(&bot, chat_id, reply).await
}
