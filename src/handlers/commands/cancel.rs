//! Cancel command handler
//!
//! Discards whatever the chat was in the middle of.

use std::sync::Arc;

use teloxide::{types::Message, Bot};
use tracing::debug;

use crate::handlers::send_reply;
use crate::services::RegistrationService;
use crate::utils::errors::Result;

/// Handle /cancel: drop any active session and confirm
pub async fn handle_cancel(bot: Bot, msg: Message, service: Arc<RegistrationService>) -> Result<()> {
    let chat_id = msg.chat.id;
    debug!(identity = chat_id.0, "Processing /cancel command");

    let reply = service.cancel(chat_id.0).await;
    send_reply(&bot, chat_id, reply).await
}
