//! Start command handler
//!
//! Greets the chat and shows the two-operation menu.

use std::sync::Arc;

use teloxide::{types::Message, Bot};
use tracing::debug;

use crate::handlers::send_reply;
use crate::services::RegistrationService;
use crate::utils::errors::Result;

/// Handle /start, whatever state the chat is in
///
/// An in-progress flow survives the command; picking an operation from
/// the menu is what replaces it.
pub async fn handle_start(bot: Bot, msg: Message, service: Arc<RegistrationService>) -> Result<()> {
    let chat_id = msg.chat.id;
    debug!(identity = chat_id.0, "Processing /start command");

    send_reply(&bot, chat_id, service.menu()).await
}
