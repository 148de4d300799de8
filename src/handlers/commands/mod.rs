//! Command handlers module
//!
//! This module contains handlers for the bot commands

pub mod cancel;
pub mod start;

use std::sync::Arc;

use teloxide::{types::Message, utils::command::BotCommands, Bot};

use crate::services::RegistrationService;
use crate::utils::errors::Result;

/// All available bot commands
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "أوامر البوت:")]
pub enum Command {
    #[command(description = "عرض قائمة العمليات")]
    Start,
    #[command(description = "إلغاء العملية الحالية")]
    Cancel,
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    service: Arc<RegistrationService>,
) -> Result<()> {
    match cmd {
        Command::Start => start::handle_start(bot, msg, service).await,
        Command::Cancel => cancel::handle_cancel(bot, msg, service).await,
    }
}
