//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for /start and /cancel
//! - Message handlers for ordinary text traffic
//!
//! Handlers stay thin: they translate Telegram types for the registration
//! service and render its replies back onto the wire.

pub mod commands;
pub mod messages;

use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup, KeyboardRemove, ReplyMarkup};

use crate::models::{Keyboard, Reply};
use crate::utils::errors::Result;

// Re-export commonly used handler functions
pub use commands::{handle_command, Command};
pub use messages::handle_message;

/// Build the one-time reply keyboard for a set of suggested answers
fn choice_keyboard(rows: Vec<Vec<String>>) -> KeyboardMarkup {
    let buttons = rows
        .into_iter()
        .map(|row| row.into_iter().map(KeyboardButton::new).collect::<Vec<_>>());
    KeyboardMarkup::new(buttons)
        .resize_keyboard()
        .one_time_keyboard()
}

/// Send a service reply to a chat, rendering its keyboard directive
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> Result<()> {
    let request = bot.send_message(chat_id, reply.text);
    match reply.keyboard {
        Keyboard::Keep => {
            request.await?;
        }
        Keyboard::Remove => {
            request
                .reply_markup(ReplyMarkup::KeyboardRemove(KeyboardRemove::new()))
                .await?;
        }
        Keyboard::Show(rows) => {
            request
                .reply_markup(ReplyMarkup::Keyboard(choice_keyboard(rows)))
                .await?;
        }
    }
    Ok(())
}
