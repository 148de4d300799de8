//! tawzee Telegram bot
//!
//! Main application entry point

use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::{prelude::*, types::Update};
use tracing::{error, info, warn};

use tawzee::config::Settings;
use tawzee::handlers::{self, Command};
use tawzee::services::RegistrationService;
use tawzee::state::SessionStore;
use tawzee::storage::RegistrationStore;
use tawzee::utils::logging;

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file writer alive
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting tawzee registration bot...");

    // Prepare the registration ledger
    info!(path = %settings.storage.registrations_path, "Opening registration ledger...");
    let store = RegistrationStore::new(&settings.storage.registrations_path);
    store.ensure_schema().await?;

    let sessions = SessionStore::new();
    let service = Arc::new(RegistrationService::new(sessions.clone(), store));

    // Periodically drop sessions nobody came back to
    let sweeper = sessions.clone();
    let max_idle = chrono::Duration::minutes(settings.session.idle_timeout_minutes as i64);
    let sweep_interval = std::time::Duration::from_secs(settings.session.sweep_interval_seconds);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweep_interval);
        loop {
            interval.tick().await;
            sweeper.sweep_idle(max_idle).await;
        }
    });

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    info!("Setting up bot handlers...");
    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![service])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("tawzee bot is ready, starting polling...");
    dispatcher.dispatch().await;

    info!("tawzee bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    dptree::entry().branch(
        Update::filter_message()
            .branch(
                // Handle commands
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(handle_commands),
            )
            .branch(
                // Handle regular messages
                dptree::endpoint(handle_messages),
            ),
    )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    service: Arc<RegistrationService>,
) -> HandlerResult {
    if let Err(e) = handlers::handle_command(bot, msg, cmd, service).await {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(
    bot: Bot,
    msg: Message,
    service: Arc<RegistrationService>,
) -> HandlerResult {
    if let Err(e) = handlers::handle_message(bot, msg, service).await {
        error!(error = %e, "Error handling message");
        return Err(e.into());
    }

    Ok(())
}
