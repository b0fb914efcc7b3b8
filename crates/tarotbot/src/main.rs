use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use tarotbot::cli::{Cli, Commands};
use tarotbot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps, TelegramFetcher};
use tarotcore::core::{init_logger, log_store_configuration};
use tarotcore::{config, ContentStore, Conversation, GlobalLock, StoreSettings};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to the requested subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, content directory, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Log panics instead of losing them to stderr when the dispatcher catches them
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    // .env has to be loaded before the first config static is touched
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::CheckStore) => run_check_store().await,
        Some(Commands::Run) => run_bot().await,
        None => {
            log::info!("No command specified, running bot in default mode");
            run_bot().await
        }
    }
}

/// Parses the configured content file and reports how many cards it holds
async fn run_check_store() -> Result<()> {
    let settings = StoreSettings::from_env();
    log_store_configuration(&settings, &config::ALLOWED_USER_IDS);

    let store = ContentStore::new(settings);
    let count = store.check().await?;
    println!(
        "{}: field `{}` holds {} cards",
        store.settings().content_file.display(),
        store.settings().cards_field,
        count
    );
    Ok(())
}

async fn run_bot() -> Result<()> {
    log::info!("Starting tarot uploader bot...");

    let settings = StoreSettings::from_env();
    settings.ensure_content_dir()?;
    log_store_configuration(&settings, &config::ALLOWED_USER_IDS);

    let store = ContentStore::new(settings);
    match store.check().await {
        Ok(count) => log::info!("Content store holds {} cards", count),
        Err(e) => log::warn!("Content store is not ready, uploads will fail to finalize: {}", e),
    }

    let bot = create_bot()?;
    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    let fetcher = Arc::new(TelegramFetcher::new(bot.clone())?);
    let conversation = Conversation::new(store, GlobalLock::new(), fetcher);
    let deps = HandlerDeps::new(conversation, config::ALLOWED_USER_IDS.to_vec());
    let handler = schema(deps);

    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    Dispatcher::builder(bot, handler)
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
