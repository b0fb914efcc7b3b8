//! Bot initialization and command definitions

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use teloxide::utils::command::BotCommands;

use tarotcore::config;
use tarotcore::conversation::Reply;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "welcome message")]
    Start,
    #[command(description = "show this list")]
    Help,
    #[command(description = "show the main menu")]
    Menu,
    #[command(description = "abort the current upload")]
    Reset,
    #[command(description = "save media only, skip the card questions")]
    Lock,
    #[command(description = "back to the full card flow")]
    Unlock,
    #[command(description = "current step and lock state")]
    Status,
    #[command(description = "tarot card meanings, optionally for one card")]
    Tarot(String),
}

/// Command list, answered to `/help` and the Help menu button
pub fn help_reply() -> Reply {
    Reply::plain(format!(
        "This bot saves your uploads as tarot cards on the Kirby CMS site.\n\n{}",
        Command::descriptions()
    ))
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Invalid BOT_API_URL or HTTP client setup failure
pub fn create_bot() -> anyhow::Result<Bot> {
    if config::BOT_TOKEN.is_empty() {
        return Err(anyhow::anyhow!("BOT_TOKEN (or TELOXIDE_TOKEN) environment variable not set"));
    }

    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    let bot = Bot::with_client(config::BOT_TOKEN.as_str(), client);

    let bot = if let Some(bot_api_url) = config::BOT_API_URL.as_deref() {
        log::info!("Using custom Bot API URL: {}", bot_api_url);
        let url = url::Url::parse(bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
        bot.set_api_url(url)
    } else {
        bot
    };

    Ok(bot)
}

/// Registers the command list shown in the Telegram UI.
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = Command::bot_commands();
    bot.set_my_commands(commands).await?;
    Ok(())
}
