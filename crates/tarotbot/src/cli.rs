use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tarotbot")]
#[command(author, version, about = "Telegram bot that files uploads as tarot cards in a Kirby CMS site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Parse the configured content file and print how many cards it holds
    CheckStore,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
