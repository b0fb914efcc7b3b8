//! Logger initialization (console + file)

use anyhow::Result;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;

use crate::core::config::StoreSettings;

/// Sends `Info` and above to the terminal and to `log_file_path`.
///
/// Fails when the file cannot be created or a logger is already installed.
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path)
        .map_err(|e| anyhow::anyhow!("Failed to create log file {}: {}", log_file_path, e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs where uploads and cards are going to be written
pub fn log_store_configuration(settings: &StoreSettings, allowed_users: &[i64]) {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("📁 Content store configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("Content dir:  {}", settings.content_dir.display());
    log::info!("Content file: {}", settings.content_file.display());
    log::info!("Backups:      {}", settings.backup_dir.display());
    log::info!("Cards field:  {}", settings.cards_field);

    if !settings.content_file.exists() {
        log::warn!(
            "⚠️  Content file {} does not exist yet; finalizing a card will fail until it does",
            settings.content_file.display()
        );
    }

    if allowed_users.is_empty() {
        log::warn!("⚠️  ALLOWED_USER_IDS is empty, every Telegram user can upload");
    } else {
        log::info!("✅ Allow-list active ({} users)", allowed_users.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::NamedTempFile;

    #[test]
    fn test_init_logger_creates_log_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        // A second init in the same test binary returns Err, which is fine here
        let _ = init_logger(path);
        assert!(temp_file.path().exists());
    }

    #[test]
    fn test_init_logger_fails_for_missing_directory() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing").join("bot.log");
        assert!(init_logger(path.to_str().unwrap()).is_err());
    }
}
