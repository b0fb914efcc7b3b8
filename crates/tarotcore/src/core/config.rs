use once_cell::sync::Lazy;
use std::env;
use std::path::{Path, PathBuf};

use crate::core::error::AppResult;

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Kirby content directory root
/// Read from KIRBY_COLLECTION_DIR environment variable
/// Relative paths are resolved against the working directory
/// Default: content
pub static KIRBY_COLLECTION_DIR: Lazy<PathBuf> = Lazy::new(|| {
    let raw = env::var("KIRBY_COLLECTION_DIR").unwrap_or_else(|_| "content".to_string());
    resolve_dir(Path::new(raw.trim()))
});

/// Name of the shared content file inside the content directory
/// Read from CONTENT_FILE_NAME environment variable
/// Default: site.txt
pub static CONTENT_FILE_NAME: Lazy<String> =
    Lazy::new(|| env::var("CONTENT_FILE_NAME").unwrap_or_else(|_| "site.txt".to_string()));

/// Field of the content file holding the card array
/// Read from CARDS_FIELD environment variable
/// Default: Cardscontent
pub static CARDS_FIELD: Lazy<String> =
    Lazy::new(|| env::var("CARDS_FIELD").unwrap_or_else(|_| "Cardscontent".to_string()));

/// Backup subdirectory inside the content directory
/// Read from BACKUP_DIR_NAME environment variable
/// Default: backups
pub static BACKUP_DIR_NAME: Lazy<String> =
    Lazy::new(|| env::var("BACKUP_DIR_NAME").unwrap_or_else(|_| "backups".to_string()));

/// Users allowed to talk to the bot (comma-separated)
/// Read from ALLOWED_USER_IDS environment variable
/// Empty means everybody is allowed
pub static ALLOWED_USER_IDS: Lazy<Vec<i64>> = Lazy::new(|| {
    env::var("ALLOWED_USER_IDS")
        .ok()
        .map(|raw| parse_user_ids(&raw))
        .unwrap_or_default()
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: tarotbot.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "tarotbot.log".to_string()));

/// Custom Bot API server
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| {
    env::var("BOT_API_URL").ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
});

/// Fixed answer sets offered as keyboards
pub mod options {
    /// Orientation choices
    pub const ORIENTATIONS: [&str; 2] = ["landscape", "portrait"];

    /// House choices
    pub const HOUSES: [&str; 4] = ["house1", "house2", "house3", "house4"];
}

/// Network configuration
pub mod network {
    use std::time::Duration;

    /// Request timeout for Bot API calls (in seconds)
    /// Large enough for video downloads through the Bot API
    pub const REQUEST_TIMEOUT_SECS: u64 = 300;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

pub(crate) fn parse_user_ids(raw: &str) -> Vec<i64> {
    raw.split([',', ' ', '\n', '\t'])
        .filter_map(|part| part.trim().parse::<i64>().ok())
        .collect()
}

fn resolve_dir(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Filesystem locations used by the media writer and the content store.
///
/// Built once from the environment in production; tests construct it
/// directly around a temporary directory.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    /// Content directory root; media files and sidecars land here
    pub content_dir: PathBuf,
    /// Shared content file
    pub content_file: PathBuf,
    /// Directory for before/after snapshots
    pub backup_dir: PathBuf,
    /// Field holding the card array
    pub cards_field: String,
}

impl StoreSettings {
    /// Settings rooted at `content_dir` with the default file and field names.
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        let content_dir = content_dir.into();
        Self {
            content_file: content_dir.join("site.txt"),
            backup_dir: content_dir.join("backups"),
            cards_field: "Cardscontent".to_string(),
            content_dir,
        }
    }

    /// Settings assembled from the environment statics above.
    pub fn from_env() -> Self {
        let content_dir = KIRBY_COLLECTION_DIR.to_path_buf();
        Self {
            content_file: content_dir.join(CONTENT_FILE_NAME.as_str()),
            backup_dir: content_dir.join(BACKUP_DIR_NAME.as_str()),
            cards_field: CARDS_FIELD.to_string(),
            content_dir,
        }
    }

    /// Creates the content directory if it does not exist yet.
    pub fn ensure_content_dir(&self) -> AppResult<()> {
        if !self.content_dir.exists() {
            log::info!("Creating content directory: {}", self.content_dir.display());
            std::fs::create_dir_all(&self.content_dir)?;
        }
        Ok(())
    }
}
