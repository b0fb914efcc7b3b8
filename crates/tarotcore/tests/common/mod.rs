//! Common test utilities
//!
//! Shared by the conversation integration tests: a scratch content
//! directory, a fake media fetcher and helpers to drive a chat.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tarotcore::conversation::{Conversation, Incoming, Reply};
use tarotcore::{ContentStore, FileType, GlobalLock, MediaError, MediaFetcher, StoreSettings};
use tempfile::TempDir;

pub const EMPTY_SITE: &str = "Title: Tarot House\n\n----\n\nCardscontent: []\n\n----\n\nFooter: (c) the house\n";

/// Serves fixed bytes for every file id, or fails every download.
pub struct FakeFetcher {
    pub payload: Option<Vec<u8>>,
    pub calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn serving(payload: &[u8]) -> Self {
        Self {
            payload: Some(payload.to_vec()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            payload: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl MediaFetcher for FakeFetcher {
    async fn fetch(&self, file_id: &str, dest: &Path) -> Result<u64, MediaError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.payload {
            Some(bytes) => {
                tokio::fs::write(dest, bytes).await.map_err(|source| MediaError::Io {
                    path: dest.to_path_buf(),
                    source,
                })?;
                Ok(bytes.len() as u64)
            }
            None => Err(MediaError::Download(format!("file {file_id} is gone"))),
        }
    }
}

/// A conversation wired to a temporary content directory.
pub struct TestEnvironment {
    pub dir: TempDir,
    pub conversation: Conversation,
    pub fetcher: Arc<FakeFetcher>,
    pub lock: GlobalLock,
}

impl TestEnvironment {
    pub fn new(site: Option<&str>, fetcher: FakeFetcher) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = StoreSettings::new(dir.path());
        if let Some(site) = site {
            std::fs::write(&settings.content_file, site).expect("write site.txt");
        }
        let fetcher = Arc::new(fetcher);
        let lock = GlobalLock::new();
        let conversation = Conversation::new(ContentStore::new(settings), lock.clone(), fetcher.clone());
        Self {
            dir,
            conversation,
            fetcher,
            lock,
        }
    }

    pub fn with_empty_site() -> Self {
        Self::new(Some(EMPTY_SITE), FakeFetcher::serving(b"\xFF\xD8jpeg"))
    }

    pub fn site_path(&self) -> PathBuf {
        self.dir.path().join("site.txt")
    }

    pub fn site(&self) -> String {
        std::fs::read_to_string(self.site_path()).expect("read site.txt")
    }

    pub fn cards(&self) -> Vec<serde_json::Value> {
        let site = self.site();
        let line = site
            .lines()
            .find(|l| l.starts_with("Cardscontent:"))
            .expect("Cardscontent field");
        serde_json::from_str(line.trim_start_matches("Cardscontent:").trim()).expect("cards JSON")
    }

    /// Files in the content directory, backups excluded, sorted by name.
    pub fn content_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path())
            .expect("read content dir")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .filter(|name| name != "backups" && name != "site.txt")
            .collect();
        names.sort();
        names
    }

    pub fn backups(&self) -> Vec<PathBuf> {
        match std::fs::read_dir(self.dir.path().join("backups")) {
            Ok(entries) => {
                let mut paths: Vec<PathBuf> = entries.map(|e| e.expect("dir entry").path()).collect();
                paths.sort();
                paths
            }
            Err(_) => Vec::new(),
        }
    }

    pub async fn text(&self, chat_id: i64, text: &str) -> Vec<Reply> {
        self.conversation.handle(chat_id, Incoming::Text(text.to_string())).await
    }

    pub async fn media(&self, chat_id: i64, file_type: FileType, caption: Option<&str>) -> Vec<Reply> {
        self.conversation
            .handle(
                chat_id,
                Incoming::Media {
                    file_type,
                    file_id: format!("{file_type}-file-id"),
                    caption: caption.map(str::to_string),
                },
            )
            .await
    }
}
