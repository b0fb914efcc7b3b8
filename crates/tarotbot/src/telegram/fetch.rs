//! Downloads uploaded files through the Bot API

use std::path::Path;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::FileId;
use tokio::io::AsyncWriteExt;
use url::Url;

use tarotcore::config;
use tarotcore::{MediaError, MediaFetcher};

const OFFICIAL_API_HOST: &str = "api.telegram.org";
/// Where a local Bot API server keeps files inside its container
const LOCAL_API_PREFIX: &str = "/var/lib/telegram-bot-api/";

/// [`MediaFetcher`] backed by `getFile` and the Bot API file endpoint.
pub struct TelegramFetcher {
    bot: Bot,
    client: reqwest::Client,
}

impl TelegramFetcher {
    pub fn new(bot: Bot) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config::network::timeout())
            .build()?;
        Ok(Self { bot, client })
    }
}

#[async_trait]
impl MediaFetcher for TelegramFetcher {
    async fn fetch(&self, file_id: &str, dest: &Path) -> Result<u64, MediaError> {
        let file = self
            .bot
            .get_file(FileId(file_id.to_string()))
            .await
            .map_err(|e| MediaError::Download(format!("getFile failed: {e}")))?;
        log::info!("File info retrieved: path = {}, size = {} bytes", file.path, file.size);

        let file_url = build_file_url(&self.bot.api_url(), self.bot.token(), &file.path)?;
        let mut resp = self
            .client
            .get(file_url)
            .send()
            .await
            .map_err(|e| MediaError::Download(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(MediaError::Download(format!(
                "Telegram file download failed (path={}, status={})",
                file.path, status
            )));
        }

        let io_err = |source| MediaError::Io {
            path: dest.to_path_buf(),
            source,
        };
        let mut dst = tokio::fs::File::create(dest).await.map_err(io_err)?;
        let mut written = 0u64;
        while let Some(chunk) = resp.chunk().await.map_err(|e| MediaError::Download(e.to_string()))? {
            dst.write_all(&chunk).await.map_err(io_err)?;
            written += chunk.len() as u64;
        }
        dst.flush().await.map_err(io_err)?;

        Ok(written)
    }
}

/// `<base>/file/bot<token>/<path>`; local servers report absolute container
/// paths that have to be made relative first.
fn build_file_url(base: &Url, token: &str, file_path: &str) -> Result<Url, MediaError> {
    let mut url = base.clone();

    let normalized_path = if base.host_str() == Some(OFFICIAL_API_HOST) {
        file_path
    } else {
        file_path.strip_prefix(LOCAL_API_PREFIX).unwrap_or(file_path)
    };

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| MediaError::Download("Bot API URL cannot be a base URL".to_string()))?;
        segments.pop_if_empty();
        segments.push("file");
        segments.push(&format!("bot{token}"));
        for seg in normalized_path.split('/') {
            if !seg.is_empty() {
                segments.push(seg);
            }
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_official_file_url() {
        let base = Url::parse("https://api.telegram.org").unwrap();
        let url = build_file_url(&base, "123:abc", "photos/file_1.jpg").unwrap();
        assert_eq!(url.as_str(), "https://api.telegram.org/file/bot123:abc/photos/file_1.jpg");
    }

    #[test]
    fn test_local_server_strips_container_prefix() {
        let base = Url::parse("http://localhost:8081/").unwrap();
        let url = build_file_url(
            &base,
            "123:abc",
            "/var/lib/telegram-bot-api/123:abc/videos/file_2.mp4",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8081/file/bot123:abc/123:abc/videos/file_2.mp4"
        );
    }
}
