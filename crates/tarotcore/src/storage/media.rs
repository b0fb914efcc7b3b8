//! Media files and their sidecars in the content directory

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::core::error::MediaError;
use crate::session::Upload;

/// Source of uploaded binaries.
///
/// The bot implements this on top of the Bot API; tests use an in-memory
/// fake.
#[async_trait]
pub trait MediaFetcher: Send + Sync {
    /// Streams the file behind `file_id` into `dest`, returning the number
    /// of bytes written.
    async fn fetch(&self, file_id: &str, dest: &Path) -> Result<u64, MediaError>;
}

/// Files written for one media upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedMedia {
    pub path: PathBuf,
    pub sidecar: PathBuf,
    pub bytes: u64,
}

/// `<uuid>.<ext>` for media; text uploads have no file.
pub fn media_file_name(upload: &Upload) -> Option<String> {
    upload
        .file_type
        .extension()
        .map(|ext| format!("{}.{}", upload.uuid, ext))
}

/// Downloads the upload into `content_dir` and writes the sidecar next to it.
///
/// A partially written media file is removed again when the download or the
/// sidecar write fails.
pub async fn persist_media(
    fetcher: &dyn MediaFetcher,
    content_dir: &Path,
    upload: &Upload,
) -> Result<SavedMedia, MediaError> {
    let (Some(file_name), Some(file_id)) = (media_file_name(upload), upload.file_id.as_deref()) else {
        return Err(MediaError::Download(format!(
            "{} upload {} has no file to fetch",
            upload.file_type, upload.uuid
        )));
    };

    let path = content_dir.join(&file_name);
    let sidecar = content_dir.join(format!("{file_name}.txt"));

    let bytes = match fetcher.fetch(file_id, &path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            remove_partial(&path).await;
            return Err(e);
        }
    };

    if let Err(source) = tokio::fs::write(&sidecar, format!("Uuid: {}", upload.uuid)).await {
        remove_partial(&path).await;
        return Err(MediaError::Io { path: sidecar, source });
    }

    log::info!("Saved {} ({} bytes) with sidecar {}", path.display(), bytes, sidecar.display());
    Ok(SavedMedia { path, sidecar, bytes })
}

async fn remove_partial(path: &Path) {
    if tokio::fs::try_exists(path).await.unwrap_or(false) {
        if let Err(e) = tokio::fs::remove_file(path).await {
            log::warn!("Failed to remove partial file {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FileType;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    struct BytesFetcher(&'static [u8]);

    #[async_trait]
    impl MediaFetcher for BytesFetcher {
        async fn fetch(&self, _file_id: &str, dest: &Path) -> Result<u64, MediaError> {
            tokio::fs::write(dest, self.0).await.map_err(|source| MediaError::Io {
                path: dest.to_path_buf(),
                source,
            })?;
            Ok(self.0.len() as u64)
        }
    }

    /// Writes a few bytes, then fails like a dropped connection.
    struct BrokenFetcher;

    #[async_trait]
    impl MediaFetcher for BrokenFetcher {
        async fn fetch(&self, _file_id: &str, dest: &Path) -> Result<u64, MediaError> {
            let _ = tokio::fs::write(dest, b"partial").await;
            Err(MediaError::Download("connection reset".to_string()))
        }
    }

    fn upload(file_type: FileType) -> Upload {
        Upload {
            file_type,
            uuid: Uuid::new_v4(),
            file_id: Some("file-1".to_string()),
            description: String::new(),
        }
    }

    #[test]
    fn test_media_file_name() {
        let up = upload(FileType::Video);
        assert_eq!(media_file_name(&up), Some(format!("{}.mp4", up.uuid)));
        assert_eq!(media_file_name(&upload(FileType::Text)), None);
    }

    #[tokio::test]
    async fn test_persist_writes_file_and_sidecar() {
        let temp = tempfile::tempdir().unwrap();
        let up = upload(FileType::Photo);

        let saved = persist_media(&BytesFetcher(b"jpeg"), temp.path(), &up).await.unwrap();

        assert_eq!(saved.path, temp.path().join(format!("{}.jpg", up.uuid)));
        assert_eq!(saved.sidecar, temp.path().join(format!("{}.jpg.txt", up.uuid)));
        assert_eq!(saved.bytes, 4);
        assert_eq!(std::fs::read(&saved.path).unwrap(), b"jpeg");
        assert_eq!(std::fs::read_to_string(&saved.sidecar).unwrap(), format!("Uuid: {}", up.uuid));
    }

    #[tokio::test]
    async fn test_failed_download_leaves_nothing_behind() {
        let temp = tempfile::tempdir().unwrap();
        let up = upload(FileType::Audio);

        let err = persist_media(&BrokenFetcher, temp.path(), &up).await.unwrap_err();

        assert_eq!(err.to_string(), "Download failed: connection reset");
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_text_upload_is_refused() {
        let temp = tempfile::tempdir().unwrap();
        let mut up = upload(FileType::Text);
        up.file_id = None;
        assert!(persist_media(&BytesFetcher(b""), temp.path(), &up).await.is_err());
    }
}
