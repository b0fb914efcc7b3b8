//! Before/after snapshots of the content file
//!
//! Snapshots are written once and never read back by the bot. They exist so
//! an operator can restore the site file by hand.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use crate::core::error::ContentStoreError;

/// Which side of a write a snapshot was taken on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
    Before,
    After,
}

impl SnapshotKind {
    fn suffix(self) -> &'static str {
        match self {
            SnapshotKind::Before => "before",
            SnapshotKind::After => "after",
        }
    }
}

/// Name of a snapshot: `<stem>_<YYYYMMDD_HHMMSS_micros>_<before|after>.txt`.
///
/// Both snapshots of one write share the timestamp.
pub fn snapshot_name(content_file: &Path, stamp: &DateTime<Local>, kind: SnapshotKind) -> String {
    let stem = content_file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("content");
    format!("{}_{}_{}.txt", stem, stamp.format("%Y%m%d_%H%M%S_%6f"), kind.suffix())
}

/// Writes `body` as a snapshot, creating the backup directory if needed.
pub async fn write_snapshot(
    backup_dir: &Path,
    content_file: &Path,
    stamp: &DateTime<Local>,
    kind: SnapshotKind,
    body: &str,
) -> Result<PathBuf, ContentStoreError> {
    if !backup_dir.exists() {
        tokio::fs::create_dir_all(backup_dir)
            .await
            .map_err(|e| ContentStoreError::io(backup_dir, e))?;
        log::info!("Created backup directory: {}", backup_dir.display());
    }

    let path = backup_dir.join(snapshot_name(content_file, stamp, kind));
    tokio::fs::write(&path, body)
        .await
        .map_err(|e| ContentStoreError::io(&path, e))?;
    log::debug!("Wrote {} snapshot: {}", kind.suffix(), path.display());
    Ok(path)
}
