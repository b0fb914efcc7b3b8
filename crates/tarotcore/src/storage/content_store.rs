//! Appends finished cards to the shared Kirby content file

use std::sync::Arc;

use chrono::{DateTime, Local};
use serde_json::Value;
use tokio::sync::Mutex;

use super::backup::{snapshot_name, write_snapshot, SnapshotKind};
use super::card::{CardDraft, CardRecord};
use super::document::KirbyDocument;
use crate::core::config::StoreSettings;
use crate::core::error::{AppResult, ContentStoreError};

/// Writer for the cards field of the shared content file.
///
/// `finalize` runs backup, read, modify and write under one mutex so two
/// chats finishing at the same moment cannot lose each other's card.
#[derive(Clone)]
pub struct ContentStore {
    settings: StoreSettings,
    write_lock: Arc<Mutex<()>>,
}

impl ContentStore {
    pub fn new(settings: StoreSettings) -> Self {
        Self {
            settings,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Reads and parses the cards array without modifying anything.
    pub async fn load_cards(&self) -> Result<Vec<Value>, ContentStoreError> {
        let text = self.read_file().await?;
        let document = KirbyDocument::parse(&text);
        self.parse_cards(&document)
    }

    /// Number of cards currently stored. Fails when finalize would fail to
    /// locate or parse the cards field.
    pub async fn check(&self) -> AppResult<usize> {
        let cards = self.load_cards().await?;
        Ok(cards.len())
    }

    /// Appends a card built from `draft` and returns it.
    ///
    /// Nothing is written when the file is missing, has no cards field, or
    /// the field does not hold a JSON array. Once the content file has been
    /// rewritten the card counts as stored; a failed after-snapshot is only
    /// logged.
    pub async fn finalize(&self, draft: &CardDraft) -> Result<CardRecord, ContentStoreError> {
        self.finalize_at(draft, Local::now()).await
    }

    async fn finalize_at(
        &self,
        draft: &CardDraft,
        stamp: DateTime<Local>,
    ) -> Result<CardRecord, ContentStoreError> {
        let _guard = self.write_lock.lock().await;
        let path = &self.settings.content_file;

        let original = self.read_file().await?;
        let mut document = KirbyDocument::parse(&original);
        let mut cards = self.parse_cards(&document)?;

        let record = CardRecord::build(draft, stamp.date_naive());
        cards.push(serde_json::to_value(&record)?);
        let encoded = serde_json::to_string(&cards)?;

        if !document.set_field(&self.settings.cards_field, &encoded) {
            return Err(self.missing_field());
        }
        let updated = document.to_string();

        write_snapshot(&self.settings.backup_dir, path, &stamp, SnapshotKind::Before, &original).await?;
        tokio::fs::write(path, &updated)
            .await
            .map_err(|e| ContentStoreError::io(path, e))?;
        let after = write_snapshot(&self.settings.backup_dir, path, &stamp, SnapshotKind::After, &updated).await;
        if let Err(e) = after {
            log::error!(
                "Card {} was stored but the after snapshot {} failed: {}",
                record.id,
                snapshot_name(path, &stamp, SnapshotKind::After),
                e
            );
        }

        log::info!(
            "Card {} ({}, {}) appended to {}, {} cards total",
            record.id,
            draft.tarot_card,
            draft.uuid,
            path.display(),
            cards.len()
        );
        Ok(record)
    }

    async fn read_file(&self) -> Result<String, ContentStoreError> {
        let path = &self.settings.content_file;
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ContentStoreError::io(path, e))
    }

    fn parse_cards(&self, document: &KirbyDocument) -> Result<Vec<Value>, ContentStoreError> {
        let raw = document
            .field(&self.settings.cards_field)
            .ok_or_else(|| self.missing_field())?;
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str::<Value>(raw)? {
            Value::Array(cards) => Ok(cards),
            other => Err(ContentStoreError::Malformed(format!(
                "field `{}` holds {} instead of an array",
                self.settings.cards_field,
                json_kind(&other)
            ))),
        }
    }

    fn missing_field(&self) -> ContentStoreError {
        ContentStoreError::Malformed(format!(
            "field `{}` not found in {}",
            self.settings.cards_field,
            self.settings.content_file.display()
        ))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FileType;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use uuid::Uuid;

    const SITE: &str = "Title: Tarot\n\n----\n\nCardscontent: []\n\n----\n\nFooter: kept as is  \n";

    fn draft() -> CardDraft {
        CardDraft {
            uuid: Uuid::new_v4(),
            file_type: FileType::Photo,
            description: String::new(),
            orientation: "landscape".to_string(),
            tarot_card: "fool".to_string(),
            house: "house2".to_string(),
        }
    }

    fn store_with(dir: &Path, body: Option<&str>) -> ContentStore {
        let settings = StoreSettings::new(dir);
        if let Some(body) = body {
            std::fs::write(&settings.content_file, body).unwrap();
        }
        ContentStore::new(settings)
    }

    fn backups(dir: &Path) -> Vec<std::path::PathBuf> {
        match std::fs::read_dir(dir.join("backups")) {
            Ok(entries) => {
                let mut paths: Vec<_> = entries.map(|e| e.unwrap().path()).collect();
                paths.sort();
                paths
            }
            Err(_) => Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_finalize_appends_one_card_and_writes_backups() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_with(temp.path(), Some(SITE));

        let record = store.finalize(&draft()).await.unwrap();

        let written = std::fs::read_to_string(&store.settings().content_file).unwrap();
        let cards = store.load_cards().await.unwrap();
        assert_eq!(cards, vec![serde_json::to_value(&record).unwrap()]);
        assert!(written.starts_with("Title: Tarot\n\n----\n\nCardscontent: [{"));
        assert!(written.ends_with("}]\n\n----\n\nFooter: kept as is  \n"));

        let snapshots = backups(temp.path());
        assert_eq!(snapshots.len(), 2);
        let after = snapshots.iter().find(|p| p.to_string_lossy().ends_with("_after.txt")).unwrap();
        let before = snapshots.iter().find(|p| p.to_string_lossy().ends_with("_before.txt")).unwrap();
        assert_eq!(std::fs::read_to_string(before).unwrap(), SITE);
        assert_eq!(std::fs::read_to_string(after).unwrap(), written);
    }

    #[tokio::test]
    async fn test_failed_after_snapshot_still_reports_the_stored_card() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_with(temp.path(), Some(SITE));
        let stamp = Local::now();
        let settings = store.settings();
        let blocked = settings
            .backup_dir
            .join(snapshot_name(&settings.content_file, &stamp, SnapshotKind::After));
        std::fs::create_dir_all(&blocked).unwrap();

        let record = store.finalize_at(&draft(), stamp).await.unwrap();

        let cards = store.load_cards().await.unwrap();
        assert_eq!(cards, vec![serde_json::to_value(&record).unwrap()]);
        let before = settings
            .backup_dir
            .join(snapshot_name(&settings.content_file, &stamp, SnapshotKind::Before));
        assert_eq!(std::fs::read_to_string(before).unwrap(), SITE);
        assert!(blocked.is_dir());
    }

    #[tokio::test]
    async fn test_failed_before_snapshot_leaves_the_store_untouched() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_with(temp.path(), Some(SITE));
        std::fs::write(&store.settings().backup_dir, "not a directory").unwrap();

        let err = store.finalize(&draft()).await.unwrap_err();

        assert!(matches!(err, ContentStoreError::Io { .. }), "{err}");
        assert_eq!(std::fs::read_to_string(&store.settings().content_file).unwrap(), SITE);
    }

    #[tokio::test]
    async fn test_check_counts_cards() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_with(temp.path(), Some(SITE));
        assert_eq!(store.check().await.unwrap(), 0);
        store.finalize(&draft()).await.unwrap();
        assert_eq!(store.check().await.unwrap(), 1);

        let broken = store_with(temp.path(), Some("Title: x\n"));
        let err = broken.check().await.unwrap_err();
        assert!(err.to_string().contains("Cardscontent"), "{err}");
    }

    #[tokio::test]
    async fn test_existing_cards_are_preserved_in_order() {
        let temp = tempfile::tempdir().unwrap();
        let existing = r#"[{"id":"zzz","content":{"b":1,"a":2},"type":"tarotCard"}]"#;
        let store = store_with(temp.path(), Some(&SITE.replace("[]", existing)));

        store.finalize(&draft()).await.unwrap();

        let written = std::fs::read_to_string(&store.settings().content_file).unwrap();
        assert!(written.contains(r#"Cardscontent: [{"id":"zzz","content":{"b":1,"a":2},"type":"tarotCard"},{"#));
        assert_eq!(store.load_cards().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_field_counts_as_empty_array() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_with(temp.path(), Some("Title: x\n\n----\n\nCardscontent:\n"));
        store.finalize(&draft()).await.unwrap();
        assert_eq!(store.load_cards().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_field_is_malformed_and_writes_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let body = "Title: x\n\n----\n\nOther: []\n";
        let store = store_with(temp.path(), Some(body));

        let err = store.finalize(&draft()).await.unwrap_err();
        assert!(matches!(err, ContentStoreError::Malformed(_)), "{err}");
        assert_eq!(std::fs::read_to_string(&store.settings().content_file).unwrap(), body);
        assert!(backups(temp.path()).is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_is_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_with(temp.path(), Some("Cardscontent: [{broken\n"));
        let err = store.finalize(&draft()).await.unwrap_err();
        assert!(matches!(err, ContentStoreError::Json(_)));
        assert!(err.to_string().starts_with("Malformed content store"));
    }

    #[tokio::test]
    async fn test_non_array_json_is_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_with(temp.path(), Some("Cardscontent: {\"a\":1}\n"));
        let err = store.finalize(&draft()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed content store: field `Cardscontent` holds an object instead of an array"
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_with(temp.path(), None);
        let err = store.finalize(&draft()).await.unwrap_err();
        assert!(matches!(err, ContentStoreError::Io { .. }));
    }

    #[tokio::test]
    async fn test_concurrent_finalize_keeps_every_card() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_with(temp.path(), Some(SITE));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move { store.finalize(&draft()).await.map(|r| r.id) }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.load_cards().await.unwrap().len(), 8);
    }
}
