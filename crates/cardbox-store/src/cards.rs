//! Card CRUD, listing, and search over the key-value medium.
//!
//! Reads are best-effort (log + empty result); writes propagate errors.

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::database::CardStore;
use crate::error::{Result, StoreError};
use crate::models::{CardDraft, CardPatch, CardRecord};

/// Fixed namespace prefix for every card key in the shared medium.
const KEY_PREFIX: &str = "storecard_";

fn card_key(id: &str) -> String {
    format!("{KEY_PREFIX}{id}")
}

impl CardStore {
    /// Every stored card, most recently touched first.
    ///
    /// Best-effort: on storage failure this logs and returns an empty list
    /// rather than propagating, so a listing can never crash a caller.
    pub async fn list_all(&self) -> Vec<CardRecord> {
        match self.load_all() {
            Ok(cards) => cards,
            Err(e) => {
                tracing::error!(error = %e, "failed to list cards");
                Vec::new()
            }
        }
    }

    /// Fetch a single card by id; `None` if absent or on storage error.
    pub async fn get(&self, id: &str) -> Option<CardRecord> {
        match self.load(id) {
            Ok(card) => card,
            Err(e) => {
                tracing::error!(id, error = %e, "failed to load card");
                None
            }
        }
    }

    /// Build a full record from partial input, persist it under its
    /// namespaced key, and return it.  Storage errors propagate: the caller
    /// must know a write failed.
    pub async fn save(&self, draft: CardDraft) -> Result<CardRecord> {
        let card = CardRecord::from_draft(draft);
        self.put(&card)?;
        tracing::debug!(id = %card.id, "card saved");
        Ok(card)
    }

    /// Merge `patch` onto the existing record, refresh `updated_at`,
    /// persist, and return the merged record.
    ///
    /// Fails with [`StoreError::NotFound`] when no record exists for `id`;
    /// a missing record is never created here.
    pub async fn update(&self, id: &str, patch: CardPatch) -> Result<CardRecord> {
        let mut card = self.load(id)?.ok_or(StoreError::NotFound)?;
        card.apply(patch);
        card.updated_at = Utc::now();
        self.put(&card)?;
        tracing::debug!(id, "card updated");
        Ok(card)
    }

    /// Remove the record.  Deleting an absent id is a no-op.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.conn()
            .execute("DELETE FROM kv WHERE key = ?1", params![card_key(id)])?;
        tracing::debug!(id, "card deleted");
        Ok(())
    }

    /// Remove every card in this store's namespace.  Idempotent.
    pub async fn clear_all(&self) -> Result<()> {
        let removed = self.conn().execute(
            "DELETE FROM kv WHERE key LIKE ?1",
            params![format!("{KEY_PREFIX}%")],
        )?;
        tracing::debug!(removed, "cleared all cards");
        Ok(())
    }

    /// Case-insensitive substring match of `query` against the store name,
    /// over the result of [`CardStore::list_all`].  A blank query returns
    /// the full list unmodified.  Never fails; degrades to an empty list.
    pub async fn search(&self, query: &str) -> Vec<CardRecord> {
        let cards = self.list_all().await;
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return cards;
        }

        cards
            .into_iter()
            .filter(|card| card.store_name.to_lowercase().contains(&needle))
            .collect()
    }

    // -- internal sync helpers ------------------------------------------

    fn load_all(&self) -> Result<Vec<CardRecord>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT key, value FROM kv WHERE key LIKE ?1")?;
        let rows = stmt.query_map(params![format!("{KEY_PREFIX}%")], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut cards = Vec::new();
        for row in rows {
            let (key, value) = row?;
            match serde_json::from_str::<CardRecord>(&value) {
                Ok(card) => cards.push(card),
                // Defensive read: skip entries written by an unknown schema.
                Err(e) => tracing::warn!(key = %key, error = %e, "skipping unreadable card entry"),
            }
        }

        cards.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(cards)
    }

    fn load(&self, id: &str) -> Result<Option<CardRecord>> {
        let value: Option<String> = self
            .conn()
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![card_key(id)],
                |row| row.get(0),
            )
            .optional()?;

        match value {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }

    fn put(&self, card: &CardRecord) -> Result<()> {
        let value = serde_json::to_string(card)?;
        self.conn().execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![card_key(&card.id), value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardbox_shared::PayloadKind;

    fn open_store() -> (tempfile::TempDir, CardStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CardStore::open_at(&dir.path().join("cards.db")).unwrap();
        (dir, store)
    }

    fn draft(store_name: &str, payload: &str) -> CardDraft {
        CardDraft {
            store_name: Some(store_name.to_string()),
            ..CardDraft::new(payload)
        }
    }

    #[tokio::test]
    async fn save_then_get_round_trips() {
        let (_dir, store) = open_store();

        let saved = store.save(draft("Target", "123")).await.unwrap();
        let loaded = store.get(&saved.id).await.unwrap();

        assert_eq!(loaded.store_name, "Target");
        assert_eq!(loaded.payload, "123");
        assert_eq!(loaded.payload_kind, PayloadKind::Manual);
        assert!(loaded.updated_at >= loaded.created_at);
    }

    #[tokio::test]
    async fn get_missing_id_is_none() {
        let (_dir, store) = open_store();
        assert!(store.get("nope").await.is_none());
    }

    #[tokio::test]
    async fn list_all_sorts_by_updated_at_descending() {
        let (_dir, store) = open_store();

        let first = store.save(draft("Aldi", "1")).await.unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = store.save(draft("Lidl", "2")).await.unwrap();

        let cards = store.list_all().await;
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, second.id);
        assert_eq!(cards[1].id, first.id);

        // Touching the older record moves it to the front.
        std::thread::sleep(std::time::Duration::from_millis(2));
        store.update(&first.id, CardPatch::default()).await.unwrap();
        let cards = store.list_all().await;
        assert_eq!(cards[0].id, first.id);
    }

    #[tokio::test]
    async fn list_all_ignores_foreign_keys_in_the_medium() {
        let (_dir, store) = open_store();
        store.save(draft("Rewe", "1")).await.unwrap();

        // An unrelated entry sharing the medium must not surface.
        store
            .conn()
            .execute(
                "INSERT INTO kv (key, value) VALUES ('theme', '\"dark\"')",
                [],
            )
            .unwrap();

        let cards = store.list_all().await;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].store_name, "Rewe");
    }

    #[tokio::test]
    async fn list_all_skips_unreadable_entries() {
        let (_dir, store) = open_store();
        store.save(draft("Rewe", "1")).await.unwrap();

        store
            .conn()
            .execute(
                "INSERT INTO kv (key, value) VALUES ('storecard_broken', 'not json')",
                [],
            )
            .unwrap();

        assert_eq!(store.list_all().await.len(), 1);
    }

    #[tokio::test]
    async fn update_merges_and_refreshes_updated_at() {
        let (_dir, store) = open_store();
        let saved = store.save(draft("Tarket", "123")).await.unwrap();

        std::thread::sleep(std::time::Duration::from_millis(2));
        let patch = CardPatch {
            store_name: Some("Target".into()),
            ..CardPatch::default()
        };
        let updated = store.update(&saved.id, patch).await.unwrap();

        assert_eq!(updated.store_name, "Target");
        assert_eq!(updated.payload, "123");
        assert_eq!(updated.created_at, saved.created_at);
        assert!(updated.updated_at > saved.updated_at);
    }

    #[tokio::test]
    async fn update_missing_id_fails_and_creates_nothing() {
        let (_dir, store) = open_store();

        let err = store.update("ghost", CardPatch::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
        assert!(store.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_and_tolerates_missing() {
        let (_dir, store) = open_store();
        let saved = store.save(draft("Edeka", "9")).await.unwrap();

        store.delete(&saved.id).await.unwrap();
        assert!(store.get(&saved.id).await.is_none());

        // Deleting again is a no-op, not an error.
        store.delete(&saved.id).await.unwrap();
    }

    #[tokio::test]
    async fn clear_all_is_idempotent() {
        let (_dir, store) = open_store();
        store.save(draft("Aldi", "1")).await.unwrap();
        store.save(draft("Lidl", "2")).await.unwrap();

        store.clear_all().await.unwrap();
        store.clear_all().await.unwrap();
        assert!(store.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn blank_search_equals_list_all() {
        let (_dir, store) = open_store();
        store.save(draft("Aldi", "1")).await.unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        store.save(draft("Lidl", "2")).await.unwrap();

        let listed = store.list_all().await;
        assert_eq!(store.search("").await, listed);
        assert_eq!(store.search("   ").await, listed);
    }

    #[tokio::test]
    async fn search_is_a_case_insensitive_substring_match() {
        let (_dir, store) = open_store();
        store.save(draft("Target", "1")).await.unwrap();
        store.save(draft("Tesco", "2")).await.unwrap();

        let hits = store.search("target").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].store_name, "Target");

        let hits = store.search("ESC").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].store_name, "Tesco");

        assert!(store.search("walmart").await.is_empty());
    }
}
