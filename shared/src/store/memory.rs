use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use crate::models::{InviteRecord, InviteUpdate};
use crate::store::{InviteStore, StoreResult};

#[derive(Debug, Default)]
struct Inner {
    invites: Vec<InviteRecord>,
    active: Option<InviteRecord>,
}

/// Volatile store holding all invitations for the lifetime of the process.
///
/// One instance is constructed per service and injected where needed; there
/// is no process-wide singleton. The lock preserves the single-writer
/// invariant when the store is shared across the multi-threaded runtime.
#[derive(Debug, Default)]
pub struct MemoryInviteStore {
    inner: RwLock<Inner>,
}

impl MemoryInviteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InviteStore for MemoryInviteStore {
    async fn save(&self, record: InviteRecord) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        match inner.invites.iter().position(|i| i.id == record.id) {
            Some(index) => {
                debug!("Replacing saved invite id={}", record.id);
                inner.invites[index] = record;
            }
            None => {
                debug!("Saving new invite id={}", record.id);
                inner.invites.push(record);
            }
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let before = inner.invites.len();
        inner.invites.retain(|i| i.id != id);
        if inner.invites.len() == before {
            debug!("Delete for unknown invite id={} ignored", id);
        }
        Ok(())
    }

    async fn update(&self, id: &str, update: &InviteUpdate) -> StoreResult<Option<InviteRecord>> {
        let mut inner = self.inner.write().await;

        let updated = match inner.invites.iter_mut().find(|i| i.id == id) {
            Some(record) => {
                update.apply_to(record);
                Some(record.clone())
            }
            None => {
                debug!("Update for unknown invite id={} ignored", id);
                None
            }
        };

        // The active record is tracked independently of the saved
        // collection, so it is merged even when no saved record matched.
        if let Some(active) = inner.active.as_mut() {
            if active.id == id {
                update.apply_to(active);
            }
        }

        Ok(updated)
    }

    async fn get(&self, id: &str) -> StoreResult<Option<InviteRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.invites.iter().find(|i| i.id == id).cloned())
    }

    async fn get_all(&self) -> StoreResult<Vec<InviteRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.invites.clone())
    }

    async fn set_active(&self, record: Option<InviteRecord>) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.active = record;
        Ok(())
    }

    async fn get_active(&self) -> StoreResult<Option<InviteRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.active.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CopyVariant, Mood};

    fn record(id: &str, event_name: &str) -> InviteRecord {
        InviteRecord {
            id: id.to_string(),
            event_name: event_name.to_string(),
            date: "2026-05-01".to_string(),
            time: "18:00".to_string(),
            location: "123 Main St".to_string(),
            theme: "Garden Party".to_string(),
            language: "english".to_string(),
            animated: false,
            mood: Mood::Elegant,
            copy_variant: Some(CopyVariant::Formal),
            custom_colors: None,
            description: None,
            created_at: "2026-04-01T10:00:00+00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn save_then_get_all_contains_exactly_one_copy() {
        let store = MemoryInviteStore::new();
        let rec = record("1", "Sarah's Birthday");

        store.save(rec.clone()).await.unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], rec);
    }

    #[tokio::test]
    async fn save_is_idempotent_for_identical_input() {
        let store = MemoryInviteStore::new();
        let rec = record("1", "Sarah's Birthday");

        store.save(rec.clone()).await.unwrap();
        store.save(rec.clone()).await.unwrap();

        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn save_replaces_existing_id_in_place() {
        let store = MemoryInviteStore::new();
        store.save(record("1", "Original")).await.unwrap();
        store.save(record("2", "Other")).await.unwrap();

        store.save(record("1", "Updated")).await.unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        // Replacement keeps the record's position
        assert_eq!(all[0].id, "1");
        assert_eq!(all[0].event_name, "Updated");
        assert_eq!(all[1].id, "2");
    }

    #[tokio::test]
    async fn delete_removes_record_and_is_idempotent() {
        let store = MemoryInviteStore::new();
        store.save(record("1", "Sarah's Birthday")).await.unwrap();

        store.delete("1").await.unwrap();
        assert!(store.get_all().await.unwrap().is_empty());

        // Deleting again (or a never-seen id) is a no-op
        store.delete("1").await.unwrap();
        store.delete("missing-id").await.unwrap();
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_merges_only_named_fields() {
        let store = MemoryInviteStore::new();
        let rec = record("1", "Sarah's Birthday");
        store.save(rec.clone()).await.unwrap();

        let update = InviteUpdate {
            event_name: Some("Updated".to_string()),
            ..Default::default()
        };
        let updated = store.update("1", &update).await.unwrap().unwrap();

        assert_eq!(updated.event_name, "Updated");
        assert_eq!(updated.date, rec.date);
        assert_eq!(updated.created_at, rec.created_at);
        assert_eq!(updated.mood, rec.mood);
    }

    #[tokio::test]
    async fn update_unknown_id_is_a_noop() {
        let store = MemoryInviteStore::new();

        let update = InviteUpdate {
            event_name: Some("X".to_string()),
            ..Default::default()
        };
        let result = store.update("missing-id", &update).await.unwrap();

        assert!(result.is_none());
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_is_mirrored_into_matching_active_record() {
        let store = MemoryInviteStore::new();
        let rec = record("1", "Sarah's Birthday");
        store.save(rec.clone()).await.unwrap();
        store.set_active(Some(rec)).await.unwrap();

        let update = InviteUpdate {
            theme: Some("Vintage".to_string()),
            ..Default::default()
        };
        store.update("1", &update).await.unwrap();

        let active = store.get_active().await.unwrap().unwrap();
        assert_eq!(active.theme, "Vintage");
        let saved = store.get("1").await.unwrap().unwrap();
        assert_eq!(saved.theme, "Vintage");
    }

    #[tokio::test]
    async fn update_reaches_unsaved_active_record() {
        let store = MemoryInviteStore::new();
        // Active but never saved, e.g. a generated version being previewed
        store
            .set_active(Some(record("draft-1", "Preview")))
            .await
            .unwrap();

        let update = InviteUpdate {
            animated: Some(true),
            ..Default::default()
        };
        let result = store.update("draft-1", &update).await.unwrap();

        assert!(result.is_none());
        assert!(store.get_active().await.unwrap().unwrap().animated);
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_all_returns_a_detached_snapshot() {
        let store = MemoryInviteStore::new();
        store.save(record("1", "Sarah's Birthday")).await.unwrap();

        let mut snapshot = store.get_all().await.unwrap();
        snapshot.clear();

        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn insertion_order_is_preserved() {
        let store = MemoryInviteStore::new();
        for (id, name) in [("a", "First"), ("b", "Second"), ("c", "Third")] {
            store.save(record(id, name)).await.unwrap();
        }

        let ids: Vec<String> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn active_record_can_be_set_and_cleared() {
        let store = MemoryInviteStore::new();
        assert!(store.get_active().await.unwrap().is_none());

        store
            .set_active(Some(record("1", "Sarah's Birthday")))
            .await
            .unwrap();
        assert_eq!(store.get_active().await.unwrap().unwrap().id, "1");

        store.set_active(None).await.unwrap();
        assert!(store.get_active().await.unwrap().is_none());
    }
}
