use async_trait::async_trait;
use thiserror::Error;

use crate::models::{InviteRecord, InviteUpdate};

pub mod memory;

pub use memory::MemoryInviteStore;

/// Errors a store backend may surface. The in-memory store never fails, but
/// the trait keeps the seam so a durable backend can slot in behind the same
/// handlers.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The single source of truth for saved invitations plus the one "active"
/// record currently being edited or viewed.
///
/// Mutations are deliberately lenient: saving an existing id replaces the
/// record in place, and updating or deleting an unknown id is a silent no-op
/// rather than an error. There is no external consistency to protect, so
/// idempotence wins over strict validation.
#[async_trait]
pub trait InviteStore: Send + Sync {
    /// Inserts `record`, or replaces the record sharing its id while keeping
    /// its position in the ordered collection.
    async fn save(&self, record: InviteRecord) -> StoreResult<()>;

    /// Removes the record with the given id if present.
    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Merges `update` into the record matching `id`, returning the updated
    /// record, or `None` if no saved record matched. When the active record
    /// shares the id the merge is mirrored into it as well, so the two views
    /// never drift apart.
    async fn update(&self, id: &str, update: &InviteUpdate) -> StoreResult<Option<InviteRecord>>;

    /// Looks up a single record by id.
    async fn get(&self, id: &str) -> StoreResult<Option<InviteRecord>>;

    /// Returns the full collection in first-seen insertion order. The result
    /// is a snapshot; mutating it does not affect the store.
    async fn get_all(&self) -> StoreResult<Vec<InviteRecord>>;

    /// Tracks at most one record as currently being edited/viewed. The
    /// active record does not have to exist in the saved collection.
    async fn set_active(&self, record: Option<InviteRecord>) -> StoreResult<()>;

    /// Returns the active record, if any.
    async fn get_active(&self) -> StoreResult<Option<InviteRecord>>;
}
