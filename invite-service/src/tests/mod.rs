use axum::Router;
use std::sync::Arc;

use crate::routes::create_router_with_store;
use inviteai_shared::models::{CopyVariant, InviteRecord, Mood};
use inviteai_shared::store::MemoryInviteStore;
use inviteai_shared::test_utils::test_logging::init_test_logging;


/// Sets up a test application backed by a fresh in-memory store.
fn create_test_app() -> (Router, Arc<MemoryInviteStore>) {
    init_test_logging();

    let store = Arc::new(MemoryInviteStore::new());
    let app = create_router_with_store(store.clone(), "");
    (app, store)
}

fn test_invite(id: &str, event_name: &str) -> InviteRecord {
    InviteRecord {
        id: id.to_string(),
        event_name: event_name.to_string(),
        date: "2026-05-01".to_string(),
        time: "18:00".to_string(),
        location: "123 Main St, New York".to_string(),
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
