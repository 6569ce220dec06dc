use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use log::{debug, info};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::SetActiveRequest;
use inviteai_shared::models::{InviteRecord, InviteUpdate, MessageResponse};
use inviteai_shared::store::InviteStore;

// GET /invites
pub async fn get_invites<S>(State(store): State<Arc<S>>) -> Result<Json<serde_json::Value>>
where
    S: InviteStore,
{
    let invites = store.get_all().await?;
    debug!("Returning {} saved invites", invites.len());

    Ok(Json(serde_json::json!({ "invites": invites })))
}

// POST /invites
// Saves a record; a record with a known id replaces the stored one in place.
pub async fn save_invite<S>(
    State(store): State<Arc<S>>,
    Json(invite): Json<InviteRecord>,
) -> Result<(StatusCode, Json<serde_json::Value>)>
where
    S: InviteStore,
{
    info!("Saving invite id={}", invite.id);
    store.save(invite.clone()).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "invite": invite })),
    ))
}

// PATCH /invites/:id
// Merges the provided fields; an unknown id is a no-op, not an error, so the
// response carries a null invite instead of a 404.
pub async fn update_invite<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    Json(update): Json<InviteUpdate>,
) -> Result<Json<serde_json::Value>>
where
    S: InviteStore,
{
    let updated = store.update(&id, &update).await?;
    if updated.is_none() {
        debug!("Update for unknown invite id={} ignored", id);
    }

    Ok(Json(serde_json::json!({ "invite": updated })))
}

// DELETE /invites/:id
pub async fn delete_invite<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>>
where
    S: InviteStore,
{
    store.delete(&id).await?;
    info!("Deleted invite id={}", id);

    Ok(Json(MessageResponse {
        message: "Invite deleted successfully.".to_string(),
    }))
}

// POST /invites/:id/duplicate
// Builds a copy with a fresh identity and makes it the active record. The
// copy is not saved; the user decides that from the preview.
pub async fn duplicate_invite<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<serde_json::Value>)>
where
    S: InviteStore,
{
    let original = store
        .get(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Invite with ID {} not found", id)))?;

    let copy = original.duplicate();
    info!("Duplicated invite id={} as id={}", id, copy.id);
    store.set_active(Some(copy.clone())).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "invite": copy })),
    ))
}

// GET /invites/active
pub async fn get_active_invite<S>(State(store): State<Arc<S>>) -> Result<Json<serde_json::Value>>
where
    S: InviteStore,
{
    let active = store.get_active().await?;

    Ok(Json(serde_json::json!({ "invite": active })))
}

// PUT /invites/active
pub async fn set_active_invite<S>(
    State(store): State<Arc<S>>,
    Json(payload): Json<SetActiveRequest>,
) -> Result<Json<serde_json::Value>>
where
    S: InviteStore,
{
    match &payload.invite {
        Some(invite) => debug!("Setting active invite id={}", invite.id),
        None => debug!("Clearing active invite"),
    }
    store.set_active(payload.invite.clone()).await?;

    Ok(Json(serde_json::json!({ "invite": payload.invite })))
}
