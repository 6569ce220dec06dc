use axum::Json;
use log::info;

use crate::error::Result;
use crate::models::GenerateInvitesRequest;
use inviteai_shared::generator::generate_versions;

// POST /invites/generate
// Produces the three stylistic versions of the draft. Nothing is persisted;
// the caller saves whichever version the user picks.
pub async fn generate_invites(
    Json(payload): Json<GenerateInvitesRequest>,
) -> Result<Json<serde_json::Value>> {
    info!(
        "Generating invite versions for event '{}'",
        payload.draft.event_name
    );

    let versions = generate_versions(&payload.draft, payload.preferred_mood)?;

    Ok(Json(serde_json::json!({ "invites": versions })))
}
