use serde::Deserialize;

use inviteai_shared::models::{InviteDraft, InviteRecord, Mood};

// Request DTOs
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInvitesRequest {
    pub draft: InviteDraft,
    pub preferred_mood: Mood,
}

/// Body of `PUT /invites/active`. A null `invite` clears the active record.
#[derive(Deserialize, Debug)]
pub struct SetActiveRequest {
    pub invite: Option<InviteRecord>,
}

// Responses reuse the shared record shape directly; see the handlers.
