//! Produces the three stylistic versions of a drafted invitation.
//!
//! The "AI generation" is a fixed transformation: mood and copy tone are
//! assigned per position, never randomized, so the same draft always yields
//! the same shape of output (only ids and the timestamp differ per call).

use log::info;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{now_str, CopyVariant, InviteDraft, InviteRecord, Mood};

/// Theme used when the draft carries neither a theme nor a description.
pub const DEFAULT_THEME: &str = "Celebration";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid draft: missing required field '{field}'")]
    InvalidDraft { field: &'static str },
}

/// Generates exactly three versions of the draft for the user to compare:
/// an elegant/formal one, a playful/fun one, and one in the caller's
/// preferred mood with minimal copy.
///
/// All three share a single creation timestamp captured here; each gets a
/// fresh id. A blank theme falls back to the draft description, then to
/// [`DEFAULT_THEME`], so generated records always carry a usable theme.
pub fn generate_versions(
    draft: &InviteDraft,
    preferred_mood: Mood,
) -> Result<[InviteRecord; 3], GeneratorError> {
    validate(draft)?;

    let theme = if draft.theme.trim().is_empty() {
        draft
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_THEME)
            .to_string()
    } else {
        draft.theme.clone()
    };
    let created_at = now_str();

    let base = |mood: Mood, copy_variant: CopyVariant| InviteRecord {
        id: Uuid::new_v4().to_string(),
        event_name: draft.event_name.clone(),
        date: draft.date.clone(),
        time: draft.time.clone(),
        location: draft.location.clone(),
        theme: theme.clone(),
        language: draft.language.clone(),
        animated: draft.animated,
        mood,
        copy_variant: Some(copy_variant),
        custom_colors: None,
        description: draft.description.clone(),
        created_at: created_at.clone(),
    };

    info!(
        "Generated 3 invite versions for event '{}' (preferred mood {:?})",
        draft.event_name, preferred_mood
    );

    Ok([
        base(Mood::Elegant, CopyVariant::Formal),
        base(Mood::Playful, CopyVariant::Fun),
        base(preferred_mood, CopyVariant::Minimal),
    ])
}

fn validate(draft: &InviteDraft) -> Result<(), GeneratorError> {
    if draft.event_name.trim().is_empty() {
        return Err(GeneratorError::InvalidDraft {
            field: "eventName",
        });
    }
    if draft.date.trim().is_empty() {
        return Err(GeneratorError::InvalidDraft { field: "date" });
    }
    if draft.time.trim().is_empty() {
        return Err(GeneratorError::InvalidDraft { field: "time" });
    }
    Ok(())
}
