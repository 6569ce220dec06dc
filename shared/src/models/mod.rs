use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Returns the current time as an RFC 3339 string, the only timestamp
/// representation used on the wire and in the store.
pub fn now_str() -> String {
    Utc::now().to_rfc3339()
}

/// Stylistic category driving the invite's color/gradient choice.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Casual,
    Elegant,
    Luxurious,
    Playful,
}

/// Phrasing tone applied when the invite copy is rendered.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CopyVariant {
    Formal,
    Fun,
    Minimal,
}

/// Color overrides chosen by the user in the preview editor. Unconstrained
/// strings; the renderer treats them as opaque CSS colors.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CustomColors {
    pub primary: String,
    pub secondary: String,
    pub text: String,
}

/// The persisted unit of data representing one event invite design.
///
/// `id` is the sole lookup/merge key and is stable for the record's
/// lifetime. `created_at` is set once at creation and never mutated; every
/// other field except `id` may change through an update.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InviteRecord {
    pub id: String,
    pub event_name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub theme: String,
    pub language: String,
    pub animated: bool,
    pub mood: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_variant: Option<CopyVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_colors: Option<CustomColors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
}

impl InviteRecord {
    /// Builds a duplicate of this record: fresh id and creation timestamp,
    /// event name suffixed so the user can tell the copies apart, all other
    /// fields carried over.
    pub fn duplicate(&self) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            event_name: format!("{} (Copy)", self.event_name),
            created_at: now_str(),
            ..self.clone()
        }
    }
}

/// The base field set the user enters before any variant is generated.
/// No id, mood, copy variant or timestamp yet; the generator assigns those.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InviteDraft {
    pub event_name: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub animated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Distinguishes between a field being set to a value and being explicitly
/// cleared in a partial update. A field that is absent from the payload is
/// left untouched.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OptionalField<T> {
    Value(T),
    Null,
}

// Plain `Option<OptionalField<T>>` would fold an explicit JSON null into
// "absent". Running the inner deserializer whenever the key is present keeps
// null distinguishable as OptionalField::Null.
fn clearable<'de, D, T>(deserializer: D) -> Result<Option<OptionalField<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    OptionalField::deserialize(deserializer).map(Some)
}

/// Partial-merge payload for `InviteStore::update`. There is deliberately no
/// `id` or `created_at` member; those fields are immutable after creation.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InviteUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub copy_variant: Option<OptionalField<CopyVariant>>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub custom_colors: Option<OptionalField<CustomColors>>,
    #[serde(default, deserialize_with = "clearable", skip_serializing_if = "Option::is_none")]
    pub description: Option<OptionalField<String>>,
}

impl InviteUpdate {
    /// Merges the provided fields into `record`, leaving everything that was
    /// not specified untouched.
    pub fn apply_to(&self, record: &mut InviteRecord) {
        if let Some(event_name) = &self.event_name {
            record.event_name = event_name.clone();
        }
        if let Some(date) = &self.date {
            record.date = date.clone();
        }
        if let Some(time) = &self.time {
            record.time = time.clone();
        }
        if let Some(location) = &self.location {
            record.location = location.clone();
        }
        if let Some(theme) = &self.theme {
            record.theme = theme.clone();
        }
        if let Some(language) = &self.language {
            record.language = language.clone();
        }
        if let Some(animated) = self.animated {
            record.animated = animated;
        }
        if let Some(mood) = self.mood {
            record.mood = mood;
        }
        if let Some(field) = &self.copy_variant {
            record.copy_variant = match field {
                OptionalField::Value(val) => Some(*val),
                OptionalField::Null => None,
            };
        }
        if let Some(field) = &self.custom_colors {
            record.custom_colors = match field {
                OptionalField::Value(val) => Some(val.clone()),
                OptionalField::Null => None,
            };
        }
        if let Some(field) = &self.description {
            record.description = match field {
                OptionalField::Value(val) => Some(val.clone()),
                OptionalField::Null => None,
            };
        }
    }
}

/// Trivial response body shared by handlers that only report a message.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}
