use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Inbound note body for `POST /api/notes` and `PATCH /api/notes/{id}`.
///
/// `folder_id` is accepted either as a JSON number or a numeric string.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NotePayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub folder_id: Option<Value>,
    /// An explicit `null` is kept as `Some(Value::Null)` so a patch can clear it.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub content: Option<Value>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Outbound note representation. `name` and `content` are already sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NoteView {
    pub id: i64,
    pub name: String,
    pub modified: DateTime<Utc>,
    pub folder_id: i64,
    pub content: String,
}
