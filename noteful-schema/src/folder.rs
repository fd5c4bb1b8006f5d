use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound folder body for `POST /api/folders` and `PATCH /api/folders/{id}`.
///
/// Fields stay untyped so validation can report the exact missing/invalid field
/// instead of a generic deserialization failure. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FolderPayload {
    #[serde(default)]
    pub name: Option<Value>,
}

/// Outbound folder representation. `name` is already sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FolderView {
    pub id: i64,
    pub name: String,
}
