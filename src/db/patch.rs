use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderCreate {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteCreate {
    pub name: String,
    pub folder_id: i64,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolderPatch {
    /// `None` => do not change; `Some(v)` => update
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotePatch {
    /// `None` => do not change; `Some(v)` => update
    pub name: Option<String>,
    /// `None` => do not change; `Some(v)` => update
    pub folder_id: Option<i64>,
    /// `None` => do not change; `Some(None)` => clear; `Some(Some(v))` => update
    pub content: Option<Option<String>>,
}
