use crate::db::DbFolder;
use crate::sanitize::sanitize;
use noteful_schema::FolderView;

/// Client-facing shape of a folder row, with `name` sanitized.
pub(crate) fn serialize_folder(folder: &DbFolder) -> FolderView {
    FolderView {
        id: folder.id,
        name: sanitize(&folder.name),
    }
}

pub(crate) fn folder_location(id: i64) -> String {
    format!("{}/{id}", super::FOLDERS_PATH)
}
