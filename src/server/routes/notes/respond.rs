use crate::db::DbNote;
use crate::sanitize::sanitize;
use noteful_schema::NoteView;

/// Client-facing shape of a note row. `name` and `content` are sanitized; a
/// note without content is rendered with an empty string.
pub(crate) fn serialize_note(note: &DbNote) -> NoteView {
    NoteView {
        id: note.id,
        name: sanitize(&note.name),
        modified: note.modified,
        folder_id: note.folder_id,
        content: note.content.as_deref().map(sanitize).unwrap_or_default(),
    }
}

pub(crate) fn note_location(id: i64) -> String {
    format!("{}/{id}", super::NOTES_PATH)
}
