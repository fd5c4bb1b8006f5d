use super::extract::{NewNote, NoteById, NoteUpdate};
use super::respond::{note_location, serialize_note};
use crate::error::NotefulError;
use crate::server::router::NotefulState;
use crate::server::routes::created;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::Response,
};
use noteful_schema::NoteView;
use tracing::info;

pub(super) async fn list_notes(
    State(state): State<NotefulState>,
) -> Result<Json<Vec<NoteView>>, NotefulError> {
    let notes = state.store.list_notes().await?;
    Ok(Json(notes.iter().map(serialize_note).collect()))
}

pub(super) async fn create_note(
    State(state): State<NotefulState>,
    NewNote(create): NewNote,
) -> Result<Response, NotefulError> {
    let note = state.store.insert_note(create).await?;
    info!(
        note_id = note.id,
        folder_id = note.folder_id,
        "Note with id {} was created",
        note.id
    );
    Ok(created(note_location(note.id), serialize_note(&note)))
}

pub(super) async fn get_note(NoteById(note): NoteById) -> Json<NoteView> {
    Json(serialize_note(&note))
}

pub(super) async fn delete_note(
    State(state): State<NotefulState>,
    NoteById(note): NoteById,
) -> Result<StatusCode, NotefulError> {
    state.store.delete_note(note.id).await?;
    info!(note_id = note.id, "Note with id {} deleted", note.id);
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn patch_note(
    State(state): State<NotefulState>,
    NoteById(note): NoteById,
    NoteUpdate(patch): NoteUpdate,
) -> Result<StatusCode, NotefulError> {
    state.store.update_note(note.id, &patch).await?;
    Ok(StatusCode::NO_CONTENT)
}
