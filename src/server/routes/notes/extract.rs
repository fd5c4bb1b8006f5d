use crate::db::{DbNote, NoteCreate, NotePatch};
use crate::error::{Entity, NotefulError};
use crate::server::router::NotefulState;
use crate::utils::logging::with_pretty_json_debug;
use crate::validation::{validate_new_note, validate_note_patch};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use noteful_schema::NotePayload;
use tracing::{debug, warn};

/// The note addressed by `/api/notes/{note_id}`, looked up once per request.
pub(crate) struct NoteById(pub(crate) DbNote);

impl FromRequestParts<NotefulState> for NoteById {
    type Rejection = NotefulError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &NotefulState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| NotefulError::InvalidRequest(e.body_text()))?;

        let note = match raw_id.parse::<i64>() {
            Ok(id) => state.store.get_note_by_id(id).await?,
            Err(_) => None,
        };

        note.map(NoteById).ok_or_else(|| {
            warn!(note_id = %raw_id, "Note with id {raw_id} not found.");
            NotefulError::NotFound(Entity::Note)
        })
    }
}

/// Validated body of `POST /api/notes`.
pub(crate) struct NewNote(pub(crate) NoteCreate);

impl<S> FromRequest<S> for NewNote
where
    S: Send + Sync,
{
    type Rejection = NotefulError;

    /// Deserialize the JSON body into `NotePayload`, then require `name` and an
    /// integer-parseable `folder_id`, in that order.
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<NotePayload>::from_request(req, state).await?;

        with_pretty_json_debug(&payload, |pretty_body| {
            debug!(body = %pretty_body, "Incoming note create body");
        });

        let create = validate_new_note(&payload).inspect_err(|e| {
            warn!(error = %e, "note create rejected");
        })?;
        Ok(NewNote(create))
    }
}

/// Validated body of `PATCH /api/notes/{note_id}`.
pub(crate) struct NoteUpdate(pub(crate) NotePatch);

impl<S> FromRequest<S> for NoteUpdate
where
    S: Send + Sync,
{
    type Rejection = NotefulError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<NotePayload>::from_request(req, state).await?;

        with_pretty_json_debug(&payload, |pretty_body| {
            debug!(body = %pretty_body, "Incoming note patch body");
        });

        let patch = validate_note_patch(&payload).inspect_err(|e| {
            warn!(error = %e, "note patch rejected");
        })?;
        Ok(NoteUpdate(patch))
    }
}
