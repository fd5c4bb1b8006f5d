use crate::db::{DbFolder, FolderCreate, FolderPatch};
use crate::error::{Entity, NotefulError};
use crate::server::router::NotefulState;
use crate::validation::{validate_folder_patch, validate_new_folder};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use noteful_schema::FolderPayload;
use tracing::warn;

/// The folder addressed by `/api/folders/{folder_id}`, looked up once per request.
///
/// Rejects with `404 Folder Not Found` when the id is unknown or not numeric, so
/// GET/DELETE/PATCH handlers only ever see an existing row.
pub(crate) struct FolderById(pub(crate) DbFolder);

impl FromRequestParts<NotefulState> for FolderById {
    type Rejection = NotefulError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &NotefulState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| NotefulError::InvalidRequest(e.body_text()))?;

        let folder = match raw_id.parse::<i64>() {
            Ok(id) => state.store.get_folder_by_id(id).await?,
            Err(_) => None,
        };

        folder.map(FolderById).ok_or_else(|| {
            warn!(folder_id = %raw_id, "Folder with id {raw_id} not found.");
            NotefulError::NotFound(Entity::Folder)
        })
    }
}

/// Validated body of `POST /api/folders`.
pub(crate) struct NewFolder(pub(crate) FolderCreate);

impl<S> FromRequest<S> for NewFolder
where
    S: Send + Sync,
{
    type Rejection = NotefulError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<FolderPayload>::from_request(req, state).await?;
        let create = validate_new_folder(&payload).inspect_err(|e| {
            warn!(error = %e, "folder create rejected");
        })?;
        Ok(NewFolder(create))
    }
}

/// Validated body of `PATCH /api/folders/{folder_id}`.
pub(crate) struct FolderUpdate(pub(crate) FolderPatch);

impl<S> FromRequest<S> for FolderUpdate
where
    S: Send + Sync,
{
    type Rejection = NotefulError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<FolderPayload>::from_request(req, state).await?;
        let patch = validate_folder_patch(&payload).inspect_err(|e| {
            warn!(error = %e, "Invalid update without required fields");
        })?;
        Ok(FolderUpdate(patch))
    }
}
