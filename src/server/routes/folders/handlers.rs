use super::extract::{FolderById, FolderUpdate, NewFolder};
use super::respond::{folder_location, serialize_folder};
use crate::error::NotefulError;
use crate::server::router::NotefulState;
use crate::server::routes::created;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::Response,
};
use noteful_schema::FolderView;
use tracing::info;

pub(super) async fn list_folders(
    State(state): State<NotefulState>,
) -> Result<Json<Vec<FolderView>>, NotefulError> {
    let folders = state.store.list_folders().await?;
    Ok(Json(folders.iter().map(serialize_folder).collect()))
}

pub(super) async fn create_folder(
    State(state): State<NotefulState>,
    NewFolder(create): NewFolder,
) -> Result<Response, NotefulError> {
    let folder = state.store.insert_folder(create).await?;
    info!(folder_id = folder.id, "Folder with id {} was created", folder.id);
    Ok(created(folder_location(folder.id), serialize_folder(&folder)))
}

pub(super) async fn get_folder(FolderById(folder): FolderById) -> Json<FolderView> {
    Json(serialize_folder(&folder))
}

pub(super) async fn delete_folder(
    State(state): State<NotefulState>,
    FolderById(folder): FolderById,
) -> Result<StatusCode, NotefulError> {
    state.store.delete_folder(folder.id).await?;
    info!(folder_id = folder.id, "Folder with id {} deleted", folder.id);
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn patch_folder(
    State(state): State<NotefulState>,
    FolderById(folder): FolderById,
    FolderUpdate(patch): FolderUpdate,
) -> Result<StatusCode, NotefulError> {
    state.store.update_folder(folder.id, &patch).await?;
    Ok(StatusCode::NO_CONTENT)
}
