use crate::server::router::NotefulState;
use axum::{Router, routing::get};

pub mod extract;
pub mod handlers;
pub mod respond;

pub const FOLDERS_PATH: &str = "/api/folders";

pub fn router() -> Router<NotefulState> {
    Router::new()
        .route(
            FOLDERS_PATH,
            get(handlers::list_folders).post(handlers::create_folder),
        )
        .route(
            "/api/folders/{folder_id}",
            get(handlers::get_folder)
                .delete(handlers::delete_folder)
                .patch(handlers::patch_folder),
        )
}
