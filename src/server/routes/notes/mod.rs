use crate::server::router::NotefulState;
use axum::{Router, routing::get};

pub mod extract;
pub mod handlers;
pub mod respond;

pub const NOTES_PATH: &str = "/api/notes";

pub fn router() -> Router<NotefulState> {
    Router::new()
        .route(
            NOTES_PATH,
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/api/notes/{note_id}",
            get(handlers::get_note)
                .delete(handlers::delete_note)
                .patch(handlers::patch_note),
        )
}
