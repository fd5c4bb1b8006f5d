pub mod error;
pub mod folder;
pub mod note;

pub use error::{ApiErrorBody, ApiErrorObject};
pub use folder::{FolderPayload, FolderView};
pub use note::{NotePayload, NoteView};
