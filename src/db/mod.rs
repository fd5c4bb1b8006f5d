//! Database module: rows, create/patch payloads, schema and the store handle.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `patch.rs`: create payloads and partial-update patches
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `store.rs`: pooled store with the per-table queries

pub mod models;
pub mod patch;
pub mod schema;
pub mod store;
pub mod traits;

mod patch_impl;

pub use models::{DbFolder, DbNote};
pub use patch::{FolderCreate, FolderPatch, NoteCreate, NotePatch};
pub use schema::SQLITE_INIT;
pub use store::Store;
pub use traits::DbPatchable;
