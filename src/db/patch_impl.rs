//! `FolderPatch`/`NotePatch` -> `DbPatchable` implementation.
//!
//! This sits in the `db` module because it contains SQL/table knowledge.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::db::patch::{FolderPatch, NotePatch};
use crate::db::traits::DbPatchable;
use crate::error::{Entity, NotefulError};

#[async_trait]
impl DbPatchable for FolderPatch {
    async fn apply_patch(&self, pool: &SqlitePool, id: i64) -> Result<(), NotefulError> {
        let name_set = self.name.is_some();

        let res = sqlx::query(
            r#"
            UPDATE folders
            SET name = COALESCE(?, name)
            WHERE id = ?
            "#,
        )
        .bind(self.name.as_deref())
        .bind(id)
        .execute(pool)
        .await?;

        let affected = res.rows_affected();
        debug!(table = "folders", id, affected, name_set, "db patch applied");

        if affected == 0 {
            return Err(NotefulError::NotFound(Entity::Folder));
        }
        Ok(())
    }
}

#[async_trait]
impl DbPatchable for NotePatch {
    async fn apply_patch(&self, pool: &SqlitePool, id: i64) -> Result<(), NotefulError> {
        let name_set = self.name.is_some();
        let folder_id_set = self.folder_id.is_some();
        let content_set = self.content.is_some();
        let modified = Utc::now();

        let res = sqlx::query(
            r#"
            UPDATE notes
            SET
                name = COALESCE(?, name),
                folder_id = COALESCE(?, folder_id),
                content = CASE WHEN ? THEN ? ELSE content END,
                modified = ?
            WHERE id = ?
            "#,
        )
        .bind(self.name.as_deref())
        .bind(self.folder_id)
        .bind(content_set)
        .bind(self.content.as_ref().and_then(Option::as_deref))
        .bind(modified)
        .bind(id)
        .execute(pool)
        .await?;

        let affected = res.rows_affected();
        debug!(
            table = "notes",
            id,
            affected,
            modified = %modified,
            name_set,
            folder_id_set,
            content_set,
            "db patch applied"
        );

        if affected == 0 {
            return Err(NotefulError::NotFound(Entity::Note));
        }
        Ok(())
    }
}
