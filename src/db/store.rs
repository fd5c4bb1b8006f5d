use crate::db::models::{DbFolder, DbNote};
use crate::db::patch::{FolderCreate, FolderPatch, NoteCreate, NotePatch};
use crate::db::schema::SQLITE_INIT;
use crate::db::traits::DbPatchable;
use crate::error::NotefulError;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

/// Cloneable handle over the SQLite pool. Every query checks a connection out
/// of the pool; the handle itself carries no other state.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens (creating if missing) the database and applies the schema.
    pub async fn connect(database_url: &str) -> Result<Self, NotefulError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await?;

        apply_schema(&pool).await?;

        info!("Store initialized");
        Ok(Self { pool })
    }

    pub async fn list_folders(&self) -> Result<Vec<DbFolder>, NotefulError> {
        let rows = sqlx::query_as::<_, DbFolder>(
            r#"
        SELECT id, name
        FROM folders
        ORDER BY id
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_folder_by_id(&self, id: i64) -> Result<Option<DbFolder>, NotefulError> {
        let row = sqlx::query_as::<_, DbFolder>(
            r#"
        SELECT id, name
        FROM folders
        WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn insert_folder(&self, create: FolderCreate) -> Result<DbFolder, NotefulError> {
        let row = sqlx::query_as::<_, DbFolder>(
            r#"
        INSERT INTO folders (name)
        VALUES (?)
        RETURNING id, name
        "#,
        )
        .bind(create.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update_folder(&self, id: i64, patch: &FolderPatch) -> Result<(), NotefulError> {
        patch.apply_patch(&self.pool, id).await
    }

    /// Deletes the folder; returns the number of removed rows (0 when absent).
    pub async fn delete_folder(&self, id: i64) -> Result<u64, NotefulError> {
        let res = sqlx::query("DELETE FROM folders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected())
    }

    pub async fn list_notes(&self) -> Result<Vec<DbNote>, NotefulError> {
        let rows = sqlx::query_as::<_, DbNote>(
            r#"
        SELECT id, name, folder_id, content, modified
        FROM notes
        ORDER BY id
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_note_by_id(&self, id: i64) -> Result<Option<DbNote>, NotefulError> {
        let row = sqlx::query_as::<_, DbNote>(
            r#"
        SELECT id, name, folder_id, content, modified
        FROM notes
        WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn insert_note(&self, create: NoteCreate) -> Result<DbNote, NotefulError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, DbNote>(
            r#"
        INSERT INTO notes (name, folder_id, content, modified)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, folder_id, content, modified
        "#,
        )
        .bind(create.name)
        .bind(create.folder_id)
        .bind(create.content)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update_note(&self, id: i64, patch: &NotePatch) -> Result<(), NotefulError> {
        patch.apply_patch(&self.pool, id).await
    }

    /// Deletes the note; returns the number of removed rows (0 when absent).
    pub async fn delete_note(&self, id: i64) -> Result<u64, NotefulError> {
        let res = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected())
    }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), NotefulError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
