use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::NotefulError;

/// Abstraction for applying a partial update to the row with the given id.
///
/// Implementations issue a single statement, so either every supplied field
/// lands or none does.
#[async_trait]
pub trait DbPatchable {
    async fn apply_patch(&self, pool: &SqlitePool, id: i64) -> Result<(), NotefulError>;
}
