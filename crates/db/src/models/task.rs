//! Task model: the sole resource this service manages.
//!
//! A task is a titled, completable record. Ids are assigned by the store
//! layer on insert and are immutable thereafter.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
}

/// Creation payload. `title` defaults to empty so a missing field is
/// rejected by the shared validator rather than by the JSON decoder.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTask {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Update payload. Absent fields leave the stored value untouched.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl Task {
    /// Insert a new record under a freshly assigned id.
    pub async fn create(pool: &SqlitePool, data: &CreateTask) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, Task>(
            r#"INSERT INTO tasks (id, title, completed)
               VALUES ($1, $2, $3)
               RETURNING id, title, completed"#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(data.completed)
        .fetch_one(pool)
        .await
    }

    /// Every stored task, in the store's natural order.
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>("SELECT id, title, completed FROM tasks")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>("SELECT id, title, completed FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partial set-update: present fields overwrite, absent fields keep
    /// their stored value. The id itself is never written. Returns the
    /// number of matched rows so callers can distinguish a miss.
    pub async fn update(
        pool: &SqlitePool,
        id: Uuid,
        data: &UpdateTask,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"UPDATE tasks
               SET title = COALESCE($2, title),
                   completed = COALESCE($3, completed)
               WHERE id = $1"#,
        )
        .bind(id)
        .bind(data.title.as_deref())
        .bind(data.completed)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Remove a record. Returns the number of matched rows.
    pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
