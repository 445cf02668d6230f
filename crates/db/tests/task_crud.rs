//! Integration tests for the task store primitives.
//!
//! Each test runs against its own temporary SQLite database with migrations
//! applied by `DBService::new`.

use db::{
    DBService,
    models::task::{CreateTask, Task, UpdateTask},
};
use sqlx::SqlitePool;
use tempfile::TempDir;
use uuid::Uuid;

/// Create a fresh store in a temp dir with migrations applied.
async fn setup_test_pool() -> (SqlitePool, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let service = DBService::new(&format!("sqlite://{}", db_path.to_string_lossy()))
        .await
        .expect("Failed to create store");

    (service.pool, temp_dir)
}

async fn create_test_task(pool: &SqlitePool, title: &str) -> Task {
    let data = CreateTask {
        title: title.to_string(),
        completed: false,
    };
    Task::create(pool, &data)
        .await
        .expect("Failed to create test task")
}

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let (pool, _temp_dir) = setup_test_pool().await;

    let first = create_test_task(&pool, "Water the plants").await;
    let second = create_test_task(&pool, "Take out the trash").await;

    assert_ne!(first.id, Uuid::nil());
    assert_ne!(second.id, Uuid::nil());
    assert_ne!(first.id, second.id);
    assert_eq!(first.title, "Water the plants");
    assert!(!first.completed);
}

#[tokio::test]
async fn test_find_by_id_round_trip() {
    let (pool, _temp_dir) = setup_test_pool().await;

    let created = create_test_task(&pool, "Read a chapter").await;
    let fetched = Task::find_by_id(&pool, created.id)
        .await
        .expect("Failed to fetch task")
        .expect("Task not found");

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_find_by_id_miss_returns_none() {
    let (pool, _temp_dir) = setup_test_pool().await;

    let missing = Task::find_by_id(&pool, Uuid::new_v4())
        .await
        .expect("Query failed");

    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_all_returns_every_task() {
    let (pool, _temp_dir) = setup_test_pool().await;

    for i in 1..=3 {
        create_test_task(&pool, &format!("Errand number {}", i)).await;
    }

    let tasks = Task::find_all(&pool).await.expect("Failed to list tasks");
    assert_eq!(tasks.len(), 3);
}

#[tokio::test]
async fn test_update_overwrites_present_fields() {
    let (pool, _temp_dir) = setup_test_pool().await;

    let task = create_test_task(&pool, "Original title").await;

    let matched = Task::update(
        &pool,
        task.id,
        &UpdateTask {
            title: Some("Rewritten title".to_string()),
            completed: Some(true),
        },
    )
    .await
    .expect("Update failed");
    assert_eq!(matched, 1);

    let updated = Task::find_by_id(&pool, task.id)
        .await
        .expect("Failed to fetch task")
        .expect("Task not found");
    assert_eq!(updated.id, task.id);
    assert_eq!(updated.title, "Rewritten title");
    assert!(updated.completed);
}

#[tokio::test]
async fn test_update_keeps_absent_fields() {
    let (pool, _temp_dir) = setup_test_pool().await;

    let task = create_test_task(&pool, "Stable title here").await;

    // Flip only the flag; the title must survive.
    let matched = Task::update(
        &pool,
        task.id,
        &UpdateTask {
            title: None,
            completed: Some(true),
        },
    )
    .await
    .expect("Update failed");
    assert_eq!(matched, 1);

    let updated = Task::find_by_id(&pool, task.id)
        .await
        .expect("Failed to fetch task")
        .expect("Task not found");
    assert_eq!(updated.title, "Stable title here");
    assert!(updated.completed);

    // And the reverse: a title-only update leaves the flag alone.
    Task::update(
        &pool,
        task.id,
        &UpdateTask {
            title: Some("Renamed once more".to_string()),
            completed: None,
        },
    )
    .await
    .expect("Update failed");

    let updated = Task::find_by_id(&pool, task.id)
        .await
        .expect("Failed to fetch task")
        .expect("Task not found");
    assert_eq!(updated.title, "Renamed once more");
    assert!(updated.completed);
}

#[tokio::test]
async fn test_update_unknown_id_matches_zero_rows() {
    let (pool, _temp_dir) = setup_test_pool().await;

    let matched = Task::update(
        &pool,
        Uuid::new_v4(),
        &UpdateTask {
            title: Some("Nobody home".to_string()),
            completed: None,
        },
    )
    .await
    .expect("Update failed");

    assert_eq!(matched, 0);
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let (pool, _temp_dir) = setup_test_pool().await;

    let task = create_test_task(&pool, "Short-lived task").await;

    let deleted = Task::delete(&pool, task.id).await.expect("Delete failed");
    assert_eq!(deleted, 1);

    let deleted = Task::delete(&pool, task.id).await.expect("Delete failed");
    assert_eq!(deleted, 0);

    assert!(
        Task::find_by_id(&pool, task.id)
            .await
            .expect("Query failed")
            .is_none()
    );
}
