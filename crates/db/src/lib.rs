use std::{str::FromStr, time::Duration};

use sqlx::{
    Error, Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use tracing::info;

pub mod models;
pub mod validation;

/// Maximum connections in the pool.
/// SQLite benefits from limited connections due to single-writer model.
const MAX_CONNECTIONS: u32 = 10;

/// Minimum idle connections to maintain.
const MIN_CONNECTIONS: u32 = 2;

/// Timeout for establishing the initial store connection at startup, and for
/// acquiring a pooled connection thereafter.
const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct DBService {
    pub pool: Pool<Sqlite>,
}

impl DBService {
    /// Connect to the store named by `database_url`, apply pending
    /// migrations, and verify connectivity with a ping. Callers must treat
    /// failure as fatal: a process that cannot reach its store does not serve.
    pub async fn new(database_url: &str) -> Result<DBService, Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS));

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .min_connections(MIN_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        // Ping before handing the pool out; a pool we cannot query is useless.
        sqlx::query("SELECT 1").fetch_one(&pool).await?;

        info!("Connected to task store");
        Ok(DBService { pool })
    }
}
