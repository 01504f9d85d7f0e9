use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Schema for the single `applications` table. `IF NOT EXISTS` keeps it
/// idempotent; `AUTOINCREMENT` guarantees ids are never reused.
pub const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS applications (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        company TEXT NOT NULL DEFAULT '',
        role TEXT NOT NULL DEFAULT '',
        status TEXT NOT NULL,
        contact TEXT NOT NULL DEFAULT '',
        notes TEXT NOT NULL DEFAULT '',
        resume_path TEXT NOT NULL DEFAULT '',
        date_added TEXT NOT NULL
    )
"#;

/// Opens the SQLite database file, creating it if missing.
///
/// The pool holds a single connection: one local user, one writer.
pub async fn create_pool(database_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    info!("Opening SQLite database at {}", database_path.display());

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Creates the `applications` table when absent. Safe to call on every start.
pub async fn initialize_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}
