//! Durable storage for applications: the `applications` table plus the
//! directory uploaded resumes are written into.
//!
//! `Store` is a cheap-to-clone handle. It is opened once at startup, injected
//! into the router state, and closed after the server stops.

pub mod uploads;

use std::path::{Path, PathBuf};

use chrono::Utc;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{info, warn};

use crate::db::{create_pool, initialize_schema};
use crate::models::application::{Application, NewApplication};
use uploads::{write_resume, SavedResume};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
    resume_dir: PathBuf,
}

impl Store {
    /// Opens the database (creating the file if needed) and initializes it.
    pub async fn open(database_path: &Path, resume_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let pool = create_pool(database_path).await?;
        let store = Store {
            pool,
            resume_dir: resume_dir.into(),
        };
        store.initialize().await?;
        Ok(store)
    }

    /// Ensures the table and the upload directory exist. Idempotent.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        initialize_schema(&self.pool).await?;
        tokio::fs::create_dir_all(&self.resume_dir)
            .await
            .map_err(|source| StoreError::FileWrite {
                path: self.resume_dir.clone(),
                source,
            })?;
        Ok(())
    }

    /// Appends one application stamped with the current time and returns its id.
    pub async fn create(&self, new: &NewApplication) -> Result<i64, StoreError> {
        let id = sqlx::query(
            r#"
            INSERT INTO applications
                (company, role, status, contact, notes, resume_path, date_added)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&new.company)
        .bind(&new.role)
        .bind(new.status.as_str())
        .bind(&new.contact)
        .bind(&new.notes)
        .bind(&new.resume_path)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        info!("Created application {id} ({} / {})", new.company, new.status);
        Ok(id)
    }

    /// Every stored application in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Application>, StoreError> {
        Ok(sqlx::query_as::<_, Application>(
            r#"
            SELECT id, company, role, status, contact, notes, resume_path, date_added
            FROM applications
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    /// Writes an uploaded resume under its file name, replacing any namesake.
    pub async fn save_resume(&self, file_name: &str, contents: &[u8]) -> Result<SavedResume, StoreError> {
        let saved = write_resume(&self.resume_dir, file_name, contents)
            .await
            .map_err(|source| StoreError::FileWrite {
                path: self.resume_dir.join(file_name),
                source,
            })?;
        if saved.replaced {
            warn!("Overwrote existing resume {}", saved.path.display());
        }
        Ok(saved)
    }

    /// Removes a resume written for a submission whose row never landed.
    /// Files that replaced an earlier upload stay, since older rows point at them.
    pub async fn discard_resume(&self, saved: &SavedResume) {
        if saved.replaced {
            return;
        }
        match tokio::fs::remove_file(&saved.path).await {
            Ok(()) => info!("Removed orphaned resume {}", saved.path.display()),
            Err(e) => warn!("Could not remove orphaned resume {}: {e}", saved.path.display()),
        }
    }

    pub fn resume_dir(&self) -> &Path {
        &self.resume_dir
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Store closed");
    }
}
