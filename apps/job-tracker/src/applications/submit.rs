use tracing::warn;

use crate::applications::form::ApplicationForm;
use crate::errors::AppError;
use crate::models::application::NewApplication;
use crate::store::uploads::SavedResume;
use crate::store::Store;

/// Saves one form submission: resume file first, then the row.
///
/// A failed file write aborts before anything reaches the database. A failed
/// row write removes the resume it just created so no orphan is left behind.
pub async fn submit_application(store: &Store, form: ApplicationForm) -> Result<i64, AppError> {
    let saved = match &form.resume {
        Some(upload) => Some(store.save_resume(&upload.file_name, &upload.contents).await?),
        None => None,
    };

    let new = NewApplication {
        company: form.company,
        role: form.role,
        status: form.status,
        contact: form.contact,
        notes: form.notes,
        resume_path: saved
            .as_ref()
            .map(SavedResume::recorded_path)
            .unwrap_or_default(),
    };

    match store.create(&new).await {
        Ok(id) => Ok(id),
        Err(e) => {
            if let Some(saved) = &saved {
                warn!("Row write failed after saving {}", saved.path.display());
                store.discard_resume(saved).await;
            }
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applications::form::ResumeUpload;
    use crate::models::application::Status;
    use bytes::Bytes;

    fn form(resume: Option<(&str, &'static str)>) -> ApplicationForm {
        ApplicationForm {
            company: "Acme".to_string(),
            role: "Intern".to_string(),
            status: Status::Applied,
            contact: "hr@acme.com".to_string(),
            notes: "short note".to_string(),
            resume: resume.map(|(name, contents)| ResumeUpload {
                file_name: name.to_string(),
                contents: Bytes::from_static(contents.as_bytes()),
            }),
        }
    }

    #[tokio::test]
    async fn test_submit_without_resume() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(&dir.path().join("t.db"), dir.path().join("resumes"))
            .await
            .unwrap();

        let id = submit_application(&store, form(None)).await.unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].resume_path, "");
    }

    #[tokio::test]
    async fn test_submit_records_resume_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(&dir.path().join("t.db"), dir.path().join("resumes"))
            .await
            .unwrap();

        submit_application(&store, form(Some(("resume.pdf", "%PDF-1.7"))))
            .await
            .unwrap();

        let all = store.list_all().await.unwrap();
        assert!(all[0].resume_path.ends_with("resume.pdf"));
        assert_eq!(std::fs::read(&all[0].resume_path).unwrap(), b"%PDF-1.7");
    }

    #[tokio::test]
    async fn test_failed_row_write_removes_new_resume() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(&dir.path().join("t.db"), dir.path().join("resumes"))
            .await
            .unwrap();
        store.close().await;

        let err = submit_application(&store, form(Some(("orphan.pdf", "%PDF"))))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        assert!(!dir.path().join("resumes").join("orphan.pdf").exists());
    }

    #[tokio::test]
    async fn test_unwritable_upload_dir_aborts_before_row_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(&dir.path().join("t.db"), dir.path().join("resumes"))
            .await
            .unwrap();
        std::fs::remove_dir_all(dir.path().join("resumes")).unwrap();

        let err = submit_application(&store, form(Some(("resume.pdf", "%PDF"))))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::FileWrite(_)));
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
