use std::path::Path;

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;
use crate::models::application::Status;
use crate::store::uploads::resume_file_name;

/// Resume file types the form accepts, by extension.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["pdf", "docx"];

#[derive(Debug)]
pub struct ResumeUpload {
    pub file_name: String,
    pub contents: Bytes,
}

/// A parsed entry-form submission. Every text field is optional and may be
/// empty; only the status and the resume are checked.
#[derive(Debug)]
pub struct ApplicationForm {
    pub company: String,
    pub role: String,
    pub status: Status,
    pub contact: String,
    pub notes: String,
    pub resume: Option<ResumeUpload>,
}

impl ApplicationForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = ApplicationForm {
            company: String::new(),
            role: String::new(),
            status: Status::Applied,
            contact: String::new(),
            notes: String::new(),
            resume: None,
        };

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "company" => form.company = field.text().await?,
                "role" => form.role = field.text().await?,
                "contact" => form.contact = field.text().await?,
                "notes" => form.notes = field.text().await?,
                "status" => form.status = parse_status(&field.text().await?)?,
                "resume" => {
                    let file_name = field.file_name().unwrap_or("").to_string();
                    let contents = field.bytes().await?;
                    form.resume = resume_upload(&file_name, contents)?;
                }
                other => debug!("Ignoring unexpected form field '{other}'"),
            }
        }

        Ok(form)
    }
}

fn parse_status(raw: &str) -> Result<Status, AppError> {
    if raw.is_empty() {
        return Ok(Status::Applied);
    }
    raw.parse::<Status>()
        .map_err(|e| AppError::Validation(e.to_string()))
}

/// Turns the raw file part into an upload. A part with neither a name nor
/// content is what browsers send when no file was picked.
fn resume_upload(raw_name: &str, contents: Bytes) -> Result<Option<ResumeUpload>, AppError> {
    if raw_name.is_empty() && contents.is_empty() {
        return Ok(None);
    }

    let file_name = resume_file_name(raw_name)
        .ok_or_else(|| AppError::Validation("Resume upload has no usable file name".to_string()))?;

    if !is_accepted_resume(file_name) {
        return Err(AppError::Validation(format!(
            "Invalid file type for '{file_name}'. Only PDF and DOCX files are allowed"
        )));
    }

    Ok(Some(ResumeUpload {
        file_name: file_name.to_string(),
        contents,
    }))
}

pub fn is_accepted_resume(file_name: &str) -> bool {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    ACCEPTED_EXTENSIONS.contains(&extension.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_extensions() {
        assert!(is_accepted_resume("resume.pdf"));
        assert!(is_accepted_resume("Resume.PDF"));
        assert!(is_accepted_resume("cv.docx"));
        assert!(!is_accepted_resume("cv.doc"));
        assert!(!is_accepted_resume("notes.txt"));
        assert!(!is_accepted_resume("pdf"));
    }

    #[test]
    fn test_empty_status_defaults_to_applied() {
        assert_eq!(parse_status("").unwrap(), Status::Applied);
        assert_eq!(parse_status("Rejected").unwrap(), Status::Rejected);
        assert!(matches!(
            parse_status("Offer"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_no_file_picked_means_no_upload() {
        assert!(resume_upload("", Bytes::new()).unwrap().is_none());
    }

    #[test]
    fn test_upload_keeps_final_path_component() {
        let upload = resume_upload("C:\\docs\\resume.pdf", Bytes::from_static(b"%PDF"))
            .unwrap()
            .unwrap();
        assert_eq!(upload.file_name, "resume.pdf");
        assert_eq!(upload.contents, Bytes::from_static(b"%PDF"));
    }

    #[test]
    fn test_upload_rejects_other_types() {
        assert!(matches!(
            resume_upload("resume.txt", Bytes::from_static(b"hi")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            resume_upload("", Bytes::from_static(b"hi")),
            Err(AppError::Validation(_))
        ));
    }
}
