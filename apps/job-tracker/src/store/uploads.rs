use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

/// A resume written into the upload directory.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedResume {
    pub path: PathBuf,
    /// A file of the same name was already present and has been overwritten.
    pub replaced: bool,
}

impl SavedResume {
    /// The value recorded as `resume_path` on the application.
    pub fn recorded_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// Reduces a client-supplied file name to its final path component.
///
/// Browsers on some platforms send the full local path, with either
/// separator. Returns `None` when nothing usable is left.
pub fn resume_file_name(raw: &str) -> Option<&str> {
    let name = raw.rsplit(|c: char| c == '/' || c == '\\').next()?;
    match name {
        "" | "." | ".." => None,
        name => Some(name),
    }
}

/// Writes `contents` verbatim to `dir/file_name`, overwriting any existing
/// file with that name.
pub async fn write_resume(dir: &Path, file_name: &str, contents: &[u8]) -> io::Result<SavedResume> {
    let path = dir.join(file_name);
    let replaced = fs::try_exists(&path).await.unwrap_or(false);
    fs::write(&path, contents).await?;
    Ok(SavedResume { path, replaced })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_is_kept() {
        assert_eq!(resume_file_name("resume.pdf"), Some("resume.pdf"));
    }

    #[test]
    fn test_directories_are_stripped() {
        assert_eq!(resume_file_name("../../etc/cv.docx"), Some("cv.docx"));
        assert_eq!(
            resume_file_name("C:\\Users\\me\\My Resume.pdf"),
            Some("My Resume.pdf")
        );
    }

    #[test]
    fn test_unusable_names_rejected() {
        assert_eq!(resume_file_name(""), None);
        assert_eq!(resume_file_name("uploads/"), None);
        assert_eq!(resume_file_name(".."), None);
        assert_eq!(resume_file_name("a/."), None);
    }

    #[tokio::test]
    async fn test_write_reports_replacement() {
        let dir = tempfile::tempdir().unwrap();

        let first = write_resume(dir.path(), "resume.pdf", b"one").await.unwrap();
        assert!(!first.replaced);

        let second = write_resume(dir.path(), "resume.pdf", b"two").await.unwrap();
        assert!(second.replaced);
        assert_eq!(first.path, second.path);
        assert_eq!(std::fs::read(&second.path).unwrap(), b"two");
    }
}
