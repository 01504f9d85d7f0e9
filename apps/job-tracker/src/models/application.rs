use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// Where an application currently stands. The set is fixed; there are no
/// custom statuses and no transitions once a record is saved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Status {
    Applied,
    Interview,
    Rejected,
}

impl Status {
    /// Board column order.
    pub const ALL: [Status; 3] = [Status::Applied, Status::Interview, Status::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Applied => "Applied",
            Status::Interview => "Interview",
            Status::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown application status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A stored application row.
///
/// `status` is kept as the raw column text: rows inserted outside the form
/// may carry a value that is not a [`Status`], and the board has to see them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Application {
    pub id: i64,
    pub company: String,
    pub role: String,
    pub status: String,
    pub contact: String,
    pub notes: String,
    /// Empty when no resume was attached.
    pub resume_path: String,
    pub date_added: DateTime<Utc>,
}

impl Application {
    /// The parsed status, or `None` for a value outside the fixed set.
    pub fn status(&self) -> Option<Status> {
        self.status.parse().ok()
    }

    pub fn has_resume(&self) -> bool {
        !self.resume_path.is_empty()
    }
}

/// Fields supplied by the submitter. `id` and `date_added` are assigned by
/// the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub company: String,
    pub role: String,
    pub status: Status,
    pub contact: String,
    pub notes: String,
    pub resume_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str) -> Application {
        Application {
            id: 1,
            company: "Acme".to_string(),
            role: "Intern".to_string(),
            status: status.to_string(),
            contact: String::new(),
            notes: String::new(),
            resume_path: String::new(),
            date_added: Utc::now(),
        }
    }

    #[test]
    fn test_status_parses_display_text() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>(), Ok(status));
        }
    }

    #[test]
    fn test_status_parse_is_case_sensitive() {
        assert_eq!(
            "applied".parse::<Status>(),
            Err(UnknownStatus("applied".to_string()))
        );
    }

    #[test]
    fn test_column_order() {
        assert_eq!(
            Status::ALL,
            [Status::Applied, Status::Interview, Status::Rejected]
        );
    }

    #[test]
    fn test_row_with_unknown_status() {
        assert_eq!(row("Ghosted").status(), None);
        assert_eq!(row("Interview").status(), Some(Status::Interview));
    }

    #[test]
    fn test_has_resume() {
        let mut app = row("Applied");
        assert!(!app.has_resume());
        app.resume_path = "resumes/cv.pdf".to_string();
        assert!(app.has_resume());
    }
}
