// Board: the status-partitioned read view of every stored application.
// Rebuilt from a full fetch on each render; nothing here is cached.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::models::application::{Application, Status};
use crate::store::uploads::resume_file_name;

/// Notes longer than this (in characters) are cut on the card.
pub const NOTES_EXCERPT_CHARS: usize = 100;
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub id: i64,
    pub title: String,
    pub contact: String,
    pub notes_excerpt: String,
    /// File name under the upload directory, when a resume was attached.
    pub resume_file: Option<String>,
    pub date_added: DateTime<Utc>,
}

impl Card {
    pub fn from_application(app: &Application) -> Self {
        Card {
            id: app.id,
            title: format!("{} — {}", app.company, app.role),
            contact: app.contact.clone(),
            notes_excerpt: notes_excerpt(&app.notes),
            resume_file: resume_file_name(&app.resume_path).map(String::from),
            date_added: app.date_added,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub status: Status,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Board {
    /// Always one column per status, in [`Status::ALL`] order.
    pub columns: Vec<Column>,
    /// Rows whose status is outside the fixed set. Shown in no column.
    pub unrecognized: Vec<Application>,
}

impl Board {
    pub fn from_applications(applications: Vec<Application>) -> Self {
        let mut columns: Vec<Column> = Status::ALL
            .into_iter()
            .map(|status| Column {
                status,
                cards: Vec::new(),
            })
            .collect();
        let mut unrecognized = Vec::new();

        for app in applications {
            let slot = app
                .status()
                .and_then(|s| columns.iter().position(|c| c.status == s));
            match slot {
                Some(index) => columns[index].cards.push(Card::from_application(&app)),
                None => {
                    warn!(
                        "Application {} has unrecognized status '{}'; left off the board",
                        app.id, app.status
                    );
                    unrecognized.push(app);
                }
            }
        }

        Board {
            columns,
            unrecognized,
        }
    }

    pub fn column(&self, status: Status) -> Option<&Column> {
        self.columns.iter().find(|c| c.status == status)
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    /// True when there is nothing stored at all, recognized or not.
    pub fn is_empty(&self) -> bool {
        self.card_count() == 0 && self.unrecognized.is_empty()
    }
}

/// First [`NOTES_EXCERPT_CHARS`] characters of `notes`, with `...` appended
/// only when something was cut.
pub fn notes_excerpt(notes: &str) -> String {
    match notes.char_indices().nth(NOTES_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &notes[..cut]),
        None => notes.to_string(),
    }
}
