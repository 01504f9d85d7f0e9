use askama::Template;

use crate::board::Board;
use crate::models::application::Status;

/// The single page: entry form on top, board underneath.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub board: Board,
    /// Set after a redirect from a successful submit.
    pub added: bool,
    pub statuses: [Status; 3],
    pub max_upload_mb: usize,
}

impl IndexPage {
    pub fn new(board: Board, added: bool, max_upload_bytes: usize) -> Self {
        IndexPage {
            board,
            added,
            statuses: Status::ALL,
            max_upload_mb: max_upload_bytes / (1024 * 1024),
        }
    }
}
