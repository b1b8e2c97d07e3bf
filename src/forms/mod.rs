//! Form and query-string definitions backing the dashboard routes.

use serde::Deserialize;
use thiserror::Error;
use validator::ValidationErrors;

pub mod cases;
pub mod feedback;
pub mod teams;
pub mod users;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid form data: {0}")]
    Malformed(#[from] serde_html_form::de::Error),

    #[error("invalid case id")]
    InvalidCaseId,

    #[error("invalid assignee id")]
    InvalidAssigneeId,
}

/// `?page=N` as sent by the pager links.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Requested page; anything missing or unparsable means the first page.
    pub fn page(&self) -> usize {
        parse_page(self.page.as_deref())
    }
}

pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|page| page.trim().parse::<usize>().ok())
        .filter(|&page| page > 0)
        .unwrap_or(1)
}

fn parse_ids(raw: &[String], error: FormError) -> Result<Vec<i32>, FormError> {
    let mut ids = Vec::with_capacity(raw.len());
    for value in raw {
        match value.trim().parse::<i32>() {
            Ok(id) => ids.push(id),
            Err(_) => return Err(error),
        }
    }
    Ok(ids)
}
