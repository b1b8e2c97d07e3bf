use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::domain::pagination::Pagination;

/// Number of page links that fit in the pager.
pub const MAX_VISIBLE_PAGES: usize = 7;

/// Page numbers to render, `None` standing for an ellipsis.
///
/// Short lists are returned whole; longer ones keep the first, previous,
/// current, next and last pages and collapse the rest.
fn get_pages(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(Some).collect();
    }

    let mut pages = Vec::with_capacity(MAX_VISIBLE_PAGES);

    if current_page > 1 {
        let prev = current_page - 1;
        if prev > 2 {
            pages.extend([Some(1), None, Some(prev)]);
        } else if prev == 2 {
            pages.extend([Some(1), Some(2)]);
        } else {
            pages.push(Some(1));
        }
    }

    pages.push(Some(current_page));

    if current_page < total_pages {
        let next = current_page + 1;
        if next < total_pages - 1 {
            pages.extend([Some(next), None, Some(total_pages)]);
        } else if next == total_pages - 1 {
            pages.extend([Some(next), Some(total_pages)]);
        } else {
            pages.push(Some(total_pages));
        }
    }

    pages
}

/// Render model of a [`Pagination`]: item range, neighbours and page links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationWindow {
    query: String,
    total_items: usize,
    current_page: usize,
    total_pages: usize,
    page_size: usize,
}

impl From<Pagination> for PaginationWindow {
    fn from(raw: Pagination) -> Self {
        Self {
            query: "?".to_string(),
            total_items: raw.total_items,
            current_page: raw.current_page,
            total_pages: raw.total_pages,
            page_size: raw.page_size,
        }
    }
}

impl PaginationWindow {
    /// Returns `None` when there is no pagination to show.
    pub fn new(raw: Option<Pagination>) -> Option<Self> {
        raw.map(Self::from)
    }

    /// Makes page links carry `query` (an already encoded query string).
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = if query.is_empty() {
            "?".to_string()
        } else {
            format!("?{query}&")
        };
        self
    }

    /// Prefix for page links, ready to have `page=N` appended.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// First item shown, 1-based.
    pub fn start(&self) -> usize {
        self.current_page.saturating_sub(1) * self.page_size + 1
    }

    /// Last item shown; below [`Self::start`] when there is nothing to show.
    pub fn end(&self) -> usize {
        (self.current_page * self.page_size).min(self.total_items)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn previous_page(&self) -> usize {
        self.current_page.saturating_sub(1)
    }

    pub fn has_next(&self) -> bool {
        self.total_items > self.current_page * self.page_size
    }

    pub fn next_page(&self) -> usize {
        self.current_page + 1
    }

    pub fn pages(&self) -> Vec<Option<usize>> {
        get_pages(self.total_pages, self.current_page)
    }
}

impl Serialize for PaginationWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PaginationWindow", 12)?;
        state.serialize_field("query", &self.query)?;
        state.serialize_field("total_items", &self.total_items)?;
        state.serialize_field("current_page", &self.current_page)?;
        state.serialize_field("total_pages", &self.total_pages)?;
        state.serialize_field("page_size", &self.page_size)?;
        state.serialize_field("start", &self.start())?;
        state.serialize_field("end", &self.end())?;
        state.serialize_field("has_previous", &self.has_previous())?;
        state.serialize_field("previous_page", &self.previous_page())?;
        state.serialize_field("has_next", &self.has_next())?;
        state.serialize_field("next_page", &self.next_page())?;
        state.serialize_field("pages", &self.pages())?;
        state.end()
    }
}
