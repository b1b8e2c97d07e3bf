use serde::Serialize;

/// Paging metadata reported by Sirius alongside a list payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total_items: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
}
