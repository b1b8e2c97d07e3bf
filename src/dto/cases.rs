//! DTOs used by the caseworker case lists.

use serde::Serialize;

use crate::domain::case::Case;
use crate::pagination::PaginationWindow;

/// Data required to render the pending cases page.
#[derive(Debug, Serialize)]
pub struct PendingCasesPageData {
    pub cases: Vec<Case>,
    pub pagination: Option<PaginationWindow>,
    /// Whether a worked case is waiting, which disables "request next cases".
    pub has_workable_case: bool,
    /// Cases already marked as worked today.
    pub worked_case_ids: Vec<i32>,
    pub can_request_case: bool,
}

/// Every case assigned to the signed-in user, whatever its status.
#[derive(Debug, Serialize)]
pub struct AllCasesPageData {
    pub cases: Vec<Case>,
    pub pagination: Option<PaginationWindow>,
    pub has_workable_case: bool,
    pub can_request_case: bool,
}

#[derive(Debug, Serialize)]
pub struct OpenTaskCasesPageData {
    pub cases: Vec<Case>,
    pub pagination: Option<PaginationWindow>,
}
