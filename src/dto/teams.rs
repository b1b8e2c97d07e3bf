use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::case::Case;
use crate::domain::team::Team;
use crate::forms::teams::TeamWorkInProgressFilters;
use crate::pagination::PaginationWindow;

/// Data required to render a team's work in progress.
#[derive(Debug, Serialize)]
pub struct TeamWorkInProgressPageData {
    pub team: Team,
    /// Teams offered in the team switcher.
    pub casework_teams: Vec<Team>,
    pub cases: Vec<Case>,
    pub pagination: Option<PaginationWindow>,
    pub worked_case_ids: Vec<i32>,
    pub filters: TeamWorkInProgressFilters,
    pub is_self_allocation_user: bool,
}

/// Pending cases waiting in the central pot.
#[derive(Debug, Serialize)]
pub struct CentralCasesPageData {
    pub cases: Vec<Case>,
    pub pagination: Option<PaginationWindow>,
    /// Receipt date of the longest waiting case.
    pub oldest_case_date: Option<NaiveDate>,
}
