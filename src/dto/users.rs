//! DTOs for the manager views of a single caseworker.

use serde::Serialize;

use crate::domain::case::Case;
use crate::domain::team::TeamMember;
use crate::domain::user::{Assignee, MyDetailsTeam};
use crate::pagination::PaginationWindow;

#[derive(Debug, Serialize)]
pub struct UserTasksPageData {
    pub assignee: Assignee,
    pub cases: Vec<Case>,
    pub pagination: Option<PaginationWindow>,
}

/// A caseworker's case list as seen by their manager.
#[derive(Debug, Serialize)]
pub struct UserCasesPageData {
    pub assignee: Assignee,
    pub team: Option<MyDetailsTeam>,
    pub cases: Vec<Case>,
    pub pagination: Option<PaginationWindow>,
}

#[derive(Debug, Serialize)]
pub struct ReassignPageData {
    pub assignee: Assignee,
    /// Case ids carried over from the caseworker's list.
    pub selected: Vec<i32>,
    pub team_members: Vec<TeamMember>,
    /// Set once the cases have been moved.
    pub reassigned_to: Option<Assignee>,
}
