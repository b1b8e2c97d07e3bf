//! Client for the Sirius case-management API.
//!
//! [`SiriusClient`] implements every reader/writer trait below. Services
//! depend on the traits only, so they can be exercised against
//! [`mock::MockSiriusClient`] in tests.

use async_trait::async_trait;

use crate::domain::case::Case;
use crate::domain::pagination::Pagination;
use crate::domain::task::Task;
use crate::domain::team::Team;
use crate::domain::user::{Assignee, MyDetails, User};

pub mod cases;
pub mod client;
pub mod criteria;
pub mod date;
pub mod errors;
pub mod feedback;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod tasks;
pub mod teams;
pub mod users;

pub use client::{RequestContext, SessionCookie, SiriusClient};
pub use criteria::{Criteria, SortOrder};
pub use errors::{ApiError, ApiResult, StatusError};

#[async_trait]
pub trait CaseReader {
    async fn cases_by_assignee(
        &self,
        ctx: &RequestContext,
        assignee_id: i32,
        criteria: &Criteria,
    ) -> ApiResult<(Vec<Case>, Pagination)>;

    async fn cases_by_team(
        &self,
        ctx: &RequestContext,
        team_id: i32,
        criteria: &Criteria,
    ) -> ApiResult<(Vec<Case>, Pagination)>;

    async fn cases_with_open_tasks_by_assignee(
        &self,
        ctx: &RequestContext,
        assignee_id: i32,
        page: usize,
    ) -> ApiResult<(Vec<Case>, Pagination)>;

    /// Whether the assignee still has a pending case they have not worked.
    async fn has_workable_case(&self, ctx: &RequestContext, assignee_id: i32) -> ApiResult<bool>;
}

#[async_trait]
pub trait CaseWriter {
    async fn assign(
        &self,
        ctx: &RequestContext,
        case_ids: &[i32],
        assignee_id: i32,
    ) -> ApiResult<()>;

    async fn mark_worked(&self, ctx: &RequestContext, case_id: i32) -> ApiResult<()>;

    async fn request_next_cases(&self, ctx: &RequestContext) -> ApiResult<()>;
}

#[async_trait]
pub trait TaskReader {
    async fn tasks_by_assignee(
        &self,
        ctx: &RequestContext,
        assignee_id: i32,
        criteria: &Criteria,
    ) -> ApiResult<(Vec<Task>, Pagination)>;
}

#[async_trait]
pub trait TaskWriter {
    async fn request_next_task(&self, ctx: &RequestContext) -> ApiResult<()>;

    async fn request_next_payment_task(&self, ctx: &RequestContext) -> ApiResult<()>;
}

#[async_trait]
pub trait UserReader {
    async fn my_details(&self, ctx: &RequestContext) -> ApiResult<MyDetails>;

    async fn user(&self, ctx: &RequestContext, user_id: i32) -> ApiResult<Assignee>;

    async fn user_by_email(&self, ctx: &RequestContext, email: &str) -> ApiResult<User>;
}

#[async_trait]
pub trait TeamReader {
    /// All teams without a `teamType`.
    async fn teams(&self, ctx: &RequestContext) -> ApiResult<Vec<Team>>;

    async fn team(&self, ctx: &RequestContext, team_id: i32) -> ApiResult<Team>;
}

#[async_trait]
pub trait FeedbackWriter {
    async fn feedback(&self, ctx: &RequestContext, message: &str) -> ApiResult<()>;
}
