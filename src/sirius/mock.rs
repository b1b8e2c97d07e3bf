//! Mock Sirius client for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::case::Case;
use crate::domain::pagination::Pagination;
use crate::domain::task::Task;
use crate::domain::team::Team;
use crate::domain::user::{Assignee, MyDetails, User};
use crate::sirius::{
    ApiResult, CaseReader, CaseWriter, Criteria, FeedbackWriter, RequestContext, TaskReader,
    TaskWriter, TeamReader, UserReader,
};

mock! {
    pub SiriusClient {}

    #[async_trait]
    impl CaseReader for SiriusClient {
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
        async fn has_workable_case(&self, ctx: &RequestContext, assignee_id: i32) -> ApiResult<bool>;
    }

    #[async_trait]
    impl CaseWriter for SiriusClient {
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
    impl TaskReader for SiriusClient {
        async fn tasks_by_assignee(
            &self,
            ctx: &RequestContext,
            assignee_id: i32,
            criteria: &Criteria,
        ) -> ApiResult<(Vec<Task>, Pagination)>;
    }

    #[async_trait]
    impl TaskWriter for SiriusClient {
        async fn request_next_task(&self, ctx: &RequestContext) -> ApiResult<()>;
        async fn request_next_payment_task(&self, ctx: &RequestContext) -> ApiResult<()>;
    }

    #[async_trait]
    impl UserReader for SiriusClient {
        async fn my_details(&self, ctx: &RequestContext) -> ApiResult<MyDetails>;
        async fn user(&self, ctx: &RequestContext, user_id: i32) -> ApiResult<Assignee>;
        async fn user_by_email(&self, ctx: &RequestContext, email: &str) -> ApiResult<User>;
    }

    #[async_trait]
    impl TeamReader for SiriusClient {
        async fn teams(&self, ctx: &RequestContext) -> ApiResult<Vec<Team>>;
        async fn team(&self, ctx: &RequestContext, team_id: i32) -> ApiResult<Team>;
    }

    #[async_trait]
    impl FeedbackWriter for SiriusClient {
        async fn feedback(&self, ctx: &RequestContext, message: &str) -> ApiResult<()>;
    }
}
