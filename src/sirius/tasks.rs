use async_trait::async_trait;
use reqwest::Method;

use crate::domain::pagination::Pagination;
use crate::domain::task::Task;
use crate::sirius::client::PaginatedList;
use crate::sirius::{ApiResult, Criteria, RequestContext, SiriusClient, TaskReader, TaskWriter};

#[async_trait]
impl TaskReader for SiriusClient {
    async fn tasks_by_assignee(
        &self,
        ctx: &RequestContext,
        assignee_id: i32,
        criteria: &Criteria,
    ) -> ApiResult<(Vec<Task>, Pagination)> {
        let path = format!("/api/v1/assignees/{assignee_id}/tasks?{criteria}");
        let list: PaginatedList<Task> = self.get_json(ctx, &path).await?;
        Ok(list.into_parts())
    }
}

#[async_trait]
impl TaskWriter for SiriusClient {
    async fn request_next_task(&self, ctx: &RequestContext) -> ApiResult<()> {
        self.send(ctx, Method::POST, "/api/v1/request-new-task", None::<&()>)
            .await
    }

    async fn request_next_payment_task(&self, ctx: &RequestContext) -> ApiResult<()> {
        self.send(
            ctx,
            Method::POST,
            "/api/v1/request-new-payment-task",
            None::<&()>,
        )
        .await
    }
}
