use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde_json::json;

use crate::domain::case::Case;
use crate::domain::pagination::Pagination;
use crate::sirius::client::PaginatedList;
use crate::sirius::{
    ApiResult, CaseReader, CaseWriter, Criteria, RequestContext, SiriusClient,
};

const LPA_CASE_TYPE: &str = "LPA";

#[derive(Debug, Serialize)]
struct AssignRequest {
    data: Vec<AssignRequestItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignRequestItem {
    assignee_id: i32,
    case_type: &'static str,
    id: i32,
}

/// Criteria used to find a pending case the assignee has not worked yet.
pub fn workable_case_criteria() -> Criteria {
    Criteria::default()
        .filter("status", "Pending")
        .filter("worked", "false")
        .limit(1)
        .page(1)
}

/// Restricts assignee case lists to active LPAs.
pub fn active_lpa_criteria(criteria: &Criteria) -> Criteria {
    criteria.filter("caseType", "lpa").filter("active", "true")
}

fn with_query(path: String, criteria: &Criteria) -> String {
    format!("{path}?{criteria}")
}

#[async_trait]
impl CaseReader for SiriusClient {
    async fn cases_by_assignee(
        &self,
        ctx: &RequestContext,
        assignee_id: i32,
        criteria: &Criteria,
    ) -> ApiResult<(Vec<Case>, Pagination)> {
        let path = with_query(
            format!("/api/v1/assignees/{assignee_id}/cases"),
            &active_lpa_criteria(criteria),
        );
        let list: PaginatedList<Case> = self.get_json(ctx, &path).await?;
        Ok(list.into_parts())
    }

    async fn cases_by_team(
        &self,
        ctx: &RequestContext,
        team_id: i32,
        criteria: &Criteria,
    ) -> ApiResult<(Vec<Case>, Pagination)> {
        let path = with_query(format!("/api/v1/teams/{team_id}/cases"), criteria);
        let list: PaginatedList<Case> = self.get_json(ctx, &path).await?;
        Ok(list.into_parts())
    }

    async fn cases_with_open_tasks_by_assignee(
        &self,
        ctx: &RequestContext,
        assignee_id: i32,
        page: usize,
    ) -> ApiResult<(Vec<Case>, Pagination)> {
        let path = with_query(
            format!("/api/v1/assignees/{assignee_id}/cases-with-open-tasks"),
            &Criteria::default().page(page),
        );
        let list: PaginatedList<Case> = self.get_json(ctx, &path).await?;
        Ok(list.into_parts())
    }

    async fn has_workable_case(&self, ctx: &RequestContext, assignee_id: i32) -> ApiResult<bool> {
        let (_, pagination) = self
            .cases_by_assignee(ctx, assignee_id, &workable_case_criteria())
            .await?;
        Ok(pagination.total_items > 0)
    }
}

#[async_trait]
impl CaseWriter for SiriusClient {
    async fn assign(
        &self,
        ctx: &RequestContext,
        case_ids: &[i32],
        assignee_id: i32,
    ) -> ApiResult<()> {
        let request = AssignRequest {
            data: case_ids
                .iter()
                .map(|&id| AssignRequestItem {
                    assignee_id,
                    case_type: LPA_CASE_TYPE,
                    id,
                })
                .collect(),
        };

        let case_list = case_ids
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join("+");
        let path = format!("/api/v1/users/{assignee_id}/cases/{case_list}");

        self.send(ctx, Method::PUT, &path, Some(&request)).await
    }

    async fn mark_worked(&self, ctx: &RequestContext, case_id: i32) -> ApiResult<()> {
        let body = json!({ "worked": true });
        self.send(ctx, Method::PUT, &format!("/api/v1/lpas/{case_id}"), Some(&body))
            .await
    }

    async fn request_next_cases(&self, ctx: &RequestContext) -> ApiResult<()> {
        self.send(ctx, Method::POST, "/api/v1/request-new-cases", None::<&()>)
            .await
    }
}
