//! Task dashboards of the signed-in user.

use crate::domain::user::MyDetails;
use crate::dto::tasks::{CardPaymentsPageData, TasksDashboardPageData};
use crate::pagination::PaginationWindow;
use crate::services::ServiceResult;
use crate::sirius::{Criteria, RequestContext, SortOrder, TaskReader, TaskWriter, UserReader};

const DEFAULT_DASHBOARD_TITLE: &str = "Tasks Dashboard";

/// Open tasks, soonest due first.
pub fn open_tasks_criteria() -> Criteria {
    Criteria::default()
        .filter("status", "Not started")
        .sort("dueDate", SortOrder::Ascending)
        .sort("name", SortOrder::Descending)
}

/// "Card Payment Team" becomes "Card Payment Dashboard".
fn dashboard_title(me: &MyDetails) -> String {
    match me.teams.first() {
        Some(team) => {
            let name = team.display_name.replace("Team", "");
            format!("{} Dashboard", name.trim_matches(' '))
        }
        None => DEFAULT_DASHBOARD_TITLE.to_string(),
    }
}

pub async fn load_tasks_dashboard<R>(
    client: &R,
    ctx: &RequestContext,
) -> ServiceResult<TasksDashboardPageData>
where
    R: TaskReader + UserReader + ?Sized,
{
    let me = client.my_details(ctx).await?;

    let (tasks, pagination) = client
        .tasks_by_assignee(ctx, me.id, &open_tasks_criteria())
        .await?;

    Ok(TasksDashboardPageData {
        title: dashboard_title(&me),
        tasks,
        pagination: PaginationWindow::new(Some(pagination)),
        can_request_task: me.is_self_allocation_task_user(),
    })
}

pub async fn load_card_payments<R>(
    client: &R,
    ctx: &RequestContext,
) -> ServiceResult<CardPaymentsPageData>
where
    R: TaskReader + UserReader + ?Sized,
{
    let me = client.my_details(ctx).await?;

    let (tasks, pagination) = client
        .tasks_by_assignee(ctx, me.id, &open_tasks_criteria())
        .await?;

    Ok(CardPaymentsPageData {
        tasks,
        pagination: PaginationWindow::new(Some(pagination)),
    })
}

pub async fn request_next_task<R>(client: &R, ctx: &RequestContext) -> ServiceResult<()>
where
    R: TaskWriter + ?Sized,
{
    client.request_next_task(ctx).await?;
    Ok(())
}

pub async fn request_next_payment_task<R>(client: &R, ctx: &RequestContext) -> ServiceResult<()>
where
    R: TaskWriter + ?Sized,
{
    client.request_next_payment_task(ctx).await?;
    Ok(())
}
