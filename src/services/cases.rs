//! Caseworker views of their own cases.

use crate::domain::case::Case;
use crate::domain::user::SELF_ALLOCATION_USER_ROLE;
use crate::dto::cases::{AllCasesPageData, OpenTaskCasesPageData, PendingCasesPageData};
use crate::forms::cases::{MarkWorkedForm, MarkWorkedPayload};
use crate::pagination::PaginationWindow;
use crate::services::ServiceResult;
use crate::sirius::{CaseReader, CaseWriter, Criteria, RequestContext, SortOrder, UserReader};

pub(crate) fn worked_today(cases: &[Case]) -> Vec<i32> {
    cases
        .iter()
        .filter(|case| case.is_worked())
        .map(|case| case.id)
        .collect()
}

pub fn pending_cases_criteria(page: usize) -> Criteria {
    Criteria::default()
        .filter("status", "Pending")
        .page(page)
        .sort("receiptDate", SortOrder::Ascending)
}

pub fn all_cases_criteria(page: usize) -> Criteria {
    Criteria::default()
        .page(page)
        .sort("receiptDate", SortOrder::Ascending)
}

/// Loads the signed-in user's pending cases, oldest receipt first.
pub async fn load_pending_cases<R>(
    client: &R,
    ctx: &RequestContext,
    page: usize,
) -> ServiceResult<PendingCasesPageData>
where
    R: CaseReader + UserReader + ?Sized,
{
    let me = client.my_details(ctx).await?;

    let (cases, pagination) = client
        .cases_by_assignee(ctx, me.id, &pending_cases_criteria(page))
        .await?;

    let has_workable_case = client.has_workable_case(ctx, me.id).await?;

    Ok(PendingCasesPageData {
        worked_case_ids: worked_today(&cases),
        cases,
        pagination: PaginationWindow::new(Some(pagination)),
        has_workable_case,
        can_request_case: me.has_role(SELF_ALLOCATION_USER_ROLE),
    })
}

/// Loads every case assigned to the signed-in user, oldest receipt first.
pub async fn load_all_cases<R>(
    client: &R,
    ctx: &RequestContext,
    page: usize,
) -> ServiceResult<AllCasesPageData>
where
    R: CaseReader + UserReader + ?Sized,
{
    let me = client.my_details(ctx).await?;

    let (cases, pagination) = client
        .cases_by_assignee(ctx, me.id, &all_cases_criteria(page))
        .await?;

    let has_workable_case = client.has_workable_case(ctx, me.id).await?;

    Ok(AllCasesPageData {
        cases,
        pagination: PaginationWindow::new(Some(pagination)),
        has_workable_case,
        can_request_case: me.has_role(SELF_ALLOCATION_USER_ROLE),
    })
}

pub async fn load_open_task_cases<R>(
    client: &R,
    ctx: &RequestContext,
    page: usize,
) -> ServiceResult<OpenTaskCasesPageData>
where
    R: CaseReader + UserReader + ?Sized,
{
    let me = client.my_details(ctx).await?;

    let (cases, pagination) = client
        .cases_with_open_tasks_by_assignee(ctx, me.id, page)
        .await?;

    Ok(OpenTaskCasesPageData {
        cases,
        pagination: PaginationWindow::new(Some(pagination)),
    })
}

/// Marks every ticked case as worked, stopping at the first failure.
pub async fn mark_worked<R>(client: &R, ctx: &RequestContext, form: MarkWorkedForm) -> ServiceResult<()>
where
    R: CaseWriter + ?Sized,
{
    let payload = MarkWorkedPayload::try_from(form)?;

    for case_id in payload.case_ids {
        client.mark_worked(ctx, case_id).await?;
    }

    Ok(())
}

pub async fn request_next_cases<R>(client: &R, ctx: &RequestContext) -> ServiceResult<()>
where
    R: CaseWriter + ?Sized,
{
    client.request_next_cases(ctx).await?;
    log::info!("Requested next cases");
    Ok(())
}
