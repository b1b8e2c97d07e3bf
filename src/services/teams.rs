use crate::domain::team::{Team, find_team};
use crate::domain::user::{CENTRAL_POT_EMAIL, SELF_ALLOCATION_USER_ROLE};
use crate::dto::teams::{CentralCasesPageData, TeamWorkInProgressPageData};
use crate::forms::teams::{TeamWorkInProgressFilters, TeamWorkInProgressQuery};
use crate::pagination::PaginationWindow;
use crate::services::cases::worked_today;
use crate::services::{ServiceError, ServiceResult, ensure_manager};
use crate::sirius::{CaseReader, Criteria, RequestContext, SortOrder, TeamReader, UserReader};

const CASEWORK_TEAM_PREFIX: &str = "Casework Team";

/// Loads a team's cases for a manager, narrowed by the query's filters.
pub async fn load_team_work_in_progress<R>(
    client: &R,
    ctx: &RequestContext,
    team_id: i32,
    query: &TeamWorkInProgressQuery,
) -> ServiceResult<TeamWorkInProgressPageData>
where
    R: CaseReader + TeamReader + UserReader + ?Sized,
{
    let me = ensure_manager(client, ctx).await?;

    let teams = client.teams(ctx).await?;

    let casework_teams: Vec<Team> = teams
        .iter()
        .filter(|team| team.display_name.starts_with(CASEWORK_TEAM_PREFIX))
        .cloned()
        .collect();

    let team = find_team(&teams, team_id)
        .cloned()
        .ok_or(ServiceError::NotFound)?;

    let filters = TeamWorkInProgressFilters::from(query);
    let criteria = filters.criteria().page(query.page());

    let (cases, pagination) = client.cases_by_team(ctx, team_id, &criteria).await?;

    Ok(TeamWorkInProgressPageData {
        worked_case_ids: worked_today(&cases),
        team,
        casework_teams,
        cases,
        pagination: PaginationWindow::new(Some(pagination))
            .map(|window| window.with_query(&filters.encode())),
        filters,
        is_self_allocation_user: me.has_role(SELF_ALLOCATION_USER_ROLE),
    })
}

/// Loads the pending cases in the central pot along with the oldest receipt date.
pub async fn load_central_cases<R>(
    client: &R,
    ctx: &RequestContext,
    page: usize,
) -> ServiceResult<CentralCasesPageData>
where
    R: CaseReader + UserReader + ?Sized,
{
    ensure_manager(client, ctx).await?;

    let central_pot = client.user_by_email(ctx, CENTRAL_POT_EMAIL).await?;
    let pending = Criteria::default().filter("status", "Pending");

    let (cases, pagination) = client
        .cases_by_assignee(ctx, central_pot.id, &pending.page(page))
        .await?;

    let (oldest, _) = client
        .cases_by_assignee(
            ctx,
            central_pot.id,
            &pending.sort("receiptDate", SortOrder::Ascending).limit(1),
        )
        .await?;

    Ok(CentralCasesPageData {
        cases,
        pagination: PaginationWindow::new(Some(pagination)),
        oldest_case_date: oldest.first().map(|case| case.receipt_date),
    })
}
