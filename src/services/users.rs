//! Manager views of an individual caseworker.

use crate::domain::user::{Assignee, CENTRAL_POT_EMAIL};
use crate::dto::users::{ReassignPageData, UserCasesPageData, UserTasksPageData};
use crate::forms::users::{ReassignForm, ReassignPayload, ReassignTarget};
use crate::pagination::PaginationWindow;
use crate::services::cases::{all_cases_criteria, pending_cases_criteria};
use crate::services::{ServiceResult, ensure_manager};
use crate::sirius::{CaseReader, CaseWriter, Criteria, RequestContext, TeamReader, UserReader};

const CENTRAL_POT_NAME: &str = "Central Pot";

pub async fn load_user_tasks<R>(
    client: &R,
    ctx: &RequestContext,
    user_id: i32,
    page: usize,
) -> ServiceResult<UserTasksPageData>
where
    R: CaseReader + UserReader + ?Sized,
{
    ensure_manager(client, ctx).await?;

    let assignee = client.user(ctx, user_id).await?;

    let (cases, pagination) = client
        .cases_with_open_tasks_by_assignee(ctx, assignee.id, page)
        .await?;

    Ok(UserTasksPageData {
        assignee,
        cases,
        pagination: PaginationWindow::new(Some(pagination)),
    })
}

async fn user_cases<R>(
    client: &R,
    ctx: &RequestContext,
    user_id: i32,
    criteria: &Criteria,
) -> ServiceResult<UserCasesPageData>
where
    R: CaseReader + UserReader + ?Sized,
{
    ensure_manager(client, ctx).await?;

    let assignee = client.user(ctx, user_id).await?;
    let (cases, pagination) = client.cases_by_assignee(ctx, user_id, criteria).await?;

    Ok(UserCasesPageData {
        team: assignee.teams.first().cloned(),
        assignee,
        cases,
        pagination: PaginationWindow::new(Some(pagination)),
    })
}

/// A caseworker's pending cases, oldest receipt first.
pub async fn load_user_pending_cases<R>(
    client: &R,
    ctx: &RequestContext,
    user_id: i32,
    page: usize,
) -> ServiceResult<UserCasesPageData>
where
    R: CaseReader + UserReader + ?Sized,
{
    user_cases(client, ctx, user_id, &pending_cases_criteria(page)).await
}

/// Every case assigned to a caseworker, oldest receipt first.
pub async fn load_user_all_cases<R>(
    client: &R,
    ctx: &RequestContext,
    user_id: i32,
    page: usize,
) -> ServiceResult<UserCasesPageData>
where
    R: CaseReader + UserReader + ?Sized,
{
    user_cases(client, ctx, user_id, &all_cases_criteria(page)).await
}

async fn reassign_page<R>(
    client: &R,
    ctx: &RequestContext,
    payload: &ReassignPayload,
) -> ServiceResult<ReassignPageData>
where
    R: TeamReader + UserReader + ?Sized,
{
    ensure_manager(client, ctx).await?;

    let assignee = client.user(ctx, payload.assignee_id).await?;

    let team_members = match assignee.teams.first() {
        Some(team) => client.team(ctx, team.id).await?.members,
        None => Vec::new(),
    };

    Ok(ReassignPageData {
        assignee,
        selected: payload.selected.clone(),
        team_members,
        reassigned_to: None,
    })
}

/// Shows the reassignment form for the selected cases.
pub async fn load_reassign<R>(
    client: &R,
    ctx: &RequestContext,
    form: ReassignForm,
) -> ServiceResult<ReassignPageData>
where
    R: TeamReader + UserReader + ?Sized,
{
    let payload = form.into_selection()?;
    reassign_page(client, ctx, &payload).await
}

/// Moves the selected cases to the central pot or another caseworker.
pub async fn reassign<R>(
    client: &R,
    ctx: &RequestContext,
    form: ReassignForm,
) -> ServiceResult<ReassignPageData>
where
    R: CaseWriter + TeamReader + UserReader + ?Sized,
{
    let payload = ReassignPayload::try_from(form)?;
    let mut page = reassign_page(client, ctx, &payload).await?;

    let reassign_to = match payload.target {
        Some(ReassignTarget::CentralPot) => {
            let central_pot = client.user_by_email(ctx, CENTRAL_POT_EMAIL).await?;
            Assignee {
                id: central_pot.id,
                display_name: CENTRAL_POT_NAME.to_string(),
                teams: Vec::new(),
            }
        }
        Some(ReassignTarget::Caseworker(id)) => client.user(ctx, id).await?,
        None => return Ok(page),
    };

    client
        .assign(ctx, &payload.selected, reassign_to.id)
        .await?;

    log::info!(
        "Reassigned {} case(s) from user {} to user {}",
        payload.selected.len(),
        page.assignee.id,
        reassign_to.id
    );

    page.reassigned_to = Some(reassign_to);
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::{Team, TeamMember};
    use crate::domain::user::{MyDetailsTeam, User};
    use crate::services::ServiceError;
    use crate::services::test_support::{case, caseworker, manager, pagination};
    use crate::sirius::mock::MockSiriusClient;

    fn assignee(id: i32) -> Assignee {
        Assignee {
            id,
            display_name: format!("User {id}"),
            teams: vec![MyDetailsTeam {
                id: 66,
                display_name: "Casework Team 1".to_string(),
            }],
        }
    }

    fn team() -> Team {
        Team {
            id: 66,
            display_name: "Casework Team 1".to_string(),
            members: vec![
                TeamMember {
                    id: 12,
                    display_name: "User 12".to_string(),
                },
                TeamMember {
                    id: 47,
                    display_name: "User 47".to_string(),
                },
            ],
        }
    }

    fn form(raw: &str) -> ReassignForm {
        serde_html_form::from_str(raw).unwrap()
    }

    fn manager_with_assignee() -> MockSiriusClient {
        let mut client = MockSiriusClient::new();
        client.expect_my_details().returning(|_| Ok(manager()));
        client
            .expect_user()
            .returning(|_, id| Ok(assignee(id)));
        client
            .expect_team()
            .withf(|_, team_id| *team_id == 66)
            .returning(|_, _| Ok(team()));
        client
    }

    #[tokio::test]
    async fn user_tasks_for_manager() {
        let mut client = MockSiriusClient::new();
        client.expect_my_details().returning(|_| Ok(manager()));
        client
            .expect_user()
            .withf(|_, id| *id == 12)
            .times(1)
            .returning(|_, id| Ok(assignee(id)));
        client
            .expect_cases_with_open_tasks_by_assignee()
            .withf(|_, id, page| *id == 12 && *page == 2)
            .times(1)
            .returning(|_, _, _| Ok((vec![case(3)], pagination(26))));

        let data = load_user_tasks(&client, &RequestContext::default(), 12, 2)
            .await
            .unwrap();

        assert_eq!(data.assignee.id, 12);
        assert_eq!(data.cases.len(), 1);
    }

    #[tokio::test]
    async fn user_pending_cases_for_manager() {
        let mut client = MockSiriusClient::new();
        client.expect_my_details().returning(|_| Ok(manager()));
        client
            .expect_user()
            .withf(|_, id| *id == 12)
            .times(1)
            .returning(|_, id| Ok(assignee(id)));
        client
            .expect_cases_by_assignee()
            .withf(|_, id, criteria| {
                *id == 12
                    && criteria.encode()
                        == "filter=status%3APending&page=2&sort=receiptDate%3Aasc"
            })
            .times(1)
            .returning(|_, _, _| Ok((vec![case(3)], pagination(26))));

        let data = load_user_pending_cases(&client, &RequestContext::default(), 12, 2)
            .await
            .unwrap();

        assert_eq!(data.assignee.display_name, "User 12");
        assert_eq!(data.team.unwrap().display_name, "Casework Team 1");
        assert_eq!(data.cases.len(), 1);
    }

    #[tokio::test]
    async fn user_all_cases_without_team() {
        let mut client = MockSiriusClient::new();
        client.expect_my_details().returning(|_| Ok(manager()));
        client.expect_user().returning(|_, id| {
            Ok(Assignee {
                teams: Vec::new(),
                ..assignee(id)
            })
        });
        client
            .expect_cases_by_assignee()
            .withf(|_, id, criteria| {
                *id == 12 && criteria.encode() == "page=1&sort=receiptDate%3Aasc"
            })
            .times(1)
            .returning(|_, _, _| Ok((vec![case(3), case(4)], pagination(2))));

        let data = load_user_all_cases(&client, &RequestContext::default(), 12, 1)
            .await
            .unwrap();

        assert!(data.team.is_none());
        assert_eq!(data.cases.len(), 2);
    }

    #[tokio::test]
    async fn user_cases_forbidden_for_caseworkers() {
        let mut client = MockSiriusClient::new();
        client.expect_my_details().returning(|_| Ok(caseworker()));
        client.expect_user().times(0);
        client.expect_cases_by_assignee().times(0);

        let result = load_user_all_cases(&client, &RequestContext::default(), 12, 1).await;
        assert!(matches!(result, Err(ServiceError::Forbidden)));
    }

    #[tokio::test]
    async fn user_tasks_forbidden_for_caseworkers() {
        let mut client = MockSiriusClient::new();
        client.expect_my_details().returning(|_| Ok(caseworker()));
        client.expect_user().times(0);

        let result = load_user_tasks(&client, &RequestContext::default(), 12, 1).await;
        assert!(matches!(result, Err(ServiceError::Forbidden)));
    }

    #[tokio::test]
    async fn reassign_form_lists_team_members() {
        let mut client = manager_with_assignee();
        client.expect_assign().times(0);

        let data = load_reassign(
            &client,
            &RequestContext::default(),
            form("assignee=47&selected=1&selected=2"),
        )
        .await
        .unwrap();

        assert_eq!(data.assignee.id, 47);
        assert_eq!(data.selected, vec![1, 2]);
        assert_eq!(data.team_members.len(), 2);
        assert!(data.reassigned_to.is_none());
    }

    #[tokio::test]
    async fn reassign_without_team_has_no_members() {
        let mut client = MockSiriusClient::new();
        client.expect_my_details().returning(|_| Ok(manager()));
        client.expect_user().returning(|_, id| {
            Ok(Assignee {
                id,
                display_name: "Loner".to_string(),
                teams: Vec::new(),
            })
        });
        client.expect_team().times(0);

        let data = load_reassign(&client, &RequestContext::default(), form("assignee=47"))
            .await
            .unwrap();
        assert!(data.team_members.is_empty());
    }

    #[tokio::test]
    async fn reassign_to_central_pot() {
        let mut client = manager_with_assignee();
        client
            .expect_user_by_email()
            .withf(|_, email| email == CENTRAL_POT_EMAIL)
            .times(1)
            .returning(|_, _| Ok(User { id: 99 }));
        client
            .expect_assign()
            .withf(|_, ids, assignee_id| ids.to_vec() == vec![1, 2] && *assignee_id == 99)
            .times(1)
            .returning(|_, _, _| Ok(()));

        let data = reassign(
            &client,
            &RequestContext::default(),
            form("assignee=47&selected=1&selected=2&reassign=central-pot"),
        )
        .await
        .unwrap();

        let reassigned_to = data.reassigned_to.unwrap();
        assert_eq!(reassigned_to.id, 99);
        assert_eq!(reassigned_to.display_name, "Central Pot");
    }

    #[tokio::test]
    async fn reassign_to_caseworker() {
        let mut client = manager_with_assignee();
        client.expect_user_by_email().times(0);
        client
            .expect_assign()
            .withf(|_, ids, assignee_id| ids.to_vec() == vec![5] && *assignee_id == 12)
            .times(1)
            .returning(|_, _, _| Ok(()));

        let data = reassign(
            &client,
            &RequestContext::default(),
            form("assignee=47&selected=5&reassign=caseworker&caseworker=12"),
        )
        .await
        .unwrap();

        assert_eq!(data.reassigned_to.unwrap().display_name, "User 12");
    }

    #[tokio::test]
    async fn reassign_rejects_bad_form_before_calling_sirius() {
        let mut client = MockSiriusClient::new();
        client.expect_my_details().times(0);

        let result = reassign(&client, &RequestContext::default(), form("assignee=x")).await;
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
