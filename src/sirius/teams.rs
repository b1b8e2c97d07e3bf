use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::team::{Team, TeamMember};
use crate::sirius::{ApiResult, RequestContext, SiriusClient, TeamReader};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiTeam {
    id: i32,
    display_name: String,
    #[serde(default)]
    team_type: Option<serde_json::Value>,
    #[serde(default)]
    members: Vec<ApiTeamMember>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiTeamMember {
    id: i32,
    display_name: String,
}

impl From<ApiTeam> for Team {
    fn from(team: ApiTeam) -> Self {
        Team {
            id: team.id,
            display_name: team.display_name,
            members: team
                .members
                .into_iter()
                .map(|member| TeamMember {
                    id: member.id,
                    display_name: member.display_name,
                })
                .collect(),
        }
    }
}

/// Keeps only the LPA casework teams, i.e. those Sirius reports without a `teamType`.
fn lpa_teams(teams: Vec<ApiTeam>) -> Vec<Team> {
    teams
        .into_iter()
        .filter(|team| team.team_type.is_none())
        .map(Team::from)
        .collect()
}

#[async_trait]
impl TeamReader for SiriusClient {
    async fn teams(&self, ctx: &RequestContext) -> ApiResult<Vec<Team>> {
        let teams: Vec<ApiTeam> = self.get_json(ctx, "/api/v1/teams").await?;
        Ok(lpa_teams(teams))
    }

    async fn team(&self, ctx: &RequestContext, team_id: i32) -> ApiResult<Team> {
        let team: ApiTeam = self
            .get_json(ctx, &format!("/api/v1/teams/{team_id}"))
            .await?;
        Ok(team.into())
    }
}
