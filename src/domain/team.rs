use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Team {
    pub id: i32,
    #[serde(rename(deserialize = "displayName"))]
    pub display_name: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct TeamMember {
    pub id: i32,
    #[serde(rename(deserialize = "displayName"))]
    pub display_name: String,
}

/// Finds a team by id.
pub fn find_team(teams: &[Team], id: i32) -> Option<&Team> {
    teams.iter().find(|team| team.id == id)
}
