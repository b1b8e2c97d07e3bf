use serde::Deserialize;

use crate::forms::{FormError, parse_ids};

const CENTRAL_POT_CHOICE: &str = "central-pot";

/// Query of `GET /reassign` and body of `POST /reassign`.
#[derive(Debug, Default, Deserialize)]
pub struct ReassignForm {
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub selected: Vec<String>,
    pub reassign: Option<String>,
    pub caseworker: Option<String>,
    #[serde(default, rename = "xsrfToken")]
    pub xsrf_token: String,
}

/// Who the selected cases go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReassignTarget {
    CentralPot,
    Caseworker(i32),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReassignPayload {
    pub assignee_id: i32,
    pub selected: Vec<i32>,
    /// Absent when the form is only being displayed.
    pub target: Option<ReassignTarget>,
}

fn parse_assignee(raw: &str) -> Result<i32, FormError> {
    raw.trim()
        .parse()
        .map_err(|_| FormError::InvalidAssigneeId)
}

impl ReassignForm {
    /// Reads the assignee and selection without a reassignment target.
    pub fn into_selection(self) -> Result<ReassignPayload, FormError> {
        Ok(ReassignPayload {
            assignee_id: parse_assignee(&self.assignee)?,
            selected: parse_ids(&self.selected, FormError::InvalidCaseId)?,
            target: None,
        })
    }
}

impl TryFrom<ReassignForm> for ReassignPayload {
    type Error = FormError;

    fn try_from(form: ReassignForm) -> Result<Self, Self::Error> {
        let target = if form.reassign.as_deref() == Some(CENTRAL_POT_CHOICE) {
            ReassignTarget::CentralPot
        } else {
            ReassignTarget::Caseworker(parse_assignee(
                form.caseworker.as_deref().unwrap_or_default(),
            )?)
        };

        let mut payload = form.into_selection()?;
        payload.target = Some(target);
        Ok(payload)
    }
}
