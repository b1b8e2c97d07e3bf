use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::case::Donor;
use crate::sirius::date;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i32,
    pub status: String,
    #[serde(rename(deserialize = "dueDate"), deserialize_with = "date::deserialize")]
    pub due_date: NaiveDate,
    pub name: String,
    #[serde(default, rename(deserialize = "caseItems"))]
    pub case_items: Vec<TaskCaseItem>,
}

impl Task {
    /// The case the task belongs to; Sirius always lists it first.
    pub fn case_item(&self) -> Option<&TaskCaseItem> {
        self.case_items.first()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TaskCaseItem {
    pub id: i32,
    #[serde(rename(deserialize = "uId"), alias = "uid")]
    pub uid: String,
    pub donor: Donor,
    #[serde(rename(deserialize = "caseSubtype"))]
    pub sub_type: String,
}
