use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::sirius::date;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub id: i32,
    #[serde(rename(deserialize = "uId"))]
    pub uid: String,
    pub donor: Donor,
    #[serde(rename(deserialize = "caseSubtype"))]
    pub sub_type: String,
    #[serde(
        rename(deserialize = "receiptDate"),
        deserialize_with = "date::deserialize"
    )]
    pub receipt_date: NaiveDate,
    pub status: String,
    #[serde(default, rename(deserialize = "taskCount"))]
    pub task_count: i32,
    #[serde(
        default,
        rename(deserialize = "workedDate"),
        deserialize_with = "date::deserialize_optional"
    )]
    pub worked_date: Option<NaiveDate>,
}

impl Case {
    /// Whether the case was marked as worked today.
    pub fn is_worked(&self) -> bool {
        self.is_worked_on(Utc::now().date_naive())
    }

    pub fn is_worked_on(&self, day: NaiveDate) -> bool {
        self.worked_date == Some(day)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Donor {
    pub id: i32,
    #[serde(rename(deserialize = "uId"))]
    pub uid: String,
    pub firstname: String,
    pub surname: String,
}

impl Donor {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.firstname, self.surname)
    }
}
