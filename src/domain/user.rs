use serde::{Deserialize, Serialize};

pub const MANAGER_ROLE: &str = "Manager";
pub const SELF_ALLOCATION_USER_ROLE: &str = "Self Allocation User";
pub const SELF_ALLOCATION_TASK_USER_ROLE: &str = "Self Allocation Task User";
pub const CARD_PAYMENT_USER_ROLE: &str = "Card Payment User";

/// Mailbox of the shared "central pot" user that unallocated cases belong to.
pub const CENTRAL_POT_EMAIL: &str = "opgcasework@publicguardian.gov.uk";

/// The signed-in user as reported by `/users/current`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct MyDetails {
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub teams: Vec<MyDetailsTeam>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub suspended: bool,
}

impl MyDetails {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_manager(&self) -> bool {
        self.has_role(MANAGER_ROLE)
    }

    pub fn is_self_allocation_task_user(&self) -> bool {
        self.has_role(SELF_ALLOCATION_TASK_USER_ROLE)
    }

    pub fn is_card_payment_user(&self) -> bool {
        self.has_role(CARD_PAYMENT_USER_ROLE)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct MyDetailsTeam {
    pub id: i32,
    #[serde(rename(deserialize = "displayName"))]
    pub display_name: String,
}

/// A caseworker that cases and tasks can be assigned to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Assignee {
    pub id: i32,
    #[serde(rename(deserialize = "displayName"))]
    pub display_name: String,
    #[serde(default)]
    pub teams: Vec<MyDetailsTeam>,
}

/// Result of looking a user up by email.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct User {
    pub id: i32,
}
