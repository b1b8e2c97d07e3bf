use serde::Serialize;

use crate::domain::task::Task;
use crate::pagination::PaginationWindow;

#[derive(Debug, Serialize)]
pub struct TasksDashboardPageData {
    pub title: String,
    pub tasks: Vec<Task>,
    pub pagination: Option<PaginationWindow>,
    pub can_request_task: bool,
}

#[derive(Debug, Serialize)]
pub struct CardPaymentsPageData {
    pub tasks: Vec<Task>,
    pub pagination: Option<PaginationWindow>,
}
