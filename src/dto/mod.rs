//! DTO modules that bridge services with templates.

pub mod cases;
pub mod tasks;
pub mod teams;
pub mod users;
