//! Entities returned by Sirius and shown on the dashboard pages.

pub mod case;
pub mod pagination;
pub mod task;
pub mod team;
pub mod user;
