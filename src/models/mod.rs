//! Application-level models that are not Sirius entities.

pub mod config;
