//! Error types for planner-engine parsing entry points.
//!
//! The calendar operations themselves never fail: malformed catalog data
//! degrades to fewer or plainer events. Only explicit parsing of caller input
//! (dates, times, catalog documents) reports errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid week start: {0}")]
    InvalidWeekStart(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
