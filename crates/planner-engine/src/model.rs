//! Catalog records consumed by the engine.
//!
//! These are owned and edited by the planner's forms; the engine only reads
//! them. Times and due timestamps are kept exactly as entered and parsed on
//! read, so a malformed value degrades a single event instead of rejecting
//! the whole catalog.

use std::collections::BTreeMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::aggregator;
use crate::error::PlannerError;
use crate::event::CalendarEvent;
use crate::palette::Palette;
use crate::temporal::{split_timestamp, DateKey, TimeOfDay, WeekStartDay};

/// A weekly class meeting slot within a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingPattern {
    pub days: Vec<Weekday>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl MeetingPattern {
    pub fn meets_on(&self, weekday: Weekday) -> bool {
        self.days.contains(&weekday)
    }

    /// The parsed `(start, end)` pair, or `None` when either side is
    /// unreadable or the slot does not end after it starts.
    pub fn times(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        let start: TimeOfDay = self.start_time.parse().ok()?;
        let end: TimeOfDay = self.end_time.parse().ok()?;
        (start < end).then_some((start, end))
    }
}

/// A course: the planner's only recurring entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// First day of term; the course never meets before it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateKey>,
    /// Last day of term; the course never meets after it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateKey>,
    #[serde(default)]
    pub meetings: Vec<MeetingPattern>,
}

/// Distinguishes the two punctual item types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Task,
    Deadline,
}

/// A one-off task or deadline anchored to a due timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunctualItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub kind: ItemKind,
    /// Local wall-clock timestamp. Items without one never reach the calendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
}

impl PunctualItem {
    /// Calendar day and time-of-day of the due timestamp.
    pub fn due_parts(&self) -> Option<(DateKey, Option<TimeOfDay>)> {
        self.due.as_deref().and_then(split_timestamp)
    }
}

/// A date on which course meetings are suppressed.
///
/// `course_id == None` is a holiday that cancels every course; otherwise only
/// that course's session is cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    pub date: DateKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Exclusion {
    pub fn is_global(&self) -> bool {
        self.course_id.is_none()
    }
}

/// Everything the engine needs to answer calendar queries, as one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub items: Vec<PunctualItem>,
    #[serde(default)]
    pub exclusions: Vec<Exclusion>,
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub week_start: WeekStartDay,
}

impl Catalog {
    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, PlannerError> {
        serde_json::from_str(json).map_err(|e| PlannerError::InvalidCatalog(e.to_string()))
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn events_for_date(&self, date: DateKey) -> Vec<CalendarEvent> {
        aggregator::events_for_date(date, &self.courses, &self.items, &self.exclusions)
    }

    pub fn events_for_range(
        &self,
        start: DateKey,
        end: DateKey,
    ) -> BTreeMap<DateKey, Vec<CalendarEvent>> {
        aggregator::events_for_range(start, end, &self.courses, &self.items, &self.exclusions)
    }

    pub fn events_for_week(
        &self,
        date: DateKey,
        week_start: WeekStartDay,
    ) -> BTreeMap<DateKey, Vec<CalendarEvent>> {
        aggregator::events_for_week(
            date,
            week_start,
            &self.courses,
            &self.items,
            &self.exclusions,
        )
    }

    pub fn events_for_month_grid(
        &self,
        date: DateKey,
        week_start: WeekStartDay,
    ) -> BTreeMap<DateKey, Vec<CalendarEvent>> {
        aggregator::events_for_month_grid(
            date,
            week_start,
            &self.courses,
            &self.items,
            &self.exclusions,
        )
    }
}
