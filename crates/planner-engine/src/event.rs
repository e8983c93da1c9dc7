//! Normalized calendar events produced by the engine.
//!
//! Each kind carries only the fields meaningful to it: a class meeting always
//! has a slot and a location, an item has a due time and a completion flag.

use serde::{Deserialize, Serialize};

use crate::temporal::TimeOfDay;

/// Event kinds, declared in display priority order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Meeting,
    Deadline,
    Task,
}

/// One occurrence of a course meeting pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingEvent {
    pub id: String,
    pub course_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// `None` when the pattern's times could not be read.
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A task or deadline placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEvent {
    pub id: String,
    pub item_id: String,
    pub title: String,
    /// The time-of-day read from the due timestamp, `None` if unreadable.
    pub due_time: Option<TimeOfDay>,
    /// Display start: the due time, except midnight which has none.
    pub start: Option<TimeOfDay>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    /// Code of the linked course, when the link resolves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
}

impl ItemEvent {
    /// True for items with no specific time chosen: the 23:59 sentinel, or a
    /// due time that could not be read.
    pub fn is_all_day(&self) -> bool {
        self.due_time
            .is_none_or(|t| t == TimeOfDay::ALL_DAY_SENTINEL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalendarEvent {
    Meeting(MeetingEvent),
    Task(ItemEvent),
    Deadline(ItemEvent),
}

impl CalendarEvent {
    pub fn id(&self) -> &str {
        match self {
            CalendarEvent::Meeting(m) => &m.id,
            CalendarEvent::Task(i) | CalendarEvent::Deadline(i) => &i.id,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            CalendarEvent::Meeting(_) => EventKind::Meeting,
            CalendarEvent::Task(_) => EventKind::Task,
            CalendarEvent::Deadline(_) => EventKind::Deadline,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CalendarEvent::Meeting(m) => &m.title,
            CalendarEvent::Task(i) | CalendarEvent::Deadline(i) => &i.title,
        }
    }

    pub fn start(&self) -> Option<TimeOfDay> {
        match self {
            CalendarEvent::Meeting(m) => m.start,
            CalendarEvent::Task(i) | CalendarEvent::Deadline(i) => i.start,
        }
    }

    /// Items never carry an end; only meetings do.
    pub fn end(&self) -> Option<TimeOfDay> {
        match self {
            CalendarEvent::Meeting(m) => m.end,
            CalendarEvent::Task(_) | CalendarEvent::Deadline(_) => None,
        }
    }

    pub fn course_id(&self) -> Option<&str> {
        match self {
            CalendarEvent::Meeting(m) => Some(&m.course_id),
            CalendarEvent::Task(i) | CalendarEvent::Deadline(i) => i.course_id.as_deref(),
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            CalendarEvent::Meeting(m) => m.location.as_deref(),
            CalendarEvent::Task(_) | CalendarEvent::Deadline(_) => None,
        }
    }

    pub fn as_item(&self) -> Option<&ItemEvent> {
        match self {
            CalendarEvent::Meeting(_) => None,
            CalendarEvent::Task(i) | CalendarEvent::Deadline(i) => Some(i),
        }
    }
}
