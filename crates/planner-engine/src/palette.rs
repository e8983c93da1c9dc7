//! Color tokens for calendar events.
//!
//! The engine never interprets colors; it only picks the token the renderer
//! should use, from a table the caller supplies.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::{CalendarEvent, EventKind};

/// An opaque color reference (a theme key, a hex string, whatever the
/// renderer understands).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(pub String);

impl ColorToken {
    pub fn new(token: impl Into<String>) -> Self {
        ColorToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind colors plus optional per-course overrides for meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub meeting: ColorToken,
    pub deadline: ColorToken,
    pub task: ColorToken,
    pub course_overrides: BTreeMap<String, ColorToken>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            meeting: ColorToken::new("blue"),
            deadline: ColorToken::new("red"),
            task: ColorToken::new("green"),
            course_overrides: BTreeMap::new(),
        }
    }
}

impl Palette {
    /// The token to draw `event` with.
    ///
    /// Meetings use their course's override when one is configured. Tasks and
    /// deadlines always use the kind color, even when linked to a course.
    pub fn color_for(&self, event: &CalendarEvent) -> &ColorToken {
        match event {
            CalendarEvent::Meeting(m) => self
                .course_overrides
                .get(&m.course_id)
                .unwrap_or(&self.meeting),
            _ => self.kind_color(event.kind()),
        }
    }

    pub fn kind_color(&self, kind: EventKind) -> &ColorToken {
        match kind {
            EventKind::Meeting => &self.meeting,
            EventKind::Deadline => &self.deadline,
            EventKind::Task => &self.task,
        }
    }
}
