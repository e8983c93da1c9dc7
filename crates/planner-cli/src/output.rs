//! JSON shapes printed by the CLI.

use std::collections::BTreeMap;

use planner_engine::{CalendarEvent, ColorToken, ColumnAssignment, DateKey, Exclusion, Palette};
use serde::Serialize;

/// An event plus the color token the renderer would draw it with.
#[derive(Debug, Serialize)]
pub struct ColoredEvent<'a> {
    #[serde(flatten)]
    pub event: &'a CalendarEvent,
    pub color: &'a ColorToken,
}

pub fn colored<'a>(palette: &'a Palette, events: &'a [CalendarEvent]) -> Vec<ColoredEvent<'a>> {
    events
        .iter()
        .map(|event| ColoredEvent {
            event,
            color: palette.color_for(event),
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct DayOutput<'a> {
    pub date: DateKey,
    pub events: Vec<ColoredEvent<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RangeOutput<'a> {
    pub start: DateKey,
    pub end: DateKey,
    pub days: BTreeMap<DateKey, Vec<ColoredEvent<'a>>>,
    /// Holidays falling inside the range, for the view's header strip.
    pub holidays: Vec<&'a Exclusion>,
}

#[derive(Debug, Serialize)]
pub struct LayoutOutput<'a> {
    pub date: DateKey,
    pub all_day: Vec<ColoredEvent<'a>>,
    pub timed: Vec<ColoredEvent<'a>>,
    pub columns: usize,
    pub assignments: &'a [ColumnAssignment],
}

#[derive(Debug, Serialize)]
pub struct OccursOutput<'a> {
    pub course_id: &'a str,
    pub date: DateKey,
    pub occurs: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_by: Option<&'a Exclusion>,
}
