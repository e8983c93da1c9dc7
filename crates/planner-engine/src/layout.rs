//! Column layout for overlapping timed events.
//!
//! Assigns each timed event of a day to a display column so that no two
//! events sharing a column overlap, using as few columns as possible. This is
//! interval partitioning: placing events in order of start time into the
//! first column that has already finished needs exactly as many columns as
//! the largest set of events that are all in progress at the same instant.
//!
//! Intervals are half-open `[start, end)`, so an event ending at 10:00 and
//! one starting at 10:00 can share a column.

use serde::Serialize;
use tracing::debug;

use crate::event::CalendarEvent;
use crate::separator::separate_all_day;

/// Assumed length of an event that has a start but no end.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Where one event sits in the day's column layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnAssignment {
    /// Position of the event in the slice passed to [`layout_overlaps`].
    pub index: usize,
    pub event_id: String,
    pub column: usize,
    /// Total columns used by the whole day.
    pub columns: usize,
}

/// The occupied span of an event in minutes after midnight, `[start, end)`.
///
/// Events with no start time have no span and take no part in layout. A
/// missing end falls back to [`DEFAULT_DURATION_MINUTES`]. The end may run
/// past midnight.
pub fn occupied_span(event: &CalendarEvent) -> Option<(u32, u32)> {
    let start = event.start()?.minutes();
    let end = event
        .end()
        .map(|t| t.minutes())
        .filter(|end| *end > start)
        .unwrap_or(start + DEFAULT_DURATION_MINUTES);
    Some((start, end))
}

/// Assign columns to a day's timed events.
///
/// Returns one assignment per placeable event, in input order. Events without
/// a start time are skipped. Empty input gives an empty result.
pub fn layout_overlaps(events: &[CalendarEvent]) -> Vec<ColumnAssignment> {
    let mut spans: Vec<(usize, u32, u32)> = events
        .iter()
        .enumerate()
        .filter_map(|(index, event)| occupied_span(event).map(|(s, e)| (index, s, e)))
        .collect();
    spans.sort_by_key(|&(index, start, end)| (start, end, index));

    // End minute of the latest event placed in each column.
    let mut column_ends: Vec<u32> = Vec::new();
    let mut placed: Vec<(usize, usize)> = Vec::with_capacity(spans.len());

    for &(index, start, end) in &spans {
        let column = match column_ends.iter().position(|&busy_until| busy_until <= start) {
            Some(free) => free,
            None => {
                column_ends.push(0);
                column_ends.len() - 1
            }
        };
        column_ends[column] = column_ends[column].max(end);
        placed.push((index, column));
    }

    let columns = column_ends.len();
    placed.sort_unstable_by_key(|&(index, _)| index);

    debug!(
        events = events.len(),
        placed = placed.len(),
        columns,
        "computed overlap layout"
    );

    placed
        .into_iter()
        .map(|(index, column)| ColumnAssignment {
            index,
            event_id: events[index].id().to_string(),
            column,
            columns,
        })
        .collect()
}

/// Everything a day view needs: the all-day strip plus the column layout of
/// the timed events.
///
/// `timed` can hold events that have no start time (an item due at midnight
/// shows on the previous day with no start). Those get no entry in
/// `assignments`, so `assignments.len()` may be less than `timed.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayLayout {
    pub all_day: Vec<CalendarEvent>,
    pub timed: Vec<CalendarEvent>,
    pub columns: usize,
    /// Indices refer to `timed`.
    pub assignments: Vec<ColumnAssignment>,
}

/// Separate a day's events and lay out the timed ones.
pub fn layout_day(events: &[CalendarEvent]) -> DayLayout {
    let split = separate_all_day(events);
    let assignments = layout_overlaps(&split.timed);
    let columns = assignments.first().map_or(0, |a| a.columns);
    DayLayout {
        all_day: split.all_day,
        timed: split.timed,
        columns,
        assignments,
    }
}
