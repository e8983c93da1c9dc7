//! Splits a day's events into the all-day strip and the timed grid.

use serde::Serialize;

use crate::event::CalendarEvent;

/// Events split by display region. Input order is kept within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Separated {
    pub all_day: Vec<CalendarEvent>,
    pub timed: Vec<CalendarEvent>,
}

/// Separate all-day items from timed events.
///
/// Only tasks and deadlines can be all-day (see [`ItemEvent::is_all_day`]);
/// meetings always belong to the timed grid.
///
/// [`ItemEvent::is_all_day`]: crate::event::ItemEvent::is_all_day
pub fn separate_all_day(events: &[CalendarEvent]) -> Separated {
    let (all_day, timed) = events
        .iter()
        .cloned()
        .partition(|event| event.as_item().is_some_and(|item| item.is_all_day()));
    Separated { all_day, timed }
}
