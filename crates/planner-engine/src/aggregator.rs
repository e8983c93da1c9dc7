//! Collects everything happening on a day, or on each day of a range.
//!
//! Results are recomputed from the catalog on every call. Ordering within a
//! day is deterministic: meetings, then deadlines, then tasks; within a kind,
//! by start time with untimed events first, and catalog order for ties.

use std::collections::BTreeMap;

use tracing::debug;

use crate::event::CalendarEvent;
use crate::exclusion::ExclusionRegistry;
use crate::model::{Course, Exclusion, PunctualItem};
use crate::projector::{project_punctual, project_recurring};
use crate::temporal::{month_grid_bounds, week_bounds, DateKey, WeekStartDay};

/// All events on `date`, sorted for display.
pub fn events_for_date(
    date: DateKey,
    courses: &[Course],
    items: &[PunctualItem],
    exclusions: &[Exclusion],
) -> Vec<CalendarEvent> {
    let registry = ExclusionRegistry::new(exclusions);
    collect_day(date, courses, items, &registry)
}

/// Events for every day in `[start, end]`, keyed by day.
///
/// Days with no events are left out. A reversed range yields an empty map.
pub fn events_for_range(
    start: DateKey,
    end: DateKey,
    courses: &[Course],
    items: &[PunctualItem],
    exclusions: &[Exclusion],
) -> BTreeMap<DateKey, Vec<CalendarEvent>> {
    let registry = ExclusionRegistry::new(exclusions);
    let days: BTreeMap<_, _> = start
        .days_through(end)
        .map(|date| (date, collect_day(date, courses, items, &registry)))
        .filter(|(_, events)| !events.is_empty())
        .collect();

    debug!(%start, %end, days = days.len(), "aggregated range");
    days
}

/// Events for the week containing `date`.
pub fn events_for_week(
    date: DateKey,
    week_start: WeekStartDay,
    courses: &[Course],
    items: &[PunctualItem],
    exclusions: &[Exclusion],
) -> BTreeMap<DateKey, Vec<CalendarEvent>> {
    match week_bounds(date, week_start) {
        Some((start, end)) => events_for_range(start, end, courses, items, exclusions),
        None => BTreeMap::new(),
    }
}

/// Events for every day shown by a month grid around `date`.
pub fn events_for_month_grid(
    date: DateKey,
    week_start: WeekStartDay,
    courses: &[Course],
    items: &[PunctualItem],
    exclusions: &[Exclusion],
) -> BTreeMap<DateKey, Vec<CalendarEvent>> {
    match month_grid_bounds(date, week_start) {
        Some((start, end)) => events_for_range(start, end, courses, items, exclusions),
        None => BTreeMap::new(),
    }
}

/// Sort a day's events in place: kind priority, then start time.
///
/// The sort is stable, so equal keys keep their projection order.
pub fn sort_for_display(events: &mut [CalendarEvent]) {
    events.sort_by_key(|event| (event.kind(), event.start()));
}

fn collect_day(
    date: DateKey,
    courses: &[Course],
    items: &[PunctualItem],
    registry: &ExclusionRegistry<'_>,
) -> Vec<CalendarEvent> {
    let mut events = project_recurring(courses, date, registry);
    events.extend(project_punctual(items, courses, date));
    sort_for_display(&mut events);
    events
}
