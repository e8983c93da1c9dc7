//! Turns catalog entities active on a day into [`CalendarEvent`]s.
//!
//! # Midnight rollback
//!
//! An item due at exactly `00:00` is shown at the end of the *previous* day:
//! "due midnight Tuesday" means "finish it Monday night". Such an item is
//! emitted for `due - 1 day` and never for its stored due day, and carries no
//! start time.

use crate::event::{CalendarEvent, ItemEvent, MeetingEvent};
use crate::exclusion::ExclusionRegistry;
use crate::model::{Course, ItemKind, PunctualItem};
use crate::recurrence::occurs_on;
use crate::temporal::{DateKey, TimeOfDay};

/// One event per meeting pattern that falls on `date`, for every course that
/// meets that day. Courses keep catalog order, patterns keep course order.
pub fn project_recurring(
    courses: &[Course],
    date: DateKey,
    exclusions: &ExclusionRegistry<'_>,
) -> Vec<CalendarEvent> {
    let weekday = date.weekday();
    courses
        .iter()
        .filter(|course| occurs_on(course, date, exclusions))
        .flat_map(|course| {
            course
                .meetings
                .iter()
                .enumerate()
                .filter(move |(_, pattern)| pattern.meets_on(weekday))
                .map(move |(index, pattern)| {
                    let times = pattern.times();
                    CalendarEvent::Meeting(MeetingEvent {
                        id: format!("meeting:{}:{}", course.id, index),
                        course_id: course.id.clone(),
                        title: course.name.clone(),
                        code: course.code.clone(),
                        start: times.map(|(start, _)| start),
                        end: times.map(|(_, end)| end),
                        location: pattern.location.clone(),
                    })
                })
        })
        .collect()
}

/// Tasks and deadlines due on `date`, honouring the midnight rollback.
///
/// `courses` is only consulted to label an item with its course code; an item
/// pointing at an unknown course is still emitted.
pub fn project_punctual(
    items: &[PunctualItem],
    courses: &[Course],
    date: DateKey,
) -> Vec<CalendarEvent> {
    let next_day = date.succ();
    items
        .iter()
        .filter_map(|item| {
            let (due_day, due_time) = item.due_parts()?;
            let lands_on_date = if due_time == Some(TimeOfDay::MIDNIGHT) {
                Some(due_day) == next_day
            } else {
                due_day == date
            };
            lands_on_date.then(|| project_item(item, due_time, courses))
        })
        .collect()
}

fn project_item(
    item: &PunctualItem,
    due_time: Option<TimeOfDay>,
    courses: &[Course],
) -> CalendarEvent {
    let course_code = item
        .course_id
        .as_deref()
        .and_then(|id| courses.iter().find(|c| c.id == id))
        .and_then(|c| c.code.clone());

    let prefix = match item.kind {
        ItemKind::Task => "task",
        ItemKind::Deadline => "deadline",
    };
    let event = ItemEvent {
        id: format!("{}:{}", prefix, item.id),
        item_id: item.id.clone(),
        title: item.title.clone(),
        due_time,
        start: due_time.filter(|t| *t != TimeOfDay::MIDNIGHT),
        completed: item.completed,
        course_id: item.course_id.clone(),
        course_code,
    };

    match item.kind {
        ItemKind::Task => CalendarEvent::Task(event),
        ItemKind::Deadline => CalendarEvent::Deadline(event),
    }
}
