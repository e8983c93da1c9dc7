use std::collections::BTreeSet;

use chrono::Weekday;
use planner_engine::layout::occupied_span;
use planner_engine::{
    events_for_date, layout_overlaps, occurs_on, separate_all_day, CalendarEvent, Course,
    DateKey, Exclusion, ExclusionRegistry, ItemEvent, ItemKind, MeetingEvent, MeetingPattern,
    PunctualItem, TimeOfDay,
};
use proptest::prelude::*;

fn time(minutes: u32) -> TimeOfDay {
    TimeOfDay::from_hm(minutes / 60, minutes % 60).unwrap()
}

fn meeting(index: usize, start: u32, end: u32) -> CalendarEvent {
    CalendarEvent::Meeting(MeetingEvent {
        id: format!("meeting:c{index}:0"),
        course_id: format!("c{index}"),
        title: format!("Course {index}"),
        code: None,
        start: Some(time(start)),
        end: Some(time(end)),
        location: None,
    })
}

fn item_event(index: usize, due: u32) -> ItemEvent {
    ItemEvent {
        id: format!("task:t{index}"),
        item_id: format!("t{index}"),
        title: format!("Item {index}"),
        due_time: Some(time(due)),
        start: Some(time(due)),
        completed: false,
        course_id: None,
        course_code: None,
    }
}

fn task(index: usize, start: u32) -> CalendarEvent {
    CalendarEvent::Task(item_event(index, start))
}

fn deadline(index: usize, due: u32) -> CalendarEvent {
    let mut event = item_event(index, due);
    event.id = format!("deadline:t{index}");
    CalendarEvent::Deadline(event)
}

/// A mix of meetings with explicit ends and end-less tasks.
fn timed_events() -> impl Strategy<Value = Vec<CalendarEvent>> {
    prop::collection::vec((1u32..1380, 1u32..240, any::<bool>()), 0..40).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (start, len, is_task))| {
                if is_task {
                    task(i, start)
                } else {
                    meeting(i, start, (start + len).min(1439))
                }
            })
            .collect()
    })
}

/// The largest number of spans in progress at one instant. For intervals the
/// maximum is always reached at some span's start.
fn max_simultaneous(spans: &[(u32, u32)]) -> usize {
    spans
        .iter()
        .map(|&(t, _)| spans.iter().filter(|&&(s, e)| s <= t && t < e).count())
        .max()
        .unwrap_or(0)
}

fn course_on(days: Vec<Weekday>, start: &str, end: &str) -> Course {
    Course {
        id: "c1".into(),
        name: "Linear Algebra".into(),
        code: None,
        start_date: "2025-01-06".parse().ok(),
        end_date: "2025-05-01".parse().ok(),
        meetings: vec![MeetingPattern {
            days,
            start_time: start.into(),
            end_time: end.into(),
            location: None,
        }],
    }
}

fn day_strategy() -> impl Strategy<Value = DateKey> {
    (0i64..730).prop_map(|offset| {
        DateKey::from_ymd(2024, 6, 1)
            .and_then(|d| d.offset_days(offset))
            .unwrap()
    })
}

proptest! {
    #[test]
    fn prop_same_column_never_overlaps(events in timed_events()) {
        let assignments = layout_overlaps(&events);
        prop_assert_eq!(assignments.len(), events.len());

        for a in &assignments {
            for b in &assignments {
                if a.index < b.index && a.column == b.column {
                    let (s1, e1) = occupied_span(&events[a.index]).unwrap();
                    let (s2, e2) = occupied_span(&events[b.index]).unwrap();
                    prop_assert!(e1 <= s2 || e2 <= s1, "{} and {} overlap", a.event_id, b.event_id);
                }
            }
        }
    }

    #[test]
    fn prop_column_count_is_max_overlap(events in timed_events()) {
        let assignments = layout_overlaps(&events);
        let spans: Vec<(u32, u32)> = events.iter().filter_map(occupied_span).collect();
        let expected = max_simultaneous(&spans);

        for a in &assignments {
            prop_assert_eq!(a.columns, expected);
            prop_assert!(a.column < a.columns);
        }
    }

    #[test]
    fn prop_layout_is_idempotent(events in timed_events()) {
        prop_assert_eq!(layout_overlaps(&events), layout_overlaps(&events));
    }

    #[test]
    fn prop_out_of_term_never_occurs(date in day_strategy()) {
        let course = course_on(vec![Weekday::Mon, Weekday::Wed, Weekday::Fri], "09:00", "09:50");
        let records: Vec<Exclusion> = Vec::new();
        let registry = ExclusionRegistry::new(&records);
        let in_term = course.start_date.is_some_and(|s| s <= date)
            && course.end_date.is_some_and(|e| date <= e);
        if !in_term {
            prop_assert!(!occurs_on(&course, date, &registry));
        }
    }

    #[test]
    fn prop_holiday_always_suppresses(date in day_strategy()) {
        let every_day = vec![
            Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
            Weekday::Fri, Weekday::Sat, Weekday::Sun,
        ];
        let course = course_on(every_day, "09:00", "09:50");
        let records = vec![Exclusion { date, course_id: None, description: "Holiday".into() }];
        let registry = ExclusionRegistry::new(&records);
        prop_assert!(!occurs_on(&course, date, &registry));
    }

    #[test]
    fn prop_scoped_exclusion_leaves_other_courses(date in day_strategy()) {
        let every_day = vec![
            Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
            Weekday::Fri, Weekday::Sat, Weekday::Sun,
        ];
        let cancelled = course_on(every_day.clone(), "09:00", "09:50");
        let mut other = course_on(every_day, "09:00", "09:50");
        other.id = "c2".into();
        let records = vec![Exclusion {
            date,
            course_id: Some("c1".into()),
            description: "Cancelled".into(),
        }];
        let registry = ExclusionRegistry::new(&records);
        let none: Vec<Exclusion> = Vec::new();
        let unrestricted = ExclusionRegistry::new(&none);

        prop_assert!(!occurs_on(&cancelled, date, &registry));
        prop_assert_eq!(
            occurs_on(&other, date, &registry),
            occurs_on(&other, date, &unrestricted)
        );
    }

    #[test]
    fn prop_day_output_is_sorted(
        dues in prop::collection::vec((0u32..1440, any::<bool>()), 0..20)
    ) {
        let mut early = course_on(vec![Weekday::Wed], "08:00", "09:00");
        early.id = "c2".into();
        let courses = vec![course_on(vec![Weekday::Wed], "13:00", "14:00"), early];
        let items: Vec<PunctualItem> = dues
            .iter()
            .enumerate()
            .map(|(i, &(minutes, deadline))| PunctualItem {
                id: format!("i{i}"),
                title: format!("Item {i}"),
                kind: if deadline { ItemKind::Deadline } else { ItemKind::Task },
                due: Some(format!("2025-01-08T{}:00", time(minutes))),
                completed: false,
                course_id: None,
            })
            .collect();

        let date: DateKey = "2025-01-08".parse().unwrap();
        let events = events_for_date(date, &courses, &items, &[]);
        let keys: Vec<_> = events.iter().map(|e| (e.kind(), e.start())).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
        prop_assert_eq!(events.clone(), events_for_date(date, &courses, &items, &[]));
    }

    #[test]
    fn prop_day_event_ids_are_unique(
        dues in prop::collection::vec((1u32..1440, any::<bool>(), any::<bool>()), 0..20)
    ) {
        // Two patterns of one course on the same Wednesday.
        let mut course = course_on(vec![Weekday::Mon, Weekday::Wed], "09:00", "09:50");
        course.meetings.push(MeetingPattern {
            days: vec![Weekday::Wed],
            start_time: "14:00".into(),
            end_time: "16:00".into(),
            location: Some("Lab".into()),
        });
        // Each catalog id is used by both a task and a deadline, due on the
        // day itself or at midnight after it.
        let items: Vec<PunctualItem> = dues
            .iter()
            .enumerate()
            .flat_map(|(i, &(minutes, rolled_over, deadline_first))| {
                let due = if rolled_over {
                    "2025-01-09T00:00".to_string()
                } else {
                    format!("2025-01-08T{}:00", time(minutes))
                };
                let kinds = if deadline_first {
                    [ItemKind::Deadline, ItemKind::Task]
                } else {
                    [ItemKind::Task, ItemKind::Deadline]
                };
                kinds.into_iter().map(move |kind| PunctualItem {
                    id: format!("x{i}"),
                    title: format!("Item {i}"),
                    kind,
                    due: Some(due.clone()),
                    completed: false,
                    course_id: Some("c1".into()),
                })
            })
            .collect();

        let date: DateKey = "2025-01-08".parse().unwrap();
        let events = events_for_date(date, &[course], &items, &[]);
        prop_assert_eq!(events.len(), 2 + items.len());

        let ids: BTreeSet<&str> = events.iter().map(|e| e.id()).collect();
        prop_assert_eq!(ids.len(), events.len());
        prop_assert!(ids.contains("meeting:c1:0"));
        prop_assert!(ids.contains("meeting:c1:1"));
        if !dues.is_empty() {
            prop_assert!(ids.contains("task:x0"));
            prop_assert!(ids.contains("deadline:x0"));
        }
    }

    #[test]
    fn prop_all_day_is_exactly_the_sentinel(
        dues in prop::collection::vec((0u32..1440, any::<bool>()), 0..20)
    ) {
        let events: Vec<CalendarEvent> = dues
            .iter()
            .enumerate()
            .map(|(i, &(m, is_deadline))| if is_deadline { deadline(i, m) } else { task(i, m) })
            .chain(std::iter::once(meeting(99, 600, 660)))
            .collect();
        let split = separate_all_day(&events);

        let sentinel_count = dues
            .iter()
            .filter(|&&(m, _)| time(m) == TimeOfDay::ALL_DAY_SENTINEL)
            .count();
        prop_assert_eq!(split.all_day.len(), sentinel_count);
        prop_assert_eq!(split.timed.len(), events.len() - sentinel_count);
        prop_assert!(split.all_day.iter().all(|e| e.start() == Some(TimeOfDay::ALL_DAY_SENTINEL)));
    }
}
