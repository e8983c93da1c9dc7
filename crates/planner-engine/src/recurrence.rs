//! Decides whether a course meets on a given day.

use tracing::trace;

use crate::exclusion::ExclusionRegistry;
use crate::model::Course;
use crate::temporal::DateKey;

/// Whether `course` meets on `date`.
///
/// The course must be inside its term bounds, the day must not be excluded
/// for it (globally or specifically), and at least one meeting pattern must
/// fall on the day's weekday. A course with no meeting patterns never meets.
pub fn occurs_on(course: &Course, date: DateKey, exclusions: &ExclusionRegistry<'_>) -> bool {
    if course.start_date.is_some_and(|start| start > date)
        || course.end_date.is_some_and(|end| end < date)
    {
        return false;
    }

    if let Some(record) = exclusions.describe(date, Some(&course.id)) {
        trace!(
            course = %course.id,
            %date,
            reason = %record.description,
            "meeting suppressed by exclusion"
        );
        return false;
    }

    let weekday = date.weekday();
    course.meetings.iter().any(|m| m.meets_on(weekday))
}
