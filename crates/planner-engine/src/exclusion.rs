//! Holiday and single-session cancellation lookup.
//!
//! A date is excluded for a course when a global record (a holiday) exists
//! for that day, or a record scoped to that course does. Only the calendar
//! day is compared; [`DateKey`] already carries no time-of-day.

use crate::model::Exclusion;
use crate::temporal::DateKey;

/// Read-only view over a slice of exclusion records.
#[derive(Debug, Clone, Copy)]
pub struct ExclusionRegistry<'a> {
    records: &'a [Exclusion],
}

impl<'a> ExclusionRegistry<'a> {
    pub fn new(records: &'a [Exclusion]) -> Self {
        ExclusionRegistry { records }
    }

    /// Whether `date` is excluded for `course_id`, or globally when `None`.
    pub fn is_excluded(&self, date: DateKey, course_id: Option<&str>) -> bool {
        self.describe(date, course_id).is_some()
    }

    /// The record responsible for excluding `date`, if any.
    ///
    /// A holiday takes precedence over a course-scoped cancellation on the
    /// same day.
    pub fn describe(&self, date: DateKey, course_id: Option<&str>) -> Option<&'a Exclusion> {
        let on_date = || self.records.iter().filter(move |r| r.date == date);

        on_date().find(|r| r.is_global()).or_else(|| {
            let id = course_id?;
            on_date().find(|r| r.course_id.as_deref() == Some(id))
        })
    }

    /// All holiday records, in catalog order.
    pub fn holidays(&self) -> impl Iterator<Item = &'a Exclusion> + '_ {
        self.records.iter().filter(|r| r.is_global())
    }
}
