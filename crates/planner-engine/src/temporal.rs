//! Calendar value types and range-boundary helpers.
//!
//! Everything in the planner works on local wall-clock values: a [`DateKey`]
//! is a calendar day with no time or zone attached, and a [`TimeOfDay`] is an
//! `HH:MM` reading on that day's clock. Comparing two days never involves a
//! UTC conversion, so a task due late in the evening cannot drift onto the
//! neighbouring day.
//!
//! # Functions
//!
//! - [`week_bounds`] - First and last day of the week containing a date
//! - [`month_bounds`] - First and last day of the month containing a date
//! - [`month_grid_bounds`] - Whole weeks covering a month, for grid views
//! - [`split_timestamp`] - Split a stored due timestamp into day and time

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PlannerError;

// ── Configurable week start ─────────────────────────────────────────────────

/// Which day begins a week for range computations (week view, month grid).
///
/// Does **not** affect which weekday a class meets on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStartDay {
    /// ISO 8601 standard (Monday = day 0 of the week).
    #[default]
    Monday,
    /// US/Canada convention (Sunday = day 0 of the week).
    Sunday,
}

impl FromStr for WeekStartDay {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Ok(WeekStartDay::Monday),
            "sunday" | "sun" => Ok(WeekStartDay::Sunday),
            other => Err(PlannerError::InvalidWeekStart(format!("'{other}'"))),
        }
    }
}

/// How many days `weekday` is from the week-start day.
fn days_from_week_start(weekday: Weekday, week_start: WeekStartDay) -> i64 {
    match week_start {
        WeekStartDay::Monday => weekday.num_days_from_monday() as i64,
        WeekStartDay::Sunday => weekday.num_days_from_sunday() as i64,
    }
}

// ── DateKey ─────────────────────────────────────────────────────────────────

/// A normalized calendar day, stripped of any time-of-day or offset.
///
/// Parsing accepts either `YYYY-MM-DD` or a timestamp beginning with one
/// (`2025-01-08T10:00:00`, `2025-01-08 10:00`); only the day portion is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        DateKey(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(DateKey)
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// The following calendar day.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(DateKey)
    }

    /// The preceding calendar day.
    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().map(DateKey)
    }

    /// Shift by a signed number of days.
    pub fn offset_days(self, days: i64) -> Option<Self> {
        self.0
            .checked_add_signed(chrono::Duration::days(days))
            .map(DateKey)
    }

    /// Every day from `self` through `end`, inclusive. Empty when `end < self`.
    pub fn days_through(self, end: DateKey) -> DaysThrough {
        DaysThrough {
            next: Some(self),
            end,
        }
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}

impl From<NaiveDateTime> for DateKey {
    fn from(dt: NaiveDateTime) -> Self {
        DateKey(dt.date())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateKey {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (day, rest) = match (s.get(..10), s.get(10..)) {
            (Some(day), Some(rest)) => (day, rest),
            _ => return Err(PlannerError::InvalidDate(format!("'{s}'"))),
        };
        if !rest.is_empty() && !rest.starts_with(['T', 't', ' ']) {
            return Err(PlannerError::InvalidDate(format!("'{s}'")));
        }
        NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .map(DateKey)
            .map_err(|e| PlannerError::InvalidDate(format!("'{}': {}", s, e)))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Iterator returned by [`DateKey::days_through`].
#[derive(Debug, Clone)]
pub struct DaysThrough {
    next: Option<DateKey>,
    end: DateKey,
}

impl Iterator for DaysThrough {
    type Item = DateKey;

    fn next(&mut self) -> Option<DateKey> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = current.succ();
        Some(current)
    }
}

// ── TimeOfDay ───────────────────────────────────────────────────────────────

/// A wall-clock time with minute precision, stored as minutes after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// `00:00`. Items due at midnight belong to the end of the previous day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// `23:59`, the value the planner stores when no specific time was chosen.
    pub const ALL_DAY_SENTINEL: TimeOfDay = TimeOfDay(23 * 60 + 59);

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(TimeOfDay((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0) / 60
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0) % 60
    }

    /// Minutes elapsed since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        TimeOfDay((time.hour() * 60 + time.minute()) as u16)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = PlannerError;

    /// Parse `"HH:MM"` (24-hour). A trailing `:SS` is accepted and dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .map(TimeOfDay::from)
            .map_err(|e| PlannerError::InvalidTime(format!("'{}': {}", s, e)))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ── Timestamps ──────────────────────────────────────────────────────────────

/// Split a stored due timestamp into its calendar day and time-of-day.
///
/// Returns `None` when no calendar day can be read, in which case the item
/// never appears on the calendar. A readable day with an unreadable (or
/// missing) time yields `Some((day, None))`. Any UTC offset or `Z` suffix is
/// ignored: the wall-clock reading is taken as-is.
pub fn split_timestamp(s: &str) -> Option<(DateKey, Option<TimeOfDay>)> {
    let s = s.trim();
    let day: DateKey = s.get(..10)?.parse().ok()?;
    let rest = s.get(10..)?;
    if rest.is_empty() {
        return Some((day, None));
    }
    if !rest.starts_with(['T', 't', ' ']) {
        return None;
    }

    let clock: &str = rest[1..]
        .split(['Z', 'z', '+', '-'])
        .next()
        .unwrap_or_default();
    let clock = clock.split('.').next().unwrap_or_default();
    Some((day, clock.parse().ok()))
}

// ── Range boundaries ────────────────────────────────────────────────────────

/// First and last day of the week containing `date`.
pub fn week_bounds(date: DateKey, week_start: WeekStartDay) -> Option<(DateKey, DateKey)> {
    let days_since_start = days_from_week_start(date.weekday(), week_start);
    let start = date.offset_days(-days_since_start)?;
    let end = start.offset_days(6)?;
    Some((start, end))
}

/// First and last day of the month containing `date`.
pub fn month_bounds(date: DateKey) -> Option<(DateKey, DateKey)> {
    let d = date.date();
    let first = DateKey::from_ymd(d.year(), d.month(), 1)?;
    let (y, m) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    let last = DateKey::from_ymd(y, m, 1)?.pred()?;
    Some((first, last))
}

/// The whole weeks a month grid displays: from the start of the week holding
/// the 1st through the end of the week holding the month's last day.
pub fn month_grid_bounds(
    date: DateKey,
    week_start: WeekStartDay,
) -> Option<(DateKey, DateKey)> {
    let (first, last) = month_bounds(date)?;
    let (grid_start, _) = week_bounds(first, week_start)?;
    let (_, grid_end) = week_bounds(last, week_start)?;
    Some((grid_start, grid_end))
}

// ── Tests ───────────────────────────────────────────────────────────────────
