//! # planner-engine
//!
//! Deterministic calendar computation for an academic planner.
//!
//! Given a catalog of courses (weekly class meetings within a term), one-off
//! tasks and deadlines, and calendar exclusions (holidays, cancelled
//! sessions), the engine answers what happens on a day or across a range,
//! and lays out a day's overlapping events into the fewest display columns.
//! Every function is pure: inputs are passed in on each call and nothing is
//! cached between calls.
//!
//! ## Modules
//!
//! - [`temporal`] - `DateKey` / `TimeOfDay` value types, week-start and range boundaries
//! - [`model`] - Courses, items, exclusions, and the `Catalog` document
//! - [`exclusion`] - Holiday and per-course cancellation lookup
//! - [`recurrence`] - Whether a course meets on a given day
//! - [`event`] - Normalized calendar events (tagged by kind)
//! - [`projector`] - Catalog entities → events for one day
//! - [`separator`] - All-day vs timed split
//! - [`aggregator`] - Sorted events for a day, week, month grid or range
//! - [`layout`] - Column layout of overlapping timed events
//! - [`palette`] - Color token resolution
//! - [`error`] - Error types

pub mod aggregator;
pub mod error;
pub mod event;
pub mod exclusion;
pub mod layout;
pub mod model;
pub mod palette;
pub mod projector;
pub mod recurrence;
pub mod separator;
pub mod temporal;

pub use aggregator::{
    events_for_date, events_for_month_grid, events_for_range, events_for_week, sort_for_display,
};
pub use error::PlannerError;
pub use event::{CalendarEvent, EventKind, ItemEvent, MeetingEvent};
pub use exclusion::ExclusionRegistry;
pub use layout::{layout_day, layout_overlaps, ColumnAssignment, DayLayout};
pub use model::{Catalog, Course, Exclusion, ItemKind, MeetingPattern, PunctualItem};
pub use palette::{ColorToken, Palette};
pub use projector::{project_punctual, project_recurring};
pub use recurrence::occurs_on;
pub use separator::{separate_all_day, Separated};
pub use temporal::{
    month_bounds, month_grid_bounds, week_bounds, DateKey, TimeOfDay, WeekStartDay,
};
