//! Timetabling domain models.
//!
//! Provides the core data types for representing course timetabling
//! problems and solutions.
//!
//! # Domain Mapping
//!
//! | Type | Role |
//! |------|------|
//! | `TimeSlot` | One period on one weekday (5 x 12 domain) |
//! | `CourseRequest` | A course bound to a professor and classroom, awaiting a slot |
//! | `ScheduledCourse` | A request with its assigned slot |
//! | `Constraint` | All-different rule over courses sharing a resource |
//! | `Timetable` | Read-only view over scheduled courses |

mod constraint;
mod course;
mod timeslot;
mod timetable;

pub(crate) use constraint::group_by_resource;
pub use constraint::{Constraint, ResourceKind};
pub use course::{CourseMetadata, CourseRequest, ScheduledCourse};
pub use timeslot::{SlotSet, TimeSlot, Weekday, PERIODS_PER_DAY, SLOT_COUNT, WEEKDAY_COUNT};
pub use timetable::{Timetable, WeeklyGrid};
