//! Course timetabling core.
//!
//! Assigns graduate courses to weekday/period timeslots so that no
//! professor or classroom is double-booked, and reports double-bookings
//! in an existing set of scheduled courses.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimeSlot`, `CourseRequest`,
//!   `ScheduledCourse`, `Constraint`, `Timetable`
//! - **`validation`**: Request integrity checks (duplicate ids, missing fields)
//! - **`conflict`**: `ConflictDetector`: pairwise double-booking scan
//! - **`solver`**: `SlotModel` and pluggable `SlotSolver` strategies
//! - **`scheduler`**: `ScheduleGenerator`: validated, self-checked generation
//! - **`error`**: `GenerateError`, `InfeasibleReason`, `TimeSlotError`
//! - **`logging`**: tracing subscriber helpers
//!
//! # Architecture
//!
//! Everything here is pure and stateless between calls. Persistence, the
//! request-handling surface and export formats live outside this crate
//! and consume `ScheduledCourse` values read-only.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"

pub mod conflict;
pub mod error;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod solver;
pub mod validation;

pub use conflict::{ConflictDetector, ConflictReport};
pub use error::GenerateError;
pub use scheduler::ScheduleGenerator;
