//! Schedule generation and timetable indicators.
//!
//! # Algorithm
//!
//! `ScheduleGenerator` validates course requests, checks per-resource
//! capacity, delegates the search to a pluggable `SlotSolver`, and
//! self-checks the result with the conflict detector before returning it.
//!
//! # Indicators
//!
//! `TimetableStats` summarises professor load, classroom occupancy and
//! the busiest slot of a finished timetable.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - de Werra (1985), "An introduction to timetabling"

mod config;
mod generator;
mod stats;

pub use config::GeneratorConfig;
pub use generator::ScheduleGenerator;
pub use stats::TimetableStats;
