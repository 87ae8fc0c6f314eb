//! Error types.
//!
//! `TimeSlotError` covers construction-time range checks.
//! `GenerateError` covers every non-solved outcome of schedule generation;
//! infeasibility is an ordinary variant that callers are expected to branch on.

use thiserror::Error;

use crate::models::ResourceKind;

/// Out-of-range timeslot component.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeSlotError {
    #[error("weekday must be between 1 and 5, got {0}")]
    WeekdayOutOfRange(u8),

    #[error("period must be between 1 and 12, got {0}")]
    PeriodOutOfRange(u8),
}

/// Why no conflict-free assignment was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfeasibleReason {
    /// Requests were given but the slot domain is empty.
    NoAvailableSlots,
    /// One professor or classroom has more requests than there are slots.
    ResourceOverloaded {
        kind: ResourceKind,
        resource_id: String,
        requests: usize,
        slots: usize,
    },
    /// The search tried every candidate for the first request.
    SearchExhausted,
    /// The wall-clock limit was reached before a decision.
    TimedOut { elapsed_ms: u64 },
}

impl std::fmt::Display for InfeasibleReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InfeasibleReason::NoAvailableSlots => f.write_str("no timeslots are available"),
            InfeasibleReason::ResourceOverloaded {
                kind,
                resource_id,
                requests,
                slots,
            } => write!(
                f,
                "{kind} {resource_id} has {requests} requests but only {slots} timeslots are available"
            ),
            InfeasibleReason::SearchExhausted => {
                f.write_str("constraints cannot be satisfied by any assignment")
            }
            InfeasibleReason::TimedOut { elapsed_ms } => {
                write!(f, "search timed out after {elapsed_ms} ms")
            }
        }
    }
}

/// Failure outcome of [`ScheduleGenerator::generate`](crate::scheduler::ScheduleGenerator::generate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("invalid course request '{course_id}': {field} must not be empty")]
    InvalidRequest { course_id: String, field: &'static str },

    #[error("duplicate course request id: {course_id}")]
    DuplicateRequestId { course_id: String },

    #[error("no valid schedule found: {0}")]
    Infeasible(InfeasibleReason),

    #[error("generated schedule failed self-check: {detail}")]
    InternalInvariantViolation { detail: String },
}

impl GenerateError {
    /// Whether this is an infeasibility outcome (including time-outs).
    pub fn is_infeasible(&self) -> bool {
        matches!(self, GenerateError::Infeasible(_))
    }

    /// Whether the search was cut short by the wall-clock limit.
    pub fn is_timed_out(&self) -> bool {
        matches!(
            self,
            GenerateError::Infeasible(InfeasibleReason::TimedOut { .. })
        )
    }
}
