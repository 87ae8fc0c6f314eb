//! Search strategies for slot assignment.
//!
//! A [`SlotModel`] describes the problem: one variable per course
//! request, a timeslot domain per variable, and a conflict graph derived
//! from the all-different constraints. A [`SlotSolver`] searches it.
//!
//! Strategies are pluggable; the generator enforces determinism and
//! validates the output regardless of which one is used.
//!
//! - [`BacktrackingSolver`]: complete depth-first search with forward
//!   checking. Reports exhaustion only when no assignment exists. Uniform
//!   domains are edge-coloured directly instead of searched.
//! - [`GreedySolver`]: single first-fit pass, no backtracking. Fast but
//!   incomplete.
//!
//! # References
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"
//! - Kőnig (1916), bipartite edge colouring
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6

mod backtracking;
mod colouring;
mod greedy;
mod model;

pub use backtracking::BacktrackingSolver;
pub use greedy::GreedySolver;
pub use model::SlotModel;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::{Duration, Instant};

use crate::models::TimeSlot;

/// Order in which variables (course requests) are branched on.
///
/// Only affects the tree search; uniform-domain models are coloured in
/// input order either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableOrder {
    /// Requests in input order.
    #[default]
    InputOrder,
    /// Unassigned request with the fewest remaining slots; ties go to the
    /// earliest request.
    SmallestDomainFirst,
}

/// Search settings shared by all strategies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub variable_order: VariableOrder,
    /// Wall-clock limit in milliseconds. `None` = unlimited.
    pub time_limit_ms: Option<u64>,
}

/// Terminal state of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    /// One slot per variable, in variable order.
    Solved(Vec<TimeSlot>),
    /// The search space was exhausted without a solution.
    Exhausted,
    /// The time limit was hit before a decision.
    TimedOut,
}

/// Search effort counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Tentative assignments made.
    pub nodes: u64,
    /// Assignments undone.
    pub backtracks: u64,
    /// Wall-clock time spent (ms).
    pub elapsed_ms: u64,
}

/// Status plus statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub status: SolveStatus,
    pub stats: SearchStats,
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self.status, SolveStatus::Solved(_))
    }
}

/// A search strategy over a [`SlotModel`].
///
/// Implementations must be deterministic: the same model and config
/// always yield the same outcome status.
pub trait SlotSolver: Send + Sync + Debug {
    /// Strategy name (for logs).
    fn name(&self) -> &'static str;

    /// Searches for an assignment satisfying every domain and constraint.
    fn solve(&self, model: &SlotModel, config: &SolverConfig) -> SolveOutcome;
}

/// Milliseconds since `started`, saturating at `u64::MAX`.
pub(crate) fn elapsed_ms(started: Instant) -> u64 {
    saturating_ms(started.elapsed())
}

fn saturating_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
