//! First-fit greedy assignment.
//!
//! Visits variables once in input order and gives each the first slot in
//! canonical order not already taken by an assigned neighbour. Never
//! revisits a decision, so it may fail on instances the backtracking
//! search would solve.
//!
//! With a uniform domain of `k` slots, first-fit edge colouring needs at
//! most `2Δ - 1` colours, so it always succeeds when no resource carries
//! more than `(k + 1) / 2` courses.

use std::time::Instant;

use super::{elapsed_ms, SearchStats, SlotModel, SlotSolver, SolveOutcome, SolveStatus, SolverConfig};
use crate::models::TimeSlot;

/// Single-pass first-fit solver. Ignores `variable_order` and the time limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl GreedySolver {
    pub fn new() -> Self {
        Self
    }
}

impl SlotSolver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, model: &SlotModel, _config: &SolverConfig) -> SolveOutcome {
        let started = Instant::now();
        let mut stats = SearchStats::default();
        let mut assigned: Vec<TimeSlot> = Vec::with_capacity(model.variable_count());

        for var in 0..model.variable_count() {
            let taken = |slot: TimeSlot| {
                model
                    .neighbors(var)
                    .iter()
                    .any(|&n| n < var && assigned[n] == slot)
            };
            match model.domain(var).iter().find(|&s| !taken(s)) {
                Some(slot) => {
                    stats.nodes += 1;
                    assigned.push(slot);
                }
                None => {
                    stats.elapsed_ms = elapsed_ms(started);
                    return SolveOutcome {
                        status: SolveStatus::Exhausted,
                        stats,
                    };
                }
            }
        }

        stats.elapsed_ms = elapsed_ms(started);
        SolveOutcome {
            status: SolveStatus::Solved(assigned),
            stats,
        }
    }
}
