//! Chronological backtracking with forward checking.
//!
//! # Algorithm
//!
//! 1. Pick the next unassigned variable (input order, or smallest
//!    remaining domain).
//! 2. Try its remaining slots in canonical `(weekday, period)` order.
//! 3. After each tentative assignment, remove that slot from the domains
//!    of every unassigned neighbour. If a neighbour's domain empties, the
//!    assignment is rejected immediately.
//! 4. When a variable runs out of candidates, undo the previous
//!    assignment and advance it to its next candidate.
//!
//! The search is exhausted once the first variable's candidates are all
//! rejected. Every step is deterministic, so repeated runs on the same
//! model yield the same assignment.
//!
//! # Uniform domains
//! When every variable shares one slot domain and the constraints form a
//! professor/classroom multigraph (always the case for request models),
//! the instance is a bipartite edge colouring problem. It is coloured
//! directly in polynomial time under either variable order and the tree
//! search is skipped. Each course still takes the first free slot when one
//! exists, so easy instances get the assignment the search would find.
//!
//! # Complexity
//! Tree search is worst case exponential in the number of variables.
//!
//! # Reference
//! Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//! Constraint Satisfaction Problems", Artificial Intelligence 14(3)

use std::time::{Duration, Instant};

use super::colouring::BipartiteLayout;
use super::{elapsed_ms, SearchStats, SlotModel, SlotSolver, SolveOutcome, SolveStatus, SolverConfig, VariableOrder};
use crate::models::{SlotSet, TimeSlot};

/// Complete backtracking search with forward checking, with a direct
/// colouring for uniform domains.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    pub fn new() -> Self {
        Self
    }
}

impl SlotSolver for BacktrackingSolver {
    fn name(&self) -> &'static str {
        "backtracking"
    }

    fn solve(&self, model: &SlotModel, config: &SolverConfig) -> SolveOutcome {
        let mut search = Search::new(model, config);
        if search.out_of_time() {
            return search.finish(false);
        }

        if let Some(layout) = BipartiteLayout::of(model) {
            return search.finish_coloured(layout.colour());
        }

        let found = search.run(0);
        search.finish(found)
    }
}

/// Mutable state of one search run.
struct Search<'a> {
    model: &'a SlotModel,
    order: VariableOrder,
    deadline: Option<Duration>,
    domains: Vec<SlotSet>,
    assigned: Vec<Option<TimeSlot>>,
    /// Pruned (variable, slot) pairs, undone on backtrack.
    trail: Vec<(usize, TimeSlot)>,
    stats: SearchStats,
    started: Instant,
    timed_out: bool,
}

impl<'a> Search<'a> {
    fn new(model: &'a SlotModel, config: &SolverConfig) -> Self {
        Self {
            model,
            order: config.variable_order,
            deadline: config.time_limit_ms.map(Duration::from_millis),
            domains: model.domains().to_vec(),
            assigned: vec![None; model.variable_count()],
            trail: Vec::new(),
            stats: SearchStats::default(),
            started: Instant::now(),
            timed_out: false,
        }
    }

    /// Assigns the variable chosen at `depth` and recurses. Returns `true`
    /// once every variable is assigned.
    fn run(&mut self, depth: usize) -> bool {
        let Some(var) = self.select_variable(depth) else {
            return true;
        };

        let candidates = self.domains[var];
        for slot in candidates.iter() {
            if self.out_of_time() {
                return false;
            }
            self.stats.nodes += 1;

            let mark = self.trail.len();
            self.assigned[var] = Some(slot);
            if self.forward_check(var, slot) && self.run(depth + 1) {
                return true;
            }
            if self.timed_out {
                return false;
            }

            self.undo(mark);
            self.assigned[var] = None;
            self.stats.backtracks += 1;
        }

        false
    }

    fn select_variable(&self, depth: usize) -> Option<usize> {
        match self.order {
            VariableOrder::InputOrder => (depth < self.assigned.len()).then_some(depth),
            VariableOrder::SmallestDomainFirst => self
                .assigned
                .iter()
                .enumerate()
                .filter(|(_, a)| a.is_none())
                .min_by_key(|&(var, _)| (self.domains[var].len(), var))
                .map(|(var, _)| var),
        }
    }

    /// Prunes `slot` from unassigned neighbours of `var`. Returns `false`
    /// on a domain wipe-out.
    fn forward_check(&mut self, var: usize, slot: TimeSlot) -> bool {
        let model = self.model;
        for &n in model.neighbors(var) {
            if self.assigned[n].is_some() || !self.domains[n].contains(slot) {
                continue;
            }
            self.domains[n].remove(slot);
            self.trail.push((n, slot));
            if self.domains[n].is_empty() {
                return false;
            }
        }
        true
    }

    fn undo(&mut self, mark: usize) {
        while self.trail.len() > mark {
            if let Some((var, slot)) = self.trail.pop() {
                self.domains[var].insert(slot);
            }
        }
    }

    fn out_of_time(&mut self) -> bool {
        if let Some(limit) = self.deadline {
            if self.started.elapsed() >= limit {
                self.timed_out = true;
            }
        }
        self.timed_out
    }

    /// Records a colouring as if each variable were assigned once.
    fn finish_coloured(mut self, colouring: Option<Vec<TimeSlot>>) -> SolveOutcome {
        let Some(solution) = colouring else {
            return self.finish(false);
        };
        self.stats.nodes = solution.len() as u64;
        for (slot, var) in solution.into_iter().zip(self.assigned.iter_mut()) {
            *var = Some(slot);
        }
        self.finish(true)
    }

    fn finish(mut self, found: bool) -> SolveOutcome {
        self.stats.elapsed_ms = elapsed_ms(self.started);

        let status = if found {
            match self.assigned.iter().copied().collect::<Option<Vec<TimeSlot>>>() {
                Some(solution) => SolveStatus::Solved(solution),
                None => SolveStatus::Exhausted,
            }
        } else if self.timed_out {
            SolveStatus::TimedOut
        } else {
            SolveStatus::Exhausted
        };

        SolveOutcome {
            status,
            stats: self.stats,
        }
    }
}
