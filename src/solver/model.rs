//! Constraint model for slot assignment.
//!
//! Each course request is a variable whose domain is a set of timeslots.
//! All-different constraints are expanded into a conflict graph: two
//! variables are neighbours when they share a professor or a classroom,
//! and neighbours must take different values.

use std::collections::HashSet;

use crate::models::{Constraint, CourseRequest, SlotSet, TimeSlot};

/// Variables, domains and the conflict graph of one generation call.
#[derive(Debug, Clone)]
pub struct SlotModel {
    domains: Vec<SlotSet>,
    neighbors: Vec<Vec<usize>>,
    constraints: Vec<Constraint>,
    edges: HashSet<(usize, usize)>,
}

impl SlotModel {
    /// Creates a model with `variable_count` unconstrained variables, each
    /// ranging over `slots`.
    pub fn new(variable_count: usize, slots: &[TimeSlot]) -> Self {
        let domain: SlotSet = slots.iter().copied().collect();
        Self {
            domains: vec![domain; variable_count],
            neighbors: vec![Vec::new(); variable_count],
            constraints: Vec::new(),
            edges: HashSet::new(),
        }
    }

    /// Builds the model for a request list: one variable per request (same
    /// order) and one all-different constraint per shared resource.
    pub fn from_requests(requests: &[CourseRequest], slots: &[TimeSlot]) -> Self {
        let mut model = Self::new(requests.len(), slots);
        for constraint in Constraint::from_requests(requests) {
            model.add_constraint(constraint);
        }
        model
    }

    /// Adds a constraint and links its members in the conflict graph.
    ///
    /// Out-of-range member positions are ignored.
    pub fn add_constraint(&mut self, constraint: Constraint) {
        let n = self.domains.len();
        let members: Vec<usize> = constraint
            .members()
            .iter()
            .copied()
            .filter(|&m| m < n)
            .collect();

        for (i, &a) in members.iter().enumerate() {
            for &b in &members[i + 1..] {
                self.link(a, b);
            }
        }
        self.constraints.push(constraint);
    }

    fn link(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let key = (a.min(b), a.max(b));
        if self.edges.insert(key) {
            self.neighbors[a].push(b);
            self.neighbors[b].push(a);
        }
    }

    /// Intersects a variable's domain with `allowed`.
    pub fn restrict_domain(&mut self, var: usize, allowed: SlotSet) {
        if let Some(domain) = self.domains.get_mut(var) {
            let keep: SlotSet = domain.iter().filter(|s| allowed.contains(*s)).collect();
            *domain = keep;
        }
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.domains.len()
    }

    #[inline]
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Number of distinct neighbour pairs.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    #[inline]
    pub fn domain(&self, var: usize) -> SlotSet {
        self.domains[var]
    }

    pub(crate) fn domains(&self) -> &[SlotSet] {
        &self.domains
    }

    /// Variables that must differ from `var`, in link order.
    #[inline]
    pub fn neighbors(&self, var: usize) -> &[usize] {
        &self.neighbors[var]
    }

    /// Whether a full assignment satisfies every domain and every
    /// all-different constraint.
    pub fn is_satisfied_by(&self, assignment: &[TimeSlot]) -> bool {
        if assignment.len() != self.variable_count() {
            return false;
        }
        assignment.iter().enumerate().all(|(var, &slot)| {
            self.domains[var].contains(slot)
                && self.neighbors[var].iter().all(|&n| assignment[n] != slot)
        })
    }
}
