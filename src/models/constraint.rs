//! Hard constraints of the timetabling problem.
//!
//! Every course occupies exactly one professor and one classroom for one
//! timeslot. A professor or classroom cannot be in two places at once, so
//! all courses sharing a resource must receive pairwise different slots.
//! This is an all-different constraint per resource.
//!
//! # Reference
//! Régin (1994), "A filtering algorithm for constraints of difference in CSPs"

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::CourseRequest;

/// The kind of resource a course occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Professor,
    Classroom,
}

impl ResourceKind {
    /// Both kinds, in reporting order.
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Professor, ResourceKind::Classroom];

    /// Returns the id of this resource kind referenced by a request.
    pub fn resource_of<'a>(&self, request: &'a CourseRequest) -> &'a str {
        match self {
            ResourceKind::Professor => &request.professor_id,
            ResourceKind::Classroom => &request.classroom_id,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Professor => f.write_str("professor"),
            ResourceKind::Classroom => f.write_str("classroom"),
        }
    }
}

/// A hard scheduling constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
    /// The listed requests (by position in the request sequence) share
    /// `resource_id` and must all be assigned different timeslots.
    AllDifferent {
        kind: ResourceKind,
        resource_id: String,
        members: Vec<usize>,
    },
}

impl Constraint {
    /// Creates an all-different constraint.
    pub fn all_different(kind: ResourceKind, resource_id: impl Into<String>, members: Vec<usize>) -> Self {
        Self::AllDifferent {
            kind,
            resource_id: resource_id.into(),
            members,
        }
    }

    /// Request positions covered by this constraint.
    pub fn members(&self) -> &[usize] {
        match self {
            Constraint::AllDifferent { members, .. } => members,
        }
    }

    /// Derives the all-different constraints implied by a request list.
    ///
    /// One constraint per professor and per classroom that is shared by two
    /// or more requests. Constraints are ordered by kind (professors first),
    /// then by first appearance of the resource in `requests`; members are
    /// in request order.
    pub fn from_requests(requests: &[CourseRequest]) -> Vec<Constraint> {
        let mut constraints = Vec::new();

        for kind in ResourceKind::ALL {
            for (resource_id, members) in group_by_resource(requests, kind) {
                if members.len() > 1 {
                    constraints.push(Constraint::all_different(kind, resource_id, members));
                }
            }
        }

        constraints
    }
}

/// Groups request positions by the resource of `kind` they reference.
///
/// Groups are returned in first-appearance order.
pub(crate) fn group_by_resource(
    requests: &[CourseRequest],
    kind: ResourceKind,
) -> Vec<(&str, Vec<usize>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();

    for (pos, request) in requests.iter().enumerate() {
        let id = kind.resource_of(request);
        match index.get(id) {
            Some(&g) => groups[g].1.push(pos),
            None => {
                index.insert(id, groups.len());
                groups.push((id, vec![pos]));
            }
        }
    }

    groups
}
