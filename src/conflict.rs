//! Hard-constraint conflict detection.
//!
//! Scans a set of already-placed courses for double-bookings:
//! - a professor teaching two courses at the same timeslot
//! - a classroom hosting two courses at the same timeslot
//!
//! # Algorithm
//! Plain pairwise scan: for every `i < j` in input order, compare the
//! shared resource and the slot. A pair that shares both professor and
//! classroom is reported in both lists.
//!
//! # Complexity
//! O(n²) in the number of courses. Course catalogs are small (tens to low
//! hundreds) and detection runs on demand, so the quadratic scan is kept
//! for its simple, input-ordered output.

use serde::{Deserialize, Serialize};

use crate::models::{ResourceKind, ScheduledCourse, TimeSlot};

/// Identity of one side of a conflicting pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRef {
    pub id: String,
    pub name: String,
}

impl From<&ScheduledCourse> for CourseRef {
    fn from(course: &ScheduledCourse) -> Self {
        Self {
            id: course.id().to_string(),
            name: course.name().to_string(),
        }
    }
}

/// Two courses double-booking one resource.
///
/// `course_a` is the course that appears first in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub course_a: CourseRef,
    pub course_b: CourseRef,
    /// The shared professor or classroom id.
    pub resource_id: String,
    pub timeslot: TimeSlot,
}

/// Result of a conflict scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Professor double-bookings, in scan order.
    pub professor_conflicts: Vec<Conflict>,
    /// Classroom double-bookings, in scan order.
    pub classroom_conflicts: Vec<Conflict>,
}

impl ConflictReport {
    #[inline]
    pub fn professor_conflict_count(&self) -> usize {
        self.professor_conflicts.len()
    }

    #[inline]
    pub fn classroom_conflict_count(&self) -> usize {
        self.classroom_conflicts.len()
    }

    /// Total entries across both categories.
    pub fn total(&self) -> usize {
        self.professor_conflict_count() + self.classroom_conflict_count()
    }

    /// Whether no hard constraint is violated.
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    /// Conflicts of one category.
    pub fn of_kind(&self, kind: ResourceKind) -> &[Conflict] {
        match kind {
            ResourceKind::Professor => &self.professor_conflicts,
            ResourceKind::Classroom => &self.classroom_conflicts,
        }
    }
}

/// Detects professor and classroom double-bookings.
///
/// Stateless; one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictDetector;

impl ConflictDetector {
    pub fn new() -> Self {
        Self
    }

    /// Scans `courses` and reports every conflicting pair in both categories.
    pub fn detect(&self, courses: &[ScheduledCourse]) -> ConflictReport {
        ConflictReport {
            professor_conflicts: self.find_professor_conflicts(courses),
            classroom_conflicts: self.find_classroom_conflicts(courses),
        }
    }

    /// Pairs where the same professor is double-booked.
    pub fn find_professor_conflicts(&self, courses: &[ScheduledCourse]) -> Vec<Conflict> {
        find_conflicts(courses, ResourceKind::Professor)
    }

    /// Pairs where the same classroom is double-booked.
    pub fn find_classroom_conflicts(&self, courses: &[ScheduledCourse]) -> Vec<Conflict> {
        find_conflicts(courses, ResourceKind::Classroom)
    }
}

fn find_conflicts(courses: &[ScheduledCourse], kind: ResourceKind) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (i, a) in courses.iter().enumerate() {
        let resource = kind.resource_of(&a.course);
        for b in &courses[i + 1..] {
            if a.timeslot == b.timeslot && resource == kind.resource_of(&b.course) {
                conflicts.push(Conflict {
                    course_a: a.into(),
                    course_b: b.into(),
                    resource_id: resource.to_string(),
                    timeslot: a.timeslot,
                });
            }
        }
    }

    conflicts
}
