//! Course request and scheduled course models.
//!
//! A `CourseRequest` is the input to generation: a course bound to one
//! professor and one classroom, but not yet to a timeslot. A
//! `ScheduledCourse` is a request plus its assigned slot.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// Descriptive course metadata.
///
/// Carried through generation untouched; the engine never interprets it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseMetadata {
    /// Credit value.
    pub credits: Option<f64>,
    /// Contact hours per week.
    pub hours: Option<u32>,
    /// Course category (e.g., "required", "elective", "seminar").
    pub course_type: Option<String>,
    /// Offering department.
    pub department: Option<String>,
}

/// A course awaiting a timeslot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRequest {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable course name.
    pub name: String,
    /// Teaching professor (opaque id).
    pub professor_id: String,
    /// Assigned classroom (opaque id).
    pub classroom_id: String,
    /// Descriptive metadata.
    #[serde(default)]
    pub metadata: CourseMetadata,
}

impl CourseRequest {
    /// Creates a request with empty metadata.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        professor_id: impl Into<String>,
        classroom_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            professor_id: professor_id.into(),
            classroom_id: classroom_id.into(),
            metadata: CourseMetadata::default(),
        }
    }

    /// Sets the credit value.
    pub fn with_credits(mut self, credits: f64) -> Self {
        self.metadata.credits = Some(credits);
        self
    }

    /// Sets the weekly contact hours.
    pub fn with_hours(mut self, hours: u32) -> Self {
        self.metadata.hours = Some(hours);
        self
    }

    /// Sets the course type.
    pub fn with_course_type(mut self, course_type: impl Into<String>) -> Self {
        self.metadata.course_type = Some(course_type.into());
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.metadata.department = Some(department.into());
        self
    }

    /// Binds this request to a timeslot.
    pub fn scheduled_at(self, timeslot: TimeSlot) -> ScheduledCourse {
        ScheduledCourse {
            course: self,
            timeslot,
        }
    }
}

/// A course with an assigned timeslot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCourse {
    /// The underlying request.
    #[serde(flatten)]
    pub course: CourseRequest,
    /// Assigned weekday/period.
    pub timeslot: TimeSlot,
}

impl ScheduledCourse {
    /// Creates a scheduled course.
    pub fn new(course: CourseRequest, timeslot: TimeSlot) -> Self {
        Self { course, timeslot }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.course.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.course.name
    }

    #[inline]
    pub fn professor_id(&self) -> &str {
        &self.course.professor_id
    }

    #[inline]
    pub fn classroom_id(&self) -> &str {
        &self.course.classroom_id
    }
}
