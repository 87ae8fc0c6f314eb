//! Timetable (solution) view.
//!
//! A timetable is a read-only collection of scheduled courses, kept in
//! the order they were produced. It answers the queries the presentation
//! layer needs: courses per professor, per classroom, per slot, and the
//! weekly grid (periods as rows, weekdays as columns).

use serde::{Deserialize, Serialize};

use super::{ScheduledCourse, TimeSlot, Weekday, PERIODS_PER_DAY, WEEKDAY_COUNT};

/// An ordered set of scheduled courses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    /// Scheduled courses in production order.
    pub courses: Vec<ScheduledCourse>,
}

/// Weekly grid: `cells[period - 1][weekday - 1]` lists course ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyGrid {
    pub cells: Vec<Vec<Vec<String>>>,
}

impl WeeklyGrid {
    fn empty() -> Self {
        Self {
            cells: vec![vec![Vec::new(); WEEKDAY_COUNT as usize]; PERIODS_PER_DAY as usize],
        }
    }

    /// Course ids in one cell.
    pub fn cell(&self, slot: TimeSlot) -> &[String] {
        &self.cells[slot.period() as usize - 1][slot.weekday().number() as usize - 1]
    }

    /// Row of cells for a 1-based period, Monday first.
    pub fn row(&self, period: u8) -> Option<&[Vec<String>]> {
        period
            .checked_sub(1)
            .and_then(|p| self.cells.get(p as usize))
            .map(Vec::as_slice)
    }
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scheduled course.
    pub fn add(&mut self, course: ScheduledCourse) {
        self.courses.push(course);
    }

    /// Number of scheduled courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Finds a course by id.
    pub fn course(&self, course_id: &str) -> Option<&ScheduledCourse> {
        self.courses.iter().find(|c| c.id() == course_id)
    }

    /// Courses taught by a professor.
    pub fn for_professor(&self, professor_id: &str) -> Vec<&ScheduledCourse> {
        self.courses
            .iter()
            .filter(|c| c.professor_id() == professor_id)
            .collect()
    }

    /// Courses held in a classroom.
    pub fn for_classroom(&self, classroom_id: &str) -> Vec<&ScheduledCourse> {
        self.courses
            .iter()
            .filter(|c| c.classroom_id() == classroom_id)
            .collect()
    }

    /// Courses held at a timeslot.
    pub fn at(&self, slot: TimeSlot) -> Vec<&ScheduledCourse> {
        self.courses.iter().filter(|c| c.timeslot == slot).collect()
    }

    /// Courses on a weekday, ordered by period.
    pub fn on_day(&self, weekday: Weekday) -> Vec<&ScheduledCourse> {
        let mut day: Vec<&ScheduledCourse> = self
            .courses
            .iter()
            .filter(|c| c.timeslot.weekday() == weekday)
            .collect();
        day.sort_by_key(|c| c.timeslot.period());
        day
    }

    /// Builds the 12 x 5 weekly grid.
    ///
    /// Within a cell, course ids keep timetable order.
    pub fn weekly_grid(&self) -> WeeklyGrid {
        let mut grid = WeeklyGrid::empty();
        for c in &self.courses {
            let slot = c.timeslot;
            grid.cells[slot.period() as usize - 1][slot.weekday().number() as usize - 1]
                .push(c.id().to_string());
        }
        grid
    }

    /// Courses sorted by `(weekday, period)`, stable within a slot.
    pub fn sorted_by_slot(&self) -> Vec<&ScheduledCourse> {
        let mut sorted: Vec<&ScheduledCourse> = self.courses.iter().collect();
        sorted.sort_by_key(|c| c.timeslot);
        sorted
    }
}

impl From<Vec<ScheduledCourse>> for Timetable {
    fn from(courses: Vec<ScheduledCourse>) -> Self {
        Self { courses }
    }
}
