//! Timetable load summary.
//!
//! Computes descriptive indicators from a set of scheduled courses.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Professor load | Courses taught per professor |
//! | Classroom load | Courses held per classroom |
//! | Classroom occupancy | Booked slots / 60 per classroom |
//! | Busiest slot | Slot hosting the most courses |
//! | Days used | Weekdays with at least one course |

use std::collections::HashMap;

use crate::models::{ScheduledCourse, SlotSet, TimeSlot, SLOT_COUNT};

/// Timetable indicators.
#[derive(Debug, Clone)]
pub struct TimetableStats {
    /// Number of scheduled courses.
    pub course_count: usize,
    /// Courses per professor.
    pub professor_load: HashMap<String, usize>,
    /// Courses per classroom.
    pub classroom_load: HashMap<String, usize>,
    /// Fraction of the week each classroom is booked (0.0..1.0).
    pub classroom_occupancy: HashMap<String, f64>,
    /// Mean classroom occupancy (0.0 when no classrooms are used).
    pub avg_classroom_occupancy: f64,
    /// Slot with the most courses and that count; ties go to the
    /// earliest slot.
    pub busiest_slot: Option<(TimeSlot, usize)>,
    /// Number of distinct weekdays in use.
    pub days_used: usize,
}

impl TimetableStats {
    /// Computes indicators for `courses`.
    pub fn calculate(courses: &[ScheduledCourse]) -> Self {
        let mut professor_load: HashMap<String, usize> = HashMap::new();
        let mut classroom_load: HashMap<String, usize> = HashMap::new();
        let mut classroom_slots: HashMap<String, SlotSet> = HashMap::new();
        let mut per_slot = [0usize; SLOT_COUNT];

        for c in courses {
            *professor_load.entry(c.professor_id().to_string()).or_insert(0) += 1;
            *classroom_load.entry(c.classroom_id().to_string()).or_insert(0) += 1;
            classroom_slots
                .entry(c.classroom_id().to_string())
                .or_default()
                .insert(c.timeslot);
            per_slot[c.timeslot.index()] += 1;
        }

        let classroom_occupancy: HashMap<String, f64> = classroom_slots
            .into_iter()
            .map(|(id, slots)| (id, slots.len() as f64 / SLOT_COUNT as f64))
            .collect();

        let avg_classroom_occupancy = if classroom_occupancy.is_empty() {
            0.0
        } else {
            let sum: f64 = classroom_occupancy.values().sum();
            sum / classroom_occupancy.len() as f64
        };

        // Strictly greater keeps the earliest slot on ties
        let mut busiest_slot: Option<(TimeSlot, usize)> = None;
        for (index, &count) in per_slot.iter().enumerate() {
            if count > busiest_slot.map_or(0, |(_, best)| best) {
                busiest_slot = TimeSlot::from_index(index).map(|slot| (slot, count));
            }
        }

        let mut days: Vec<_> = courses.iter().map(|c| c.timeslot.weekday()).collect();
        days.sort();
        days.dedup();

        Self {
            course_count: courses.len(),
            professor_load,
            classroom_load,
            classroom_occupancy,
            avg_classroom_occupancy,
            busiest_slot,
            days_used: days.len(),
        }
    }

    /// Highest course count of any single professor.
    pub fn max_professor_load(&self) -> usize {
        self.professor_load.values().copied().max().unwrap_or(0)
    }
}
