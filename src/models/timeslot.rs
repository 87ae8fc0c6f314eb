//! Weekly timeslot model.
//!
//! A timeslot is one teaching period on one weekday. The week has five
//! teaching days and twelve periods per day, giving a fixed domain of
//! sixty slots. Slots are totally ordered by `(weekday, period)`; this
//! canonical order is the value order used by every search strategy.
//!
//! Each slot also has a dense index in `0..SLOT_COUNT`, which lets
//! slot sets be represented as a single `u64` bitmask.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TimeSlotError;

/// Number of teaching weekdays (Monday through Friday).
pub const WEEKDAY_COUNT: u8 = 5;

/// Number of periods per teaching day.
pub const PERIODS_PER_DAY: u8 = 12;

/// Total number of distinct timeslots in a week.
pub const SLOT_COUNT: usize = WEEKDAY_COUNT as usize * PERIODS_PER_DAY as usize;

/// Teaching day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; WEEKDAY_COUNT as usize] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Converts a 1-based day number (1 = Monday) into a weekday.
    pub fn from_number(day: u8) -> Result<Self, TimeSlotError> {
        match day {
            1 => Ok(Weekday::Monday),
            2 => Ok(Weekday::Tuesday),
            3 => Ok(Weekday::Wednesday),
            4 => Ok(Weekday::Thursday),
            5 => Ok(Weekday::Friday),
            other => Err(TimeSlotError::WeekdayOutOfRange(other)),
        }
    }

    /// 1-based day number (1 = Monday).
    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// English day name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One teaching period on one weekday.
///
/// Immutable value type. Out-of-range components are rejected at
/// construction (including deserialization), so every `TimeSlot` value
/// is inside the 60-slot domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSlot", into = "RawTimeSlot")]
pub struct TimeSlot {
    weekday: Weekday,
    period: u8,
}

/// Wire form of a timeslot: `{"weekday": 1..=5, "period": 1..=12}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawTimeSlot {
    weekday: u8,
    period: u8,
}

impl TimeSlot {
    /// Creates a timeslot from a 1-based weekday number and period.
    pub fn new(weekday: u8, period: u8) -> Result<Self, TimeSlotError> {
        Self::on(Weekday::from_number(weekday)?, period)
    }

    /// Creates a timeslot from a weekday and 1-based period.
    pub fn on(weekday: Weekday, period: u8) -> Result<Self, TimeSlotError> {
        if !(1..=PERIODS_PER_DAY).contains(&period) {
            return Err(TimeSlotError::PeriodOutOfRange(period));
        }
        Ok(Self { weekday, period })
    }

    /// Returns the slot with the given dense index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= SLOT_COUNT {
            return None;
        }
        let per_day = PERIODS_PER_DAY as usize;
        let weekday = Weekday::ALL[index / per_day];
        Some(Self {
            weekday,
            period: (index % per_day) as u8 + 1,
        })
    }

    /// Iterates over the whole week in canonical `(weekday, period)` order.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..SLOT_COUNT).filter_map(TimeSlot::from_index)
    }

    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    #[inline]
    pub fn period(&self) -> u8 {
        self.period
    }

    /// Dense index in `0..SLOT_COUNT`, consistent with canonical order.
    #[inline]
    pub fn index(&self) -> usize {
        (self.weekday.number() as usize - 1) * PERIODS_PER_DAY as usize
            + (self.period as usize - 1)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} P{}", self.weekday, self.period)
    }
}

impl TryFrom<RawTimeSlot> for TimeSlot {
    type Error = TimeSlotError;

    fn try_from(raw: RawTimeSlot) -> Result<Self, Self::Error> {
        TimeSlot::new(raw.weekday, raw.period)
    }
}

impl From<TimeSlot> for RawTimeSlot {
    fn from(slot: TimeSlot) -> Self {
        Self {
            weekday: slot.weekday.number(),
            period: slot.period,
        }
    }
}

/// A set of timeslots stored as a bitmask over slot indices.
///
/// Iteration yields slots in canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SlotSet(u64);

impl SlotSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All sixty slots.
    pub const fn full() -> Self {
        Self((1u64 << SLOT_COUNT) - 1)
    }

    #[inline]
    pub fn insert(&mut self, slot: TimeSlot) {
        self.0 |= 1u64 << slot.index();
    }

    #[inline]
    pub fn remove(&mut self, slot: TimeSlot) {
        self.0 &= !(1u64 << slot.index());
    }

    #[inline]
    pub fn contains(&self, slot: TimeSlot) -> bool {
        self.0 & (1u64 << slot.index()) != 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Slots in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = TimeSlot> + '_ {
        let bits = self.0;
        (0..SLOT_COUNT)
            .filter(move |i| bits & (1u64 << i) != 0)
            .filter_map(TimeSlot::from_index)
    }

    /// Collects the set into a sorted, de-duplicated vector.
    pub fn to_vec(&self) -> Vec<TimeSlot> {
        self.iter().collect()
    }
}

impl FromIterator<TimeSlot> for SlotSet {
    fn from_iter<I: IntoIterator<Item = TimeSlot>>(iter: I) -> Self {
        let mut set = SlotSet::empty();
        for slot in iter {
            set.insert(slot);
        }
        set
    }
}
