//! Specialist model.
//!
//! Specialists are the bookable resources: music, art, physical education
//! instructors and the like. Each carries a specialty tag and a weekly
//! availability expressed as the list of free periods per day.

use serde::{Deserialize, Serialize};

use super::DAYS_PER_WEEK;

/// A specialist instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialist {
    /// Specialist name (identity for a run).
    pub name: String,
    /// Specialty tag matched against requirements (e.g., "Music").
    pub specialty: String,
    /// Free periods, per day.
    pub availability: WeeklyAvailability,
    /// Free-form notes carried through from the source records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Weekly availability: for each day (index 0 = day 1), the free period numbers.
///
/// Sparse form of a days × periods presence grid. Period numbers are 1-based
/// and kept in declared order, which is also the order they enter the pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    /// Free periods per day.
    pub days: Vec<Vec<u8>>,
}

impl WeeklyAvailability {
    /// Creates an availability with no free periods.
    pub fn new() -> Self {
        Self {
            days: vec![Vec::new(); DAYS_PER_WEEK as usize],
        }
    }

    /// Sets the free periods of a (1-based) day.
    ///
    /// Days past the current length grow the list so validation can report
    /// them. Day 0 is ignored.
    pub fn with_day(mut self, day: u8, periods: impl IntoIterator<Item = u8>) -> Self {
        let Some(idx) = day.checked_sub(1).map(usize::from) else {
            return self;
        };
        if self.days.len() <= idx {
            self.days.resize(idx + 1, Vec::new());
        }
        self.days[idx] = periods.into_iter().collect();
        self
    }

    /// Free periods on a (1-based) day. Empty for unknown days.
    pub fn periods_on(&self, day: u8) -> &[u8] {
        day.checked_sub(1)
            .and_then(|idx| self.days.get(usize::from(idx)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the specialist is free at `(day, period)`.
    pub fn is_free(&self, day: u8, period: u8) -> bool {
        self.periods_on(day).contains(&period)
    }

    /// Total number of free slots in the week.
    pub fn slot_count(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    /// Iterates `(day, period)` pairs, day-major, periods in declared order.
    pub fn slots(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.days.iter().enumerate().flat_map(|(idx, periods)| {
            let day = idx as u8 + 1;
            periods.iter().map(move |&period| (day, period))
        })
    }
}

impl Specialist {
    /// Creates a specialist with an empty week.
    pub fn new(name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialty: specialty.into(),
            availability: WeeklyAvailability::new(),
            notes: None,
        }
    }

    /// Sets the free periods of a (1-based) day.
    pub fn with_day(mut self, day: u8, periods: impl IntoIterator<Item = u8>) -> Self {
        self.availability = self.availability.with_day(day, periods);
        self
    }

    /// Replaces the whole weekly availability.
    pub fn with_availability(mut self, availability: WeeklyAvailability) -> Self {
        self.availability = availability;
        self
    }

    /// Attaches notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
