//! School class model.
//!
//! A class is the recipient of specialist visits. Besides its identifier
//! it declares *liberation days*: weekdays on which the class should get a
//! specialist visit ahead of any unconstrained placement.

use serde::{Deserialize, Serialize};

/// A class receiving specialist visits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolClass {
    /// Unique class identifier (e.g., "101", "4B").
    pub number: String,
    /// Liberation days (1-based weekdays), in declared order.
    pub liberation_days: Vec<u8>,
}

impl SchoolClass {
    /// Creates a class with no liberation days.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            liberation_days: Vec::new(),
        }
    }

    /// Adds a liberation day.
    pub fn with_liberation_day(mut self, day: u8) -> Self {
        self.liberation_days.push(day);
        self
    }

    /// Replaces the liberation days.
    pub fn with_liberation_days(mut self, days: impl IntoIterator<Item = u8>) -> Self {
        self.liberation_days = days.into_iter().collect();
        self
    }
}
