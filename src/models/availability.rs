//! Availability model.
//!
//! One bookable `(specialist, day, period)` unit drawn from a specialist's
//! weekly availability. The pool of these is what the search consumes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bookable slot of one specialist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Availability {
    /// Specialist name.
    pub specialist: String,
    /// Specialist's specialty (denormalized for matching).
    pub specialty: String,
    /// 1-based weekday.
    pub day: u8,
    /// 1-based period within the day.
    pub period: u8,
}

impl Availability {
    /// Creates an availability.
    pub fn new(
        specialist: impl Into<String>,
        specialty: impl Into<String>,
        day: u8,
        period: u8,
    ) -> Self {
        Self {
            specialist: specialist.into(),
            specialty: specialty.into(),
            day,
            period,
        }
    }

    /// Whether this slot can serve a demand for `specialty`.
    #[inline]
    pub fn serves(&self, specialty: &str) -> bool {
        self.specialty == specialty
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) day {} period {}",
            self.specialist, self.specialty, self.day, self.period
        )
    }
}
