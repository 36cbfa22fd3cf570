//! Requirement models.
//!
//! Demand comes in as weekly aggregates ("class 101 needs Music twice a
//! week") and is searched as unit demands, one per visit. Liberation days
//! become priority requirements.

use serde::{Deserialize, Serialize};

/// Weekly aggregate requirement: `class_number` needs `weekly_count` visits
/// of `specialty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Class receiving the visits.
    pub class_number: String,
    /// Required specialty.
    pub specialty: String,
    /// Visits per week.
    pub weekly_count: u32,
}

/// One visit of one specialty for one class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitRequirement {
    /// Class receiving the visit.
    pub class_number: String,
    /// Required specialty.
    pub specialty: String,
}

/// An outstanding liberation day to honor before unconstrained placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriorityRequirement {
    /// Class that declared the liberation day.
    pub class_number: String,
    /// 1-based weekday.
    pub day: u8,
}

impl Requirement {
    /// Creates an aggregate requirement.
    pub fn new(
        class_number: impl Into<String>,
        specialty: impl Into<String>,
        weekly_count: u32,
    ) -> Self {
        Self {
            class_number: class_number.into(),
            specialty: specialty.into(),
            weekly_count,
        }
    }

    /// The unit requirement this aggregate repeats.
    pub fn unit(&self) -> UnitRequirement {
        UnitRequirement::new(&self.class_number, &self.specialty)
    }
}

impl UnitRequirement {
    /// Creates a unit requirement.
    pub fn new(class_number: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            class_number: class_number.into(),
            specialty: specialty.into(),
        }
    }
}

impl PriorityRequirement {
    /// Creates a priority requirement.
    pub fn new(class_number: impl Into<String>, day: u8) -> Self {
        Self {
            class_number: class_number.into(),
            day,
        }
    }
}
