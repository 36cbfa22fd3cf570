//! Specialist timetabling domain models.
//!
//! Provides the data types for describing a week of specialist visits:
//! who needs what (classes, requirements), who can provide it and when
//! (specialists, availabilities), and the resulting per-class grid.
//!
//! # Domain Mappings
//!
//! | specialist-schedule | Meaning |
//! |---------------------|---------|
//! | SchoolClass | Group of pupils receiving visits |
//! | Specialist | Music/Art/PE instructor with a weekly availability |
//! | Requirement | Weekly visit count of a specialty for a class |
//! | Availability | One free (specialist, day, period) slot |
//! | ScheduleGrid | Per-class days × periods timetable |
//!
//! # Week Shape
//! Days and periods are 1-based at every public boundary:
//! day ∈ 1..=[`DAYS_PER_WEEK`], period ∈ 1..=[`PERIODS_PER_DAY`].

mod availability;
mod class;
mod grid;
mod requirement;
mod specialist;

pub use availability::Availability;
pub use class::SchoolClass;
pub use grid::{ClassGrid, Placement, ScheduleGrid};
pub use requirement::{PriorityRequirement, Requirement, UnitRequirement};
pub use specialist::{Specialist, WeeklyAvailability};

/// School days in a week.
pub const DAYS_PER_WEEK: u8 = 5;

/// Teaching periods in a day.
pub const PERIODS_PER_DAY: u8 = 5;
