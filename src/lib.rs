//! Weekly specialist timetabling for schools.
//!
//! Assigns specialist instructors (music, art, physical education, ...) to
//! class time slots, honoring each specialist's availability, each class's
//! weekly requirement per specialty, and the class's liberation days.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `SchoolClass`, `Specialist`, `Requirement`,
//!   `Availability`, `ScheduleGrid`
//! - **`expansion`**: Weekly aggregates → unit requirements; liberation days →
//!   priority list
//! - **`pool`**: Specialist weeks → bookable availability slots
//! - **`validation`**: Input integrity checks (duplicate IDs, day/period
//!   ranges, class references)
//! - **`scheduler`**: Priority-first backtracking search and summary metrics
//! - **`io`**: CSV readers/writers and grid rendering
//! - **`generator`**: Random feasible instances
//!
//! # Architecture
//!
//! Data flows one way: records → models → (expansion, pool) → scheduler →
//! grid → rendering. Only the grid is mutated during search; everything
//! else is read-only once loaded.

pub mod error;
pub mod expansion;
pub mod generator;
pub mod io;
pub mod models;
pub mod pool;
pub mod scheduler;
pub mod validation;

pub use error::{LoadError, ScheduleError};
