//! Backtracking scheduler and timetable metrics.
//!
//! # Algorithm
//!
//! `BacktrackingScheduler` resolves unit requirements depth-first. Each
//! requirement first tries the outstanding liberation days, then any
//! valid slot of its specialty; a dead end undoes the last placement and
//! tries the next alternative. The first complete assignment is returned.
//!
//! # Summary
//!
//! `ScheduleSummary` reports filled cells, per-class and per-specialist
//! counts, and how many liberation days received a visit.

mod backtracking;
mod summary;

pub use backtracking::{BacktrackingScheduler, ScheduleRequest, SearchStats, Solution};
pub use summary::ScheduleSummary;
