//! Priority-first chronological backtracking.
//!
//! # Algorithm
//!
//! Unit requirements are resolved one per recursion level, in expansion
//! order. For the current `(class, specialty)`:
//!
//! 1. **Priority phase**: walk the outstanding liberation days in order.
//!    For each, take the first pooled slot on that day with the right
//!    specialty, place it in the current class's grid, and recurse with
//!    that slot and that liberation day removed.
//! 2. **General phase**: walk the pool, skipping slots of another specialty
//!    or failing the validity rule. Place, recurse with the slot removed and
//!    the outstanding liberation days discarded.
//! 3. Neither phase succeeding backtracks into the caller.
//!
//! The first complete assignment wins; nothing is optimized.
//!
//! # State
//! Pool and liberation list are copied per branch (the pool as indices into
//! a shared slot arena), so sibling branches never see each other's
//! consumption. The grid is shared and every placement is undone by its
//! [`Placement`](crate::models::Placement) guard unless the branch succeeds.
//!
//! # Complexity
//! Exponential in the worst case: no propagation, no learning. Intended for
//! a 5 × 5 week with tens of classes and specialists.

use tracing::{debug, info, instrument, trace, warn};

use crate::error::ScheduleError;
use crate::expansion::{expand_requirements, priority_requirements};
use crate::models::{
    Availability, PriorityRequirement, Requirement, ScheduleGrid, SchoolClass, Specialist,
    UnitRequirement,
};
use crate::pool::{build_pool, specialty_shortfalls};
use crate::validation::{validate_input, ValidationError, ValidationErrorKind};

/// Input container for a timetabling run.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRequest {
    /// Classes to timetable, in output order.
    pub classes: Vec<SchoolClass>,
    /// Specialists and their weekly availability.
    pub specialists: Vec<Specialist>,
    /// Weekly aggregate requirements, in search order.
    pub requirements: Vec<Requirement>,
}

impl ScheduleRequest {
    /// Creates a new request.
    pub fn new(
        classes: Vec<SchoolClass>,
        specialists: Vec<Specialist>,
        requirements: Vec<Requirement>,
    ) -> Self {
        Self {
            classes,
            specialists,
            requirements,
        }
    }
}

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursion levels entered, the terminal one included.
    pub nodes_explored: u64,
    /// Placements undone after their subtree failed.
    pub backtracks: u64,
    /// Placements in the solution made by the priority phase.
    pub priority_placements: u64,
    /// Placements in the solution made by the general phase.
    pub general_placements: u64,
}

/// A complete timetable and how it was found.
#[derive(Debug, Clone)]
pub struct Solution {
    /// One grid per class; every unit requirement occupies one cell.
    pub grid: ScheduleGrid,
    /// Search counters.
    pub stats: SearchStats,
}

/// Priority-first backtracking scheduler.
///
/// Defaults reproduce the established placement behavior. Two switches
/// exist for the liberation-day rules:
/// - [`with_standing_priorities`](Self::with_standing_priorities): keep
///   unmatched liberation days after a general-phase placement instead of
///   discarding them.
/// - [`with_class_bound_priorities`](Self::with_class_bound_priorities):
///   only let a liberation day serve requirements of the class that
///   declared it.
///
/// # Example
///
/// ```
/// use specialist_schedule::models::{Requirement, SchoolClass, Specialist};
/// use specialist_schedule::scheduler::{BacktrackingScheduler, ScheduleRequest};
///
/// let request = ScheduleRequest::new(
///     vec![SchoolClass::new("C1").with_liberation_day(3)],
///     vec![Specialist::new("Ms. Tremblay", "Music").with_day(1, [1]).with_day(3, [2])],
///     vec![Requirement::new("C1", "Music", 1)],
/// );
///
/// let solution = BacktrackingScheduler::new().schedule_request(&request).unwrap();
/// let c1 = solution.grid.get("C1").unwrap();
/// assert_eq!(c1.cell(3, 2).unwrap().specialist, "Ms. Tremblay");
/// assert!(c1.cell(1, 1).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackingScheduler {
    standing_priorities: bool,
    class_bound_priorities: bool,
}

impl BacktrackingScheduler {
    /// Creates a scheduler with default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps outstanding liberation days across general-phase placements.
    pub fn with_standing_priorities(mut self, enabled: bool) -> Self {
        self.standing_priorities = enabled;
        self
    }

    /// Restricts liberation days to requirements of their own class.
    pub fn with_class_bound_priorities(mut self, enabled: bool) -> Self {
        self.class_bound_priorities = enabled;
        self
    }

    /// Timetables `requirements` for `classes` using `specialists`.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidInput`] when load-boundary checks fail.
    /// - [`ScheduleError::ResourceShortage`] when the pool holds fewer slots
    ///   than the summed weekly counts; checked before any unit requirement
    ///   or grid is built.
    /// - [`ScheduleError::NoFeasibleAssignment`] when the search exhausts.
    #[instrument(skip_all, fields(classes = classes.len(), specialists = specialists.len()))]
    pub fn schedule(
        &self,
        classes: &[SchoolClass],
        specialists: &[Specialist],
        requirements: &[Requirement],
    ) -> Result<Solution, ScheduleError> {
        validate_input(classes, specialists, requirements).map_err(ScheduleError::InvalidInput)?;

        let arena = build_pool(specialists);
        let available = arena.len() as u64;
        let required: u64 = requirements.iter().map(|r| u64::from(r.weekly_count)).sum();

        if available < required {
            warn!(available, required, "not enough availabilities to cover all requirements");
            return Err(ScheduleError::ResourceShortage {
                available,
                required,
            });
        }

        let units = expand_requirements(requirements);
        let priorities = priority_requirements(classes);

        info!(
            unit_requirements = units.len(),
            liberation_days = priorities.len(),
            availabilities = arena.len(),
            "starting search"
        );

        for (specialty, demand, supply) in specialty_shortfalls(&units, &arena) {
            warn!(%specialty, demand, supply, "specialty demand exceeds its availabilities");
        }

        let mut grid = ScheduleGrid::new(classes.iter().map(|c| c.number.as_str()));
        let unit_classes = units
            .iter()
            .map(|u| {
                grid.class_index(&u.class_number).ok_or_else(|| {
                    ScheduleError::InvalidInput(vec![ValidationError {
                        kind: ValidationErrorKind::InvalidClassReference,
                        message: format!("Unknown class '{}'", u.class_number),
                    }])
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut search = Search {
            units: &units,
            unit_classes: &unit_classes,
            arena: &arena,
            standing_priorities: self.standing_priorities,
            class_bound_priorities: self.class_bound_priorities,
            stats: SearchStats::default(),
        };
        let pool: Vec<usize> = (0..arena.len()).collect();

        if search.run(&mut grid, &pool, &priorities, 0) {
            info!(
                nodes = search.stats.nodes_explored,
                backtracks = search.stats.backtracks,
                priority_placements = search.stats.priority_placements,
                "solution found"
            );
            Ok(Solution {
                grid,
                stats: search.stats,
            })
        } else {
            info!(
                nodes = search.stats.nodes_explored,
                backtracks = search.stats.backtracks,
                "search exhausted without a solution"
            );
            Err(ScheduleError::NoFeasibleAssignment {
                nodes_explored: search.stats.nodes_explored,
            })
        }
    }

    /// Timetables a request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Result<Solution, ScheduleError> {
        self.schedule(&request.classes, &request.specialists, &request.requirements)
    }
}

struct Search<'a> {
    units: &'a [UnitRequirement],
    unit_classes: &'a [usize],
    arena: &'a [Availability],
    standing_priorities: bool,
    class_bound_priorities: bool,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    /// Resolves `units[index..]`. `pool` holds arena indices of free slots.
    fn run(
        &mut self,
        grid: &mut ScheduleGrid,
        pool: &[usize],
        priorities: &[PriorityRequirement],
        index: usize,
    ) -> bool {
        self.stats.nodes_explored += 1;

        let units = self.units;
        let arena = self.arena;
        let Some(unit) = units.get(index) else {
            return true;
        };
        let class_idx = self.unit_classes[index];

        for (priority_pos, priority) in priorities.iter().enumerate() {
            if self.class_bound_priorities && priority.class_number != unit.class_number {
                continue;
            }
            let Some(pool_pos) = pool.iter().position(|&slot| {
                arena[slot].day == priority.day && arena[slot].serves(&unit.specialty)
            }) else {
                continue;
            };
            let slot = &arena[pool[pool_pos]];
            // A visit already booked that day for this class blocks the
            // liberation day rather than overwriting it.
            if !grid.is_valid_placement(class_idx, slot.day, slot.period) {
                continue;
            }

            let next_pool = without(pool, pool_pos);
            let next_priorities = without(priorities, priority_pos);
            let mut placed = grid.place(class_idx, slot);
            trace!(class = %unit.class_number, %slot, "priority placement");

            if self.run(&mut placed, &next_pool, &next_priorities, index + 1) {
                placed.keep();
                self.stats.priority_placements += 1;
                return true;
            }
            self.stats.backtracks += 1;
        }

        for (pool_pos, &slot_idx) in pool.iter().enumerate() {
            let slot = &arena[slot_idx];
            if !slot.serves(&unit.specialty)
                || !grid.is_valid_placement(class_idx, slot.day, slot.period)
            {
                continue;
            }

            let next_pool = without(pool, pool_pos);
            let next_priorities = if self.standing_priorities {
                priorities.to_vec()
            } else {
                Vec::new()
            };
            let mut placed = grid.place(class_idx, slot);
            trace!(class = %unit.class_number, %slot, "general placement");

            if self.run(&mut placed, &next_pool, &next_priorities, index + 1) {
                placed.keep();
                self.stats.general_placements += 1;
                return true;
            }
            self.stats.backtracks += 1;
        }

        debug!(
            index,
            class = %unit.class_number,
            specialty = %unit.specialty,
            "no placement, backtracking"
        );
        false
    }
}

/// Copy of `items` without position `pos`.
fn without<T: Clone>(items: &[T], pos: usize) -> Vec<T> {
    let mut copy = Vec::with_capacity(items.len().saturating_sub(1));
    copy.extend_from_slice(&items[..pos]);
    copy.extend_from_slice(&items[pos + 1..]);
    copy
}
