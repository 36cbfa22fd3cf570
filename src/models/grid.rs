//! Schedule grid (solution) model.
//!
//! One days × periods matrix per class. The search writes placements into
//! it and reads it back for the validity rule; once the search succeeds it
//! is the result handed to rendering.
//!
//! # Invariants
//! - A class receives at most one visit per day, whatever the period.
//! - A given availability is referenced by at most one cell across all
//!   classes (guaranteed by the search consuming pool entries).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::ops::{Deref, DerefMut};

use super::{Availability, DAYS_PER_WEEK, PERIODS_PER_DAY};

const DAYS: usize = DAYS_PER_WEEK as usize;
const PERIODS: usize = PERIODS_PER_DAY as usize;

/// One class's week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassGrid {
    /// Class identifier.
    pub class_number: String,
    /// Cells indexed `[day - 1][period - 1]`.
    pub cells: [[Option<Availability>; PERIODS]; DAYS],
}

impl ClassGrid {
    /// Creates an empty week for a class.
    pub fn new(class_number: impl Into<String>) -> Self {
        Self {
            class_number: class_number.into(),
            cells: std::array::from_fn(|_| std::array::from_fn(|_| None)),
        }
    }

    /// The cell at a 1-based `(day, period)`, if occupied.
    pub fn cell(&self, day: u8, period: u8) -> Option<&Availability> {
        let (d, p) = to_index(day, period)?;
        self.cells[d][p].as_ref()
    }

    /// The visit booked on a 1-based day, if any.
    pub fn visit_on(&self, day: u8) -> Option<&Availability> {
        let d = usize::from(day.checked_sub(1)?);
        self.cells.get(d)?.iter().flatten().next()
    }

    /// Whether any period of a 1-based day is occupied.
    pub fn is_day_occupied(&self, day: u8) -> bool {
        self.visit_on(day).is_some()
    }

    /// Validity rule for placing a visit at `(day, period)`.
    ///
    /// Both checks are made explicitly: no other period of that day may be
    /// occupied, and the target cell itself must be empty. Out-of-range
    /// coordinates are never valid.
    pub fn is_valid_placement(&self, day: u8, period: u8) -> bool {
        let Some((d, p)) = to_index(day, period) else {
            return false;
        };
        if self.cells[d].iter().any(Option::is_some) {
            return false;
        }
        self.cells[d][p].is_none()
    }

    /// All booked visits, day-major.
    pub fn visits(&self) -> impl Iterator<Item = &Availability> {
        self.cells.iter().flatten().flatten()
    }

    /// Number of occupied cells.
    pub fn filled_cells(&self) -> usize {
        self.visits().count()
    }
}

/// The per-class grids of a run, in class-load order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScheduleGrid {
    classes: Vec<ClassGrid>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ScheduleGrid {
    /// Creates empty grids for the given classes.
    ///
    /// A repeated class number keeps its first grid.
    pub fn new<I, S>(class_numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut grid = Self::default();
        for number in class_numbers {
            let number = number.into();
            if grid.index.contains_key(&number) {
                continue;
            }
            grid.index.insert(number.clone(), grid.classes.len());
            grid.classes.push(ClassGrid::new(number));
        }
        grid
    }

    /// Position of a class in this grid.
    pub fn class_index(&self, class_number: &str) -> Option<usize> {
        self.index.get(class_number).copied()
    }

    /// Grid of a class by number.
    pub fn get(&self, class_number: &str) -> Option<&ClassGrid> {
        self.class_index(class_number).map(|idx| &self.classes[idx])
    }

    /// Iterates class grids in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, ClassGrid> {
        self.classes.iter()
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the grid holds no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Occupied cells across all classes.
    pub fn filled_cells(&self) -> usize {
        self.classes.iter().map(ClassGrid::filled_cells).sum()
    }

    /// Validity rule for class `class_idx` at `(day, period)`.
    pub fn is_valid_placement(&self, class_idx: usize, day: u8, period: u8) -> bool {
        self.classes
            .get(class_idx)
            .is_some_and(|c| c.is_valid_placement(day, period))
    }

    /// Writes `availability` into class `class_idx` at its own day and period.
    ///
    /// The returned guard clears the cell when dropped unless
    /// [`Placement::keep`] is called, so every exit path of a search branch
    /// undoes its move.
    ///
    /// # Panics
    /// If `class_idx` or the availability's day/period are out of range.
    pub fn place(&mut self, class_idx: usize, availability: &Availability) -> Placement<'_> {
        let (d, p) = to_index(availability.day, availability.period)
            .expect("availability day/period outside the week");
        self.classes[class_idx].cells[d][p] = Some(availability.clone());
        Placement {
            grid: self,
            class_idx,
            day: d,
            period: p,
            kept: false,
        }
    }

    /// Consumes the grid into a class-number keyed map.
    pub fn into_map(self) -> BTreeMap<String, ClassGrid> {
        self.classes
            .into_iter()
            .map(|c| (c.class_number.clone(), c))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ScheduleGrid {
    type Item = &'a ClassGrid;
    type IntoIter = std::slice::Iter<'a, ClassGrid>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}

/// A scoped grid mutation: one cell written by [`ScheduleGrid::place`].
///
/// Dereferences to the grid so the search can recurse through it.
#[derive(Debug)]
pub struct Placement<'g> {
    grid: &'g mut ScheduleGrid,
    class_idx: usize,
    day: usize,
    period: usize,
    kept: bool,
}

impl Placement<'_> {
    /// Keeps the placement instead of undoing it on drop.
    pub fn keep(mut self) {
        self.kept = true;
    }
}

impl Deref for Placement<'_> {
    type Target = ScheduleGrid;

    fn deref(&self) -> &ScheduleGrid {
        &*self.grid
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut ScheduleGrid {
        &mut *self.grid
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        if !self.kept {
            self.grid.classes[self.class_idx].cells[self.day][self.period] = None;
        }
    }
}

fn to_index(day: u8, period: u8) -> Option<(usize, usize)> {
    let d = usize::from(day.checked_sub(1)?);
    let p = usize::from(period.checked_sub(1)?);
    (d < DAYS && p < PERIODS).then_some((d, p))
}
