//! Timetable summary metrics.
//!
//! Computes descriptive indicators from a finished grid and its classes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Filled cells | Visits booked across all classes |
//! | Visits by class | Booked visits per class |
//! | Load by specialist | Booked visits per specialist |
//! | Liberation days honored | Declared liberation days with a visit that day |
//! | Liberation days missed | Declared liberation days left without a visit |

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{ScheduleGrid, SchoolClass};

/// Descriptive metrics of a timetable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    /// Visits booked across all classes.
    pub filled_cells: usize,
    /// Visits per class number.
    pub visits_by_class: BTreeMap<String, usize>,
    /// Visits per specialist name.
    pub load_by_specialist: BTreeMap<String, usize>,
    /// Liberation days that received a visit.
    pub liberation_days_honored: usize,
    /// Liberation days that did not.
    pub liberation_days_missed: usize,
}

impl ScheduleSummary {
    /// Computes the summary of `grid`.
    ///
    /// # Arguments
    /// * `grid` - The finished timetable.
    /// * `classes` - The classes, for their liberation days. Classes absent
    ///   from the grid count their liberation days as missed.
    pub fn calculate(grid: &ScheduleGrid, classes: &[SchoolClass]) -> Self {
        let mut summary = Self::default();

        for class in grid {
            let visits = class.filled_cells();
            summary.filled_cells += visits;
            summary
                .visits_by_class
                .insert(class.class_number.clone(), visits);

            for visit in class.visits() {
                *summary
                    .load_by_specialist
                    .entry(visit.specialist.clone())
                    .or_insert(0) += 1;
            }
        }

        for class in classes {
            let class_grid = grid.get(&class.number);
            for &day in &class.liberation_days {
                if class_grid.is_some_and(|g| g.is_day_occupied(day)) {
                    summary.liberation_days_honored += 1;
                } else {
                    summary.liberation_days_missed += 1;
                }
            }
        }

        summary
    }

    /// Fraction of liberation days honored (1.0 when none were declared).
    pub fn liberation_rate(&self) -> f64 {
        let total = self.liberation_days_honored + self.liberation_days_missed;
        if total == 0 {
            1.0
        } else {
            self.liberation_days_honored as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    fn sample() -> (ScheduleGrid, Vec<SchoolClass>) {
        let classes = vec![
            SchoolClass::new("101").with_liberation_days([1, 3]),
            SchoolClass::new("102"),
        ];
        let mut grid = ScheduleGrid::new(["101", "102"]);
        grid.place(0, &Availability::new("Ms. Tremblay", "Music", 1, 2))
            .keep();
        grid.place(0, &Availability::new("Mr. Roy", "Art", 4, 1)).keep();
        grid.place(1, &Availability::new("Ms. Tremblay", "Music", 2, 2))
            .keep();
        (grid, classes)
    }

    #[test]
    fn test_counts() {
        let (grid, classes) = sample();
        let s = ScheduleSummary::calculate(&grid, &classes);

        assert_eq!(s.filled_cells, 3);
        assert_eq!(s.visits_by_class["101"], 2);
        assert_eq!(s.visits_by_class["102"], 1);
        assert_eq!(s.load_by_specialist["Ms. Tremblay"], 2);
        assert_eq!(s.load_by_specialist["Mr. Roy"], 1);
    }

    #[test]
    fn test_liberation_days() {
        let (grid, classes) = sample();
        let s = ScheduleSummary::calculate(&grid, &classes);

        // Day 1 has a visit, day 3 does not.
        assert_eq!(s.liberation_days_honored, 1);
        assert_eq!(s.liberation_days_missed, 1);
        assert!((s.liberation_rate() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty() {
        let s = ScheduleSummary::calculate(&ScheduleGrid::default(), &[]);
        assert_eq!(s.filled_cells, 0);
        assert!((s.liberation_rate() - 1.0).abs() < 1e-10);
    }
}
