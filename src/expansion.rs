//! Requirement expansion.
//!
//! Turns weekly aggregates into the ordered unit demands the search walks
//! through, and liberation days into the priority list.
//!
//! # Ordering
//! The search is first-success, so expansion order decides which feasible
//! timetable (if any) is found. Aggregate order is preserved and each
//! aggregate's copies stay contiguous.

use crate::models::{PriorityRequirement, Requirement, SchoolClass, UnitRequirement};

/// Expands each aggregate into `weekly_count` unit requirements.
///
/// A zero count contributes nothing.
pub fn expand_requirements(requirements: &[Requirement]) -> Vec<UnitRequirement> {
    requirements
        .iter()
        .flat_map(|req| std::iter::repeat_n(req.unit(), req.weekly_count as usize))
        .collect()
}

/// One priority requirement per `(class, liberation day)`, class-then-day order.
pub fn priority_requirements(classes: &[SchoolClass]) -> Vec<PriorityRequirement> {
    classes
        .iter()
        .flat_map(|class| {
            class
                .liberation_days
                .iter()
                .map(|&day| PriorityRequirement::new(&class.number, day))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_repeats_weekly_count() {
        let units = expand_requirements(&[Requirement::new("101", "Music", 3)]);
        assert_eq!(units.len(), 3);
        assert!(units.iter().all(|u| *u == UnitRequirement::new("101", "Music")));
    }

    #[test]
    fn test_expand_zero_count() {
        let units = expand_requirements(&[Requirement::new("101", "Music", 0)]);
        assert!(units.is_empty());
    }

    #[test]
    fn test_expand_preserves_aggregate_order() {
        let units = expand_requirements(&[
            Requirement::new("102", "Art", 1),
            Requirement::new("101", "Music", 2),
            Requirement::new("101", "PE", 0),
            Requirement::new("101", "Art", 1),
        ]);
        let labels: Vec<_> = units
            .iter()
            .map(|u| format!("{}:{}", u.class_number, u.specialty))
            .collect();
        assert_eq!(
            labels,
            vec!["102:Art", "101:Music", "101:Music", "101:Art"]
        );
    }

    #[test]
    fn test_priority_class_then_day_order() {
        let classes = vec![
            SchoolClass::new("101").with_liberation_days([4, 2]),
            SchoolClass::new("102"),
            SchoolClass::new("103").with_liberation_day(1),
        ];
        let priorities = priority_requirements(&classes);
        assert_eq!(
            priorities,
            vec![
                PriorityRequirement::new("101", 4),
                PriorityRequirement::new("101", 2),
                PriorityRequirement::new("103", 1),
            ]
        );
    }

    #[test]
    fn test_priority_empty() {
        assert!(priority_requirements(&[]).is_empty());
    }
}
