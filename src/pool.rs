//! Availability pool construction.
//!
//! Flattens every specialist's week into individual bookable slots. The
//! result is the multiset the search draws from.

use std::collections::HashMap;

use crate::models::{Availability, Specialist, UnitRequirement};

/// Builds the availability pool.
///
/// Specialists in load order; within a specialist, day-major with periods
/// in declared order.
pub fn build_pool(specialists: &[Specialist]) -> Vec<Availability> {
    specialists
        .iter()
        .flat_map(|s| {
            s.availability
                .slots()
                .map(|(day, period)| Availability::new(&s.name, &s.specialty, day, period))
        })
        .collect()
}

/// Per-specialty balance of demand (unit requirements) against supply (slots).
///
/// Only specialties where demand exceeds supply are returned, as
/// `(specialty, demand, supply)` sorted by specialty.
pub fn specialty_shortfalls(
    units: &[UnitRequirement],
    pool: &[Availability],
) -> Vec<(String, usize, usize)> {
    let mut demand: HashMap<&str, usize> = HashMap::new();
    for unit in units {
        *demand.entry(unit.specialty.as_str()).or_insert(0) += 1;
    }

    let mut supply: HashMap<&str, usize> = HashMap::new();
    for slot in pool {
        *supply.entry(slot.specialty.as_str()).or_insert(0) += 1;
    }

    let mut shortfalls: Vec<_> = demand
        .into_iter()
        .filter_map(|(specialty, needed)| {
            let offered = supply.get(specialty).copied().unwrap_or(0);
            (needed > offered).then(|| (specialty.to_string(), needed, offered))
        })
        .collect();
    shortfalls.sort();
    shortfalls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_pool_flattens_weeks() {
        let specialists = vec![
            Specialist::new("Ms. Tremblay", "Music")
                .with_day(1, [1])
                .with_day(3, [2, 4]),
            Specialist::new("Mr. Roy", "Art").with_day(5, [5]),
        ];
        let pool = build_pool(&specialists);

        assert_eq!(
            pool,
            vec![
                Availability::new("Ms. Tremblay", "Music", 1, 1),
                Availability::new("Ms. Tremblay", "Music", 3, 2),
                Availability::new("Ms. Tremblay", "Music", 3, 4),
                Availability::new("Mr. Roy", "Art", 5, 5),
            ]
        );
    }

    #[test]
    fn test_empty_week_contributes_nothing() {
        let pool = build_pool(&[Specialist::new("Idle", "PE")]);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_specialty_shortfalls() {
        let units = vec![
            UnitRequirement::new("101", "Art"),
            UnitRequirement::new("102", "Art"),
            UnitRequirement::new("101", "Music"),
            UnitRequirement::new("101", "Drama"),
        ];
        let pool = vec![
            Availability::new("Mr. Roy", "Art", 1, 1),
            Availability::new("Ms. Tremblay", "Music", 1, 1),
        ];

        let shortfalls = specialty_shortfalls(&units, &pool);
        assert_eq!(
            shortfalls,
            vec![("Art".to_string(), 2, 1), ("Drama".to_string(), 1, 0)]
        );
    }
}
