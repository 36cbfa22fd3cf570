//! Random instance generation.
//!
//! Produces timetabling requests for demos and tests. Every generated
//! instance embeds a feasible timetable: requirements are derived from a
//! planted assignment whose slots are guaranteed free, and extra free slots
//! are sprinkled on top as noise.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{
    Requirement, SchoolClass, Specialist, WeeklyAvailability, DAYS_PER_WEEK, PERIODS_PER_DAY,
};
use crate::scheduler::ScheduleRequest;

const SPECIALTY_NAMES: &[&str] = &["Music", "Art", "PE", "Drama", "English", "Science"];

/// Random instance generator.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use specialist_schedule::generator::InstanceGenerator;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let request = InstanceGenerator::new().with_classes(3).generate(&mut rng);
/// assert_eq!(request.classes.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    classes: usize,
    specialties: usize,
    specialists_per_specialty: usize,
    max_weekly_count: u32,
    free_slot_probability: f64,
    liberation_probability: f64,
}

impl InstanceGenerator {
    /// Creates a generator with small defaults.
    pub fn new() -> Self {
        Self {
            classes: 6,
            specialties: 3,
            specialists_per_specialty: 2,
            max_weekly_count: 1,
            free_slot_probability: 0.3,
            liberation_probability: 0.2,
        }
    }

    /// Sets the number of classes.
    pub fn with_classes(mut self, classes: usize) -> Self {
        self.classes = classes;
        self
    }

    /// Sets the number of specialties.
    pub fn with_specialties(mut self, specialties: usize) -> Self {
        self.specialties = specialties.max(1);
        self
    }

    /// Sets the number of specialists per specialty.
    pub fn with_specialists_per_specialty(mut self, count: usize) -> Self {
        self.specialists_per_specialty = count.max(1);
        self
    }

    /// Sets the largest weekly count drawn per (class, specialty).
    pub fn with_max_weekly_count(mut self, max: u32) -> Self {
        self.max_weekly_count = max;
        self
    }

    /// Sets the probability that a slot is free beyond the planted ones.
    ///
    /// Clamped to `[0, 1]`; NaN keeps the current value.
    pub fn with_free_slot_probability(mut self, p: f64) -> Self {
        self.free_slot_probability = probability(p, self.free_slot_probability);
        self
    }

    /// Sets the probability that a day is a liberation day for a class.
    ///
    /// Clamped to `[0, 1]`; NaN keeps the current value.
    pub fn with_liberation_probability(mut self, p: f64) -> Self {
        self.liberation_probability = probability(p, self.liberation_probability);
        self
    }

    /// Generates a request.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> ScheduleRequest {
        let specialties: Vec<String> = (0..self.specialties).map(specialty_name).collect();

        let mut specialists: Vec<Specialist> = Vec::new();
        let mut free: Vec<[[bool; PERIODS_PER_DAY as usize]; DAYS_PER_WEEK as usize]> = Vec::new();
        for specialty in &specialties {
            for k in 0..self.specialists_per_specialty {
                specialists.push(Specialist::new(format!("{specialty} {}", k + 1), specialty));
                let mut week = [[false; PERIODS_PER_DAY as usize]; DAYS_PER_WEEK as usize];
                for day in week.iter_mut() {
                    for slot in day.iter_mut() {
                        *slot = rng.random_bool(self.free_slot_probability);
                    }
                }
                free.push(week);
            }
        }

        let mut classes = Vec::with_capacity(self.classes);
        let mut requirements = Vec::new();
        let mut planted: HashSet<(usize, usize, usize)> = HashSet::new();

        for i in 0..self.classes {
            let number = format!("{}", 101 + i);
            let liberation_days: Vec<u8> = (1..=DAYS_PER_WEEK)
                .filter(|_| rng.random_bool(self.liberation_probability))
                .collect();
            classes.push(SchoolClass::new(&number).with_liberation_days(liberation_days));

            let mut days: Vec<usize> = (0..DAYS_PER_WEEK as usize).collect();
            days.shuffle(rng);
            let mut days = days.into_iter();

            for (s_idx, specialty) in specialties.iter().enumerate() {
                let wanted = rng.random_range(0..=self.max_weekly_count);
                let mut count = 0;
                for _ in 0..wanted {
                    let Some(day) = days.next() else {
                        break;
                    };
                    let first = s_idx * self.specialists_per_specialty;
                    let candidates = first..first + self.specialists_per_specialty;
                    if let Some((sp, period)) = plant(rng, candidates, day, &mut planted) {
                        free[sp][day][period] = true;
                        count += 1;
                    }
                }
                if count > 0 {
                    requirements.push(Requirement::new(&number, specialty, count));
                }
            }
        }

        for (specialist, week) in specialists.iter_mut().zip(&free) {
            let mut availability = WeeklyAvailability::new();
            for (d, periods) in week.iter().enumerate() {
                let free_periods = periods
                    .iter()
                    .enumerate()
                    .filter(|&(_, &is_free)| is_free)
                    .map(|(p, _)| p as u8 + 1);
                availability = availability.with_day(d as u8 + 1, free_periods);
            }
            specialist.availability = availability;
        }

        ScheduleRequest::new(classes, specialists, requirements)
    }
}

impl Default for InstanceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn probability(p: f64, fallback: f64) -> f64 {
    if p.is_nan() {
        fallback
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Reserves a random `(specialist, period)` on `day` not planted before.
fn plant<R: Rng>(
    rng: &mut R,
    candidates: std::ops::Range<usize>,
    day: usize,
    planted: &mut HashSet<(usize, usize, usize)>,
) -> Option<(usize, usize)> {
    let mut options: Vec<(usize, usize)> = candidates
        .flat_map(|sp| (0..PERIODS_PER_DAY as usize).map(move |p| (sp, p)))
        .filter(|&(sp, p)| !planted.contains(&(sp, day, p)))
        .collect();
    options.shuffle(rng);
    let (sp, p) = options.pop()?;
    planted.insert((sp, day, p));
    Some((sp, p))
}

fn specialty_name(idx: usize) -> String {
    SPECIALTY_NAMES
        .get(idx)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("Specialty {}", idx + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_input;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let request = InstanceGenerator::new()
            .with_classes(4)
            .with_specialties(2)
            .with_specialists_per_specialty(3)
            .generate(&mut rng);

        assert_eq!(request.classes.len(), 4);
        assert_eq!(request.specialists.len(), 6);
        assert_eq!(request.specialists[0].specialty, "Music");
        assert_eq!(request.specialists[3].specialty, "Art");
    }

    #[test]
    fn test_generated_input_is_valid() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let r = InstanceGenerator::new()
                .with_max_weekly_count(3)
                .with_liberation_probability(0.5)
                .generate(&mut rng);
            assert!(validate_input(&r.classes, &r.specialists, &r.requirements).is_ok());
        }
    }

    #[test]
    fn test_class_demand_fits_in_week() {
        let mut rng = StdRng::seed_from_u64(3);
        let r = InstanceGenerator::new()
            .with_specialties(6)
            .with_max_weekly_count(3)
            .generate(&mut rng);

        for class in &r.classes {
            let total: u32 = r
                .requirements
                .iter()
                .filter(|q| q.class_number == class.number)
                .map(|q| q.weekly_count)
                .sum();
            assert!(total <= u32::from(DAYS_PER_WEEK));
        }
    }

    #[test]
    fn test_same_seed_same_instance() {
        let g = InstanceGenerator::new();
        let a = g.generate(&mut StdRng::seed_from_u64(42));
        let b = g.generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.requirements, b.requirements);
        assert_eq!(a.specialists, b.specialists);
    }

    #[test]
    fn test_specialty_names_extend() {
        assert_eq!(specialty_name(0), "Music");
        assert_eq!(specialty_name(7), "Specialty 8");
    }

    #[test]
    fn test_nan_probability_keeps_previous() {
        let g = InstanceGenerator::new()
            .with_free_slot_probability(0.5)
            .with_free_slot_probability(f64::NAN)
            .with_liberation_probability(f64::NAN);
        assert_eq!(g.free_slot_probability, 0.5);
        assert_eq!(g.liberation_probability, 0.2);

        // Must not panic inside random_bool.
        let r = g.generate(&mut StdRng::seed_from_u64(3));
        assert_eq!(r.classes.len(), 6);
    }

    #[test]
    fn test_probability_clamped() {
        let g = InstanceGenerator::new()
            .with_free_slot_probability(1.7)
            .with_liberation_probability(-0.4);
        assert_eq!(g.free_slot_probability, 1.0);
        assert_eq!(g.liberation_probability, 0.0);
    }
}
