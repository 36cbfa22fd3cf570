//! Input validation for specialist timetabling.
//!
//! Checks the structural integrity of classes, specialists, and
//! requirements at the load boundary, before any search. Detects:
//! - Duplicate class numbers and specialist names
//! - Days and periods outside the week
//! - Repeated liberation days or free periods
//! - Requirements naming a class that does not exist

use crate::models::{Requirement, SchoolClass, Specialist, DAYS_PER_WEEK, PERIODS_PER_DAY};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same identifier.
    DuplicateId,
    /// A day is outside `1..=DAYS_PER_WEEK`.
    InvalidDay,
    /// A period is outside `1..=PERIODS_PER_DAY`.
    InvalidPeriod,
    /// The same liberation day or free period is listed twice.
    DuplicateSlot,
    /// A requirement references a class that doesn't exist.
    InvalidClassReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the input data for a timetabling run.
///
/// Checks:
/// 1. No duplicate class numbers
/// 2. No duplicate specialist names
/// 3. Liberation days within the week, each listed once per class
/// 4. Specialist weeks no longer than the week, periods within the day,
///    each listed once per day
/// 5. All requirements reference existing classes
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    classes: &[SchoolClass],
    specialists: &[Specialist],
    requirements: &[Requirement],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut class_numbers = HashSet::new();
    for class in classes {
        if !class_numbers.insert(class.number.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate class number: {}", class.number),
            ));
        }

        let mut seen_days = HashSet::new();
        for &day in &class.liberation_days {
            if !(1..=DAYS_PER_WEEK).contains(&day) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDay,
                    format!(
                        "Class '{}' has liberation day {day} outside 1..={DAYS_PER_WEEK}",
                        class.number
                    ),
                ));
            } else if !seen_days.insert(day) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSlot,
                    format!("Class '{}' lists liberation day {day} twice", class.number),
                ));
            }
        }
    }

    let mut specialist_names = HashSet::new();
    for specialist in specialists {
        if !specialist_names.insert(specialist.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate specialist name: {}", specialist.name),
            ));
        }
        check_week(specialist, &mut errors);
    }

    for req in requirements {
        if !class_numbers.contains(req.class_number.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidClassReference,
                format!(
                    "Requirement for '{}' references unknown class '{}'",
                    req.specialty, req.class_number
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_week(specialist: &Specialist, errors: &mut Vec<ValidationError>) {
    let days = &specialist.availability.days;
    if days.len() > usize::from(DAYS_PER_WEEK) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDay,
            format!(
                "Specialist '{}' declares {} days, the week has {DAYS_PER_WEEK}",
                specialist.name,
                days.len()
            ),
        ));
    }

    for (idx, periods) in days.iter().enumerate() {
        let day = idx + 1;
        let mut seen = HashSet::new();
        for &period in periods {
            if !(1..=PERIODS_PER_DAY).contains(&period) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPeriod,
                    format!(
                        "Specialist '{}' has period {period} on day {day} outside 1..={PERIODS_PER_DAY}",
                        specialist.name
                    ),
                ));
            } else if !seen.insert(period) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSlot,
                    format!(
                        "Specialist '{}' lists period {period} twice on day {day}",
                        specialist.name
                    ),
                ));
            }
        }
    }
}
