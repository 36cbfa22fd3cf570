//! CSV record schemas for classes, specialists, and requirements.
//!
//! Each schema is an explicit serde record. Headers are English; the
//! French headers of the school's original spreadsheets are accepted as
//! aliases. List fields ("1,3") hold comma-separated integers and may be
//! empty.

use std::io;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LoadError, LoadResult};
use crate::models::{Requirement, SchoolClass, Specialist, WeeklyAvailability};

#[derive(Debug, Deserialize, Serialize)]
struct ClassRecord {
    #[serde(rename = "class", alias = "Numéro Classe")]
    class: String,
    #[serde(rename = "liberation_days", alias = "Libérations", default)]
    liberation_days: String,
}

#[derive(Debug, Deserialize, Serialize)]
struct RequirementRecord {
    #[serde(rename = "class", alias = "Classe")]
    class: String,
    #[serde(rename = "specialty", alias = "Specialité")]
    specialty: String,
    #[serde(rename = "weekly_count", alias = "Requis par semaine")]
    weekly_count: u32,
}

#[derive(Debug, Deserialize, Serialize)]
struct SpecialistRecord {
    #[serde(rename = "name", alias = "Nom")]
    name: String,
    #[serde(rename = "specialty", alias = "Specialité")]
    specialty: String,
    #[serde(rename = "day_1", alias = "Disponibilité Jour 1", default)]
    day_1: String,
    #[serde(rename = "day_2", alias = "Disponibilité Jour 2", default)]
    day_2: String,
    #[serde(rename = "day_3", alias = "Disponibilité Jour 3", default)]
    day_3: String,
    #[serde(rename = "day_4", alias = "Disponibilité Jour 4", default)]
    day_4: String,
    #[serde(rename = "day_5", alias = "Disponibilité Jour 5", default)]
    day_5: String,
    #[serde(rename = "notes", alias = "Notes", default)]
    notes: Option<String>,
}

/// Reads classes from CSV.
pub fn read_classes<R: io::Read>(reader: R) -> LoadResult<Vec<SchoolClass>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut classes = Vec::new();
    for (idx, result) in rdr.deserialize::<ClassRecord>().enumerate() {
        let record = result?;
        let row = idx + 2;
        let days = parse_number_list(&record.liberation_days, row, "liberation_days")?;
        classes.push(SchoolClass::new(record.class).with_liberation_days(days));
    }
    debug!(count = classes.len(), "read classes");
    Ok(classes)
}

/// Reads aggregate requirements from CSV.
pub fn read_requirements<R: io::Read>(reader: R) -> LoadResult<Vec<Requirement>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut requirements = Vec::new();
    for result in rdr.deserialize::<RequirementRecord>() {
        let record = result?;
        requirements.push(Requirement::new(
            record.class,
            record.specialty,
            record.weekly_count,
        ));
    }
    debug!(count = requirements.len(), "read requirements");
    Ok(requirements)
}

/// Reads specialists from CSV.
pub fn read_specialists<R: io::Read>(reader: R) -> LoadResult<Vec<Specialist>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut specialists = Vec::new();
    for (idx, result) in rdr.deserialize::<SpecialistRecord>().enumerate() {
        let record = result?;
        let row = idx + 2;

        let columns = [
            ("day_1", &record.day_1),
            ("day_2", &record.day_2),
            ("day_3", &record.day_3),
            ("day_4", &record.day_4),
            ("day_5", &record.day_5),
        ];
        let mut availability = WeeklyAvailability::new();
        for (day, (field, value)) in (1u8..).zip(columns) {
            availability = availability.with_day(day, parse_number_list(value, row, field)?);
        }

        let mut specialist =
            Specialist::new(record.name, record.specialty).with_availability(availability);
        if let Some(notes) = record.notes.filter(|n| !n.trim().is_empty()) {
            specialist = specialist.with_notes(notes);
        }
        specialists.push(specialist);
    }
    debug!(count = specialists.len(), "read specialists");
    Ok(specialists)
}

/// Writes classes as CSV.
pub fn write_classes<W: io::Write>(writer: W, classes: &[SchoolClass]) -> LoadResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for class in classes {
        wtr.serialize(ClassRecord {
            class: class.number.clone(),
            liberation_days: join_numbers(&class.liberation_days),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes aggregate requirements as CSV.
pub fn write_requirements<W: io::Write>(writer: W, requirements: &[Requirement]) -> LoadResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for req in requirements {
        wtr.serialize(RequirementRecord {
            class: req.class_number.clone(),
            specialty: req.specialty.clone(),
            weekly_count: req.weekly_count,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes specialists as CSV.
pub fn write_specialists<W: io::Write>(writer: W, specialists: &[Specialist]) -> LoadResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for s in specialists {
        let day = |d: u8| join_numbers(s.availability.periods_on(d));
        wtr.serialize(SpecialistRecord {
            name: s.name.clone(),
            specialty: s.specialty.clone(),
            day_1: day(1),
            day_2: day(2),
            day_3: day(3),
            day_4: day(4),
            day_5: day(5),
            notes: s.notes.clone(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Parses "1, 3,5" into `[1, 3, 5]`. Empty entries are skipped.
fn parse_number_list(value: &str, row: usize, field: &str) -> LoadResult<Vec<u8>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u8>().map_err(|_| LoadError::InvalidNumber {
                row,
                field: field.to_string(),
                value: part.to_string(),
            })
        })
        .collect()
}

fn join_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_classes() {
        let data = "class,liberation_days\n101,\"1,3\"\n102,\n";
        let classes = read_classes(data.as_bytes()).unwrap();

        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].number, "101");
        assert_eq!(classes[0].liberation_days, vec![1, 3]);
        assert!(classes[1].liberation_days.is_empty());
    }

    #[test]
    fn test_read_classes_french_headers() {
        let data = "Titulaire,Numéro Classe,Libérations\nMme Côté,4B,2\n";
        let classes = read_classes(data.as_bytes()).unwrap();
        assert_eq!(classes[0].number, "4B");
        assert_eq!(classes[0].liberation_days, vec![2]);
    }

    #[test]
    fn test_read_requirements() {
        let data = "Classe,Specialité,Requis par semaine\n101,Musique,2\n102,Arts,0\n";
        let reqs = read_requirements(data.as_bytes()).unwrap();
        assert_eq!(
            reqs,
            vec![
                Requirement::new("101", "Musique", 2),
                Requirement::new("102", "Arts", 0),
            ]
        );
    }

    #[test]
    fn test_read_requirements_bad_count() {
        let data = "class,specialty,weekly_count\n101,Music,two\n";
        let err = read_requirements(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_read_specialists() {
        let data = "name,specialty,day_1,day_2,day_3,day_4,day_5,notes\n\
                    Ms. Tremblay,Music,1,,\"2, 4\",,5,\n\
                    Mr. Roy,Art,,,,,,part-time\n";
        let specialists = read_specialists(data.as_bytes()).unwrap();

        assert_eq!(specialists.len(), 2);
        let t = &specialists[0];
        assert_eq!(t.availability.periods_on(1), &[1]);
        assert!(t.availability.periods_on(2).is_empty());
        assert_eq!(t.availability.periods_on(3), &[2, 4]);
        assert_eq!(t.availability.slot_count(), 4);
        assert!(t.notes.is_none());
        assert_eq!(specialists[1].notes.as_deref(), Some("part-time"));
    }

    #[test]
    fn test_read_specialists_bad_period() {
        let data = "name,specialty,day_1,day_2,day_3,day_4,day_5\nMr. Roy,Art,1,x,,,\n";
        let err = read_specialists(data.as_bytes()).unwrap_err();
        match err {
            LoadError::InvalidNumber { row, field, value } => {
                assert_eq!(row, 2);
                assert_eq!(field, "day_2");
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_write_then_read_specialists() {
        let specialists = vec![Specialist::new("Ms. Tremblay", "Music")
            .with_day(2, [1, 5])
            .with_notes("mornings")];

        let mut buf = Vec::new();
        write_specialists(&mut buf, &specialists).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("name,specialty,day_1,day_2,day_3,day_4,day_5,notes\n"));

        assert_eq!(read_specialists(buf.as_slice()).unwrap(), specialists);
    }

    #[test]
    fn test_write_classes() {
        let mut buf = Vec::new();
        write_classes(&mut buf, &[SchoolClass::new("101").with_liberation_days([1, 4])]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "class,liberation_days\n101,\"1,4\"\n"
        );
    }

    #[test]
    fn test_parse_number_list() {
        assert_eq!(parse_number_list(" 1, 3 ,,5", 2, "f").unwrap(), vec![1, 3, 5]);
        assert!(parse_number_list("", 2, "f").unwrap().is_empty());
        assert!(parse_number_list("1,-2", 2, "f").is_err());
    }
}
