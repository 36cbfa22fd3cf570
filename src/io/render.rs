//! Timetable rendering.
//!
//! Writes a finished grid as CSV: one block per class, periods as rows and
//! days as columns, each occupied cell showing the specialist's name.

use std::io;

use crate::error::LoadResult;
use crate::models::{ScheduleGrid, DAYS_PER_WEEK, PERIODS_PER_DAY};

/// Renders the grid as CSV blocks, classes in grid order.
///
/// Block layout:
/// ```text
/// Class 101,Day 1,Day 2,Day 3,Day 4,Day 5
/// Period 1,,Ms. Tremblay,,,
/// ...
/// Period 5,,,,,
/// ```
pub fn render_grid<W: io::Write>(writer: W, grid: &ScheduleGrid) -> LoadResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for class in grid {
        let mut header = vec![format!("Class {}", class.class_number)];
        header.extend((1..=DAYS_PER_WEEK).map(|d| format!("Day {d}")));
        wtr.write_record(&header)?;

        for period in 1..=PERIODS_PER_DAY {
            let mut row = vec![format!("Period {period}")];
            row.extend((1..=DAYS_PER_WEEK).map(|day| {
                class
                    .cell(day, period)
                    .map(|a| a.specialist.clone())
                    .unwrap_or_default()
            }));
            wtr.write_record(&row)?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    #[test]
    fn test_render_single_class() {
        let mut grid = ScheduleGrid::new(["101"]);
        grid.place(0, &Availability::new("Ms. Tremblay", "Music", 3, 2))
            .keep();

        let mut buf = Vec::new();
        render_grid(&mut buf, &grid).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Class 101,Day 1,Day 2,Day 3,Day 4,Day 5");
        assert_eq!(lines[1], "Period 1,,,,,");
        assert_eq!(lines[2], "Period 2,,,Ms. Tremblay,,");
    }

    #[test]
    fn test_render_blocks_in_grid_order() {
        let grid = ScheduleGrid::new(["102", "101"]);
        let mut buf = Vec::new();
        render_grid(&mut buf, &grid).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let headers: Vec<&str> = text.lines().filter(|l| l.starts_with("Class")).collect();
        assert_eq!(headers.len(), 2);
        assert!(headers[0].starts_with("Class 102"));
        assert!(headers[1].starts_with("Class 101"));
    }

    #[test]
    fn test_render_empty_grid() {
        let mut buf = Vec::new();
        render_grid(&mut buf, &ScheduleGrid::default()).unwrap();
        assert!(buf.is_empty());
    }
}
