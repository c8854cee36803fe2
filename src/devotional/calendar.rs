use super::months::MonthEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// Before the sample day, shown as completed.
    Past,
    Current,
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day { number: u32, status: DayStatus },
}

pub fn classify(day: u32, current: u32) -> DayStatus {
    match day.cmp(&current) {
        std::cmp::Ordering::Less => DayStatus::Past,
        std::cmp::Ordering::Equal => DayStatus::Current,
        std::cmp::Ordering::Greater => DayStatus::Future,
    }
}

/// Leading blanks followed by every day of the month, in reading order.
pub fn calendar_cells(month: &MonthEntry) -> Vec<CalendarCell> {
    let current = month.sample_day.day_number;
    let blanks = (0..month.first_weekday_offset).map(|_| CalendarCell::Blank);
    let days = (1..=month.days_in_month).map(|number| CalendarCell::Day {
        number,
        status: classify(number, current),
    });
    blanks.chain(days).collect()
}

/// The same cells wrapped into weeks. The last week may be short.
pub fn calendar_rows(month: &MonthEntry) -> Vec<Vec<CalendarCell>> {
    calendar_cells(month)
        .chunks(7)
        .map(|week| week.to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devotional::months::MONTHS;

    #[test]
    fn february_starts_on_saturday() {
        let cells = calendar_cells(&MONTHS[0]);
        assert_eq!(cells.len(), 6 + 28);
        assert!(cells[..6].iter().all(|c| *c == CalendarCell::Blank));
        assert_eq!(
            cells[6],
            CalendarCell::Day {
                number: 1,
                status: DayStatus::Past
            }
        );
    }

    #[test]
    fn every_day_is_classified_against_the_sample_day() {
        for month in MONTHS.iter() {
            let current = month.sample_day.day_number;
            for cell in calendar_cells(month) {
                if let CalendarCell::Day { number, status } = cell {
                    assert_eq!(status == DayStatus::Current, number == current);
                    assert_eq!(status == DayStatus::Past, number < current);
                    assert_eq!(status == DayStatus::Future, number > current);
                }
            }
        }
    }

    #[test]
    fn rows_hold_seven_cells_except_the_last() {
        let rows = calendar_rows(&MONTHS[1]);
        // 6 blanks + 31 days = 37 cells
        assert_eq!(rows.len(), 6);
        assert!(rows[..5].iter().all(|r| r.len() == 7));
        assert_eq!(rows[5].len(), 2);
    }

    #[test]
    fn april_has_two_leading_blanks() {
        let rows = calendar_rows(&MONTHS[2]);
        assert_eq!(rows[0][..2], [CalendarCell::Blank, CalendarCell::Blank]);
        assert_eq!(
            rows[1][6],
            CalendarCell::Day {
                number: 12,
                status: DayStatus::Future
            }
        );
    }
}
