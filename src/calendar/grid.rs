use chrono::{Datelike, NaiveDate};

use super::event::Event;

/// One month of day cells with their attached events.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Placeholder cells before day 1, equal to the weekday index of
    /// day 1 (0=Sunday..6=Saturday).
    pub leading_blanks: usize,
    pub cells: Vec<DayCell>,
}

#[derive(Debug, Clone)]
pub struct DayCell {
    pub day: u32,
    pub key: String,
    pub events: Vec<Event>,
    pub is_today: bool,
}

impl MonthGrid {
    pub fn build(year: i32, month: u32, events: &[Event], today: NaiveDate) -> Self {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let leading_blanks = first_day.weekday().num_days_from_sunday() as usize;

        let cells = (1..=days_in_month(year, month))
            .map(|day| {
                let key = date_key(year, month, day);
                let day_events: Vec<Event> = events
                    .iter()
                    .filter(|ev| ev.date == key)
                    .cloned()
                    .collect();
                let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
                DayCell {
                    day,
                    key,
                    events: day_events,
                    // Full-date comparison: browsing another month must
                    // never mark a false "today".
                    is_today: date == today,
                }
            })
            .collect();

        Self {
            year,
            month,
            leading_blanks,
            cells,
        }
    }

    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        self.cells.get(day.checked_sub(1)? as usize)
    }
}

/// Canonical `YYYY-MM-DD` date key, zero-padded.
pub fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .unwrap()
    .signed_duration_since(NaiveDate::from_ymd_opt(year, month, 1).unwrap())
    .num_days() as u32
}

/// What a click on a day with events should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAction {
    OpenSignUp,
    ShowPreview,
}

/// Partition a day's events: one gated event gates the whole day, unless
/// the viewer is already signed in. Empty days do nothing.
pub fn classify_day(events: &[Event], signed_in: bool) -> Option<DayAction> {
    if events.is_empty() {
        None
    } else if !signed_in && events.iter().any(|ev| ev.requires_sign_up) {
        Some(DayAction::OpenSignUp)
    } else {
        Some(DayAction::ShowPreview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::event::Priority;

    fn event(id: u32, date: &str, requires_sign_up: bool) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            time: "3:00 PM".to_string(),
            date: date.to_string(),
            priority: Priority::Medium,
            requires_sign_up,
        }
    }

    #[test]
    fn leap_february_has_29_cells_and_4_blanks() {
        // Feb 1, 2024 is a Thursday.
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let grid = MonthGrid::build(2024, 2, &[], today);
        assert_eq!(grid.cells.len(), 29);
        assert_eq!(grid.leading_blanks, 4);
    }

    #[test]
    fn cell_count_matches_days_in_month() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        for (year, month, days) in [(2025, 4, 30), (2025, 12, 31), (2023, 2, 28)] {
            let grid = MonthGrid::build(year, month, &[], today);
            assert_eq!(grid.cells.len(), days, "{}-{}", year, month);
            assert_eq!(days_in_month(year, month), days as u32);
        }
    }

    #[test]
    fn exact_key_match_attaches_event() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let events = vec![
            event(1, "2024-02-09", false),
            event(2, "2024-03-09", false),
            event(3, "2024-2-9", false), // wrong padding never matches
        ];
        let grid = MonthGrid::build(2024, 2, &events, today);
        let cell = grid.cell(9).unwrap();
        assert_eq!(cell.key, "2024-02-09");
        assert_eq!(cell.events.len(), 1);
        assert_eq!(cell.events[0].id, 1);
    }

    #[test]
    fn today_flag_requires_full_date_match() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let displayed = MonthGrid::build(2024, 4, &[], today);
        // Same day-of-month in another month must not highlight.
        assert!(!displayed.cell(15).unwrap().is_today);
        let current = MonthGrid::build(2024, 5, &[], today);
        assert!(current.cell(15).unwrap().is_today);
    }

    #[test]
    fn any_gated_event_gates_the_whole_day() {
        let day = vec![
            event(1, "2024-02-09", false),
            event(2, "2024-02-09", true),
            event(3, "2024-02-09", false),
        ];
        assert_eq!(classify_day(&day, false), Some(DayAction::OpenSignUp));
    }

    #[test]
    fn ungated_day_opens_preview() {
        let day = vec![event(1, "2024-02-09", false)];
        assert_eq!(classify_day(&day, false), Some(DayAction::ShowPreview));
        assert_eq!(classify_day(&[], false), None);
    }

    #[test]
    fn signed_in_viewer_is_never_gated() {
        let day = vec![event(1, "2024-02-09", true)];
        assert_eq!(classify_day(&day, true), Some(DayAction::ShowPreview));
    }

    #[test]
    fn priorities_are_ordered() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }
}
