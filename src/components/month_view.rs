use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::calendar::{MonthGrid, Priority};
use crate::theme;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Width of one day cell, in columns. Hit-testing and rendering must
/// agree on this.
const CELL_W: u16 = 5;

pub struct MonthView;

impl MonthView {
    pub fn render(frame: &mut Frame, area: Rect, grid: &MonthGrid, selected_date: NaiveDate) {
        let title = format!(" {} {} ", month_name(grid.month), grid.year);

        let block = Block::default()
            .title(title)
            .title_style(theme::HEADER_STYLE)
            .borders(Borders::ALL)
            .border_style(theme::BORDER_STYLE);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Header row
        let header_cells: Vec<Span> = DAY_NAMES
            .iter()
            .map(|d| Span::styled(format!("{:^width$}", d, width = CELL_W as usize), theme::HEADER_STYLE))
            .collect();
        let header = Line::from(header_cells);

        // Build week rows: leading blank slots, then one slot per day.
        let mut weeks: Vec<Line> = Vec::new();
        let mut row: Vec<Span> = Vec::new();
        let total_slots = grid.leading_blanks + grid.cells.len();

        for slot in 0..total_slots {
            if slot < grid.leading_blanks {
                row.push(Span::raw(" ".repeat(CELL_W as usize)));
            } else {
                let cell = &grid.cells[slot - grid.leading_blanks];
                let count = cell.events.len();

                // "12*3 ": day number, event marker, event count.
                let day_str = if count == 0 {
                    format!("{:>2}   ", cell.day)
                } else {
                    format!("{:>2}*{} ", cell.day, count.min(9))
                };

                let is_selected = selected_date.year() == grid.year
                    && selected_date.month() == grid.month
                    && selected_date.day() == cell.day;

                let style = if cell.is_today && is_selected {
                    Style::default()
                        .fg(ratatui::style::Color::Black)
                        .bg(ratatui::style::Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else if is_selected {
                    theme::current().selected
                } else if cell.is_today {
                    theme::current().today
                } else if cell.events.first().map(|ev| ev.priority) == Some(Priority::High) {
                    theme::current().badge
                } else if count > 0 {
                    theme::current().accent
                } else {
                    Style::default()
                };

                row.push(Span::styled(day_str, style));
            }

            if row.len() == 7 {
                weeks.push(Line::from(std::mem::take(&mut row)));
            }
        }
        if !row.is_empty() {
            weeks.push(Line::from(row));
        }

        // Layout: header + weeks
        let mut constraints = vec![Constraint::Length(1)];
        for _ in &weeks {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(0));

        let rows = Layout::vertical(constraints).split(inner);

        frame.render_widget(Paragraph::new(header), rows[0]);
        for (i, week) in weeks.iter().enumerate() {
            frame.render_widget(Paragraph::new(week.clone()), rows[i + 1]);
        }
    }

    /// Map a screen position inside the rendered month block back to a
    /// day number. Header, blank, and out-of-range slots hit nothing.
    pub fn hit_test(area: Rect, grid: &MonthGrid, x: u16, y: u16) -> Option<u32> {
        let inner = inner_area(area);
        if x < inner.x || x >= inner.x + inner.width {
            return None;
        }
        // Row 0 of the inner area is the weekday header.
        if y <= inner.y || y >= inner.y + inner.height {
            return None;
        }

        let col = ((x - inner.x) / CELL_W) as usize;
        if col >= 7 {
            return None;
        }
        let week = (y - inner.y - 1) as usize;
        let slot = week * 7 + col;

        let day = (slot + 1).checked_sub(grid.leading_blanks)?;
        if (1..=grid.cells.len()).contains(&day) {
            Some(day as u32)
        } else {
            None
        }
    }

    /// Screen position of a day's cell, used to anchor the preview when
    /// a day is activated from the keyboard.
    pub fn cell_position(area: Rect, grid: &MonthGrid, day: u32) -> (u16, u16) {
        let inner = inner_area(area);
        let slot = grid.leading_blanks + day.saturating_sub(1) as usize;
        let col = (slot % 7) as u16;
        let week = (slot / 7) as u16;
        (inner.x + col * CELL_W + CELL_W / 2, inner.y + 1 + week)
    }
}

fn inner_area(area: Rect) -> Rect {
    Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feb_2024() -> MonthGrid {
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        MonthGrid::build(2024, 2, &[], today)
    }

    #[test]
    fn hit_test_finds_first_day_after_blanks() {
        let grid = feb_2024();
        let area = Rect::new(0, 0, 44, 10);
        // Inner origin (1,1); header row at y=1; first week row at y=2.
        // Feb 2024 starts on Thursday: columns 0..=3 are blanks.
        assert_eq!(MonthView::hit_test(area, &grid, 1 + 3 * CELL_W, 2), None);
        assert_eq!(MonthView::hit_test(area, &grid, 1 + 4 * CELL_W, 2), Some(1));
        assert_eq!(MonthView::hit_test(area, &grid, 1 + 6 * CELL_W, 2), Some(3));
    }

    #[test]
    fn hit_test_rejects_header_and_overflow() {
        let grid = feb_2024();
        let area = Rect::new(0, 0, 44, 10);
        assert_eq!(MonthView::hit_test(area, &grid, 6, 1), None);
        // Last cell is Feb 29 (week 4, col 4); the two slots after it are blank.
        assert_eq!(MonthView::hit_test(area, &grid, 1 + 4 * CELL_W, 6), Some(29));
        assert_eq!(MonthView::hit_test(area, &grid, 1 + 5 * CELL_W, 6), None);
    }

    #[test]
    fn cell_position_round_trips_through_hit_test() {
        let grid = feb_2024();
        let area = Rect::new(2, 3, 44, 12);
        for day in [1, 15, 29] {
            let (x, y) = MonthView::cell_position(area, &grid, day);
            assert_eq!(MonthView::hit_test(area, &grid, x, y), Some(day));
        }
    }
}
