use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::calendar::{Event, Priority};
use crate::theme;

/// Event list for the selected day, shown beside the month grid on wide
/// terminals.
pub struct Agenda;

impl Agenda {
    pub fn render(frame: &mut Frame, area: Rect, date: NaiveDate, events: &[Event]) {
        let w = area.width as usize;

        let title = if w >= 30 {
            format!(" {} ", date.format("%A, %B %d, %Y"))
        } else if w >= 18 {
            format!(" {} ", date.format("%b %d, %Y"))
        } else {
            format!(" {} ", date.format("%m/%d"))
        };

        let count_str = if events.is_empty() {
            String::new()
        } else {
            let n = events.len();
            format!(" {} event{} ", n, if n == 1 { "" } else { "s" })
        };

        let block = Block::default()
            .title(title)
            .title_style(theme::HEADER_STYLE)
            .title_bottom(Line::from(Span::styled(count_str, theme::DIM_STYLE)))
            .borders(Borders::ALL)
            .border_style(theme::BORDER_STYLE);

        if events.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No events scheduled").style(theme::DIM_STYLE);
            frame.render_widget(msg, inner);
            return;
        }

        let items: Vec<ListItem> = events.iter().map(format_event).collect();
        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }
}

fn format_event(ev: &Event) -> ListItem<'static> {
    let time_span = Span::styled(
        format!(" {} ", ev.time_display()),
        Style::default().add_modifier(Modifier::DIM),
    );
    let title_span = Span::styled(ev.title.clone(), Style::default());

    let mut spans = vec![time_span, title_span];

    if ev.priority == Priority::High {
        spans.push(Span::styled(" [high]", theme::current().badge));
    }
    if ev.requires_sign_up {
        spans.push(Span::styled(" (sign-up required)", theme::DIM_STYLE));
    }

    ListItem::new(Line::from(spans))
}
