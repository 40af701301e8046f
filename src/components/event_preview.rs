use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::calendar::Event;
use crate::theme;

/// Events shown in full before the overflow line takes over.
const MAX_SHOWN: usize = 2;
const POPUP_W: u16 = 34;

/// Lightweight overlay for a day's sign-up-free events, anchored at the
/// click position.
#[derive(Debug, Clone)]
pub struct EventPreviewState {
    pub events: Vec<Event>,
    pub x: u16,
    pub y: u16,
}

pub struct EventPreview;

impl EventPreview {
    pub fn render(frame: &mut Frame, area: Rect, state: &EventPreviewState) {
        let shown = state.events.iter().take(MAX_SHOWN);
        let overflow = overflow_count(state.events.len());

        let mut lines: Vec<Line> = Vec::new();
        for ev in shown {
            lines.push(Line::from(Span::styled(
                ev.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", ev.time_display()),
                theme::DIM_STYLE,
            )));
        }
        if overflow > 0 {
            lines.push(Line::from(Span::styled(
                format!("+{} more events", overflow),
                theme::DIM_STYLE,
            )));
        }

        let popup_h = lines.len() as u16 + 2;
        let popup = anchor(area, state.x, state.y, POPUP_W, popup_h);

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::current().accent);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

pub fn overflow_count(total: usize) -> usize {
    total.saturating_sub(MAX_SHOWN)
}

/// Place a `w` x `h` popup above the anchor point, horizontally centred
/// on it and clamped so it stays inside `area`.
pub fn anchor(area: Rect, x: u16, y: u16, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    let max_x = area.x + area.width - w;
    let max_y = area.y + area.height - h;
    let left = x.saturating_sub(w / 2).clamp(area.x, max_x);
    let top = y.saturating_sub(h).clamp(area.y, max_y);
    Rect::new(left, top, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_counts_past_two() {
        assert_eq!(overflow_count(0), 0);
        assert_eq!(overflow_count(2), 0);
        assert_eq!(overflow_count(5), 3);
    }

    #[test]
    fn anchor_sits_above_the_click() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = anchor(area, 40, 12, 30, 6);
        assert_eq!(rect, Rect::new(25, 6, 30, 6));
    }

    #[test]
    fn anchor_clamps_to_the_frame() {
        let area = Rect::new(0, 0, 80, 24);
        // Top-left corner click: cannot centre or go above.
        assert_eq!(anchor(area, 0, 0, 30, 6), Rect::new(0, 0, 30, 6));
        // Bottom-right corner click stays inside.
        let rect = anchor(area, 79, 23, 30, 6);
        assert!(rect.x + rect.width <= 80);
        assert!(rect.y + rect.height <= 24);
    }

    #[test]
    fn anchor_shrinks_oversized_popups() {
        let area = Rect::new(0, 0, 20, 4);
        let rect = anchor(area, 10, 2, 34, 8);
        assert_eq!((rect.width, rect.height), (20, 4));
    }
}
