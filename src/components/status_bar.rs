use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Page};
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let w = area.width as usize;

        let page_str = match app.page {
            Page::Landing => "[1]Home",
            Page::Calendar => "[2]Calendar",
            Page::SignUp => "[3]Sign Up",
        };

        let account = match app.signed_in {
            Some(ref user) => format!(" {}", user.email),
            None => String::new(),
        };

        // Show status message if present, otherwise context-aware hints
        let right_text = if let Some(ref msg) = app.status_message {
            format!(" {} ", msg)
        } else {
            match app.page {
                Page::Calendar if w >= 80 => {
                    " hjkl:Nav [/]:Month t:Today Enter/click:Events ?:Help q:Quit".to_string()
                }
                Page::Calendar if w >= 50 => " arrows:Nav [/]:Mon t:Today q:Quit".to_string(),
                Page::Landing if w >= 60 => {
                    " h/l:Slides 2:Calendar 3:Sign up ?:Help q:Quit".to_string()
                }
                Page::SignUp if w >= 60 => " Tab:Next Enter:Submit Esc:Back".to_string(),
                _ => " ?:Help q:Quit".to_string(),
            }
        };

        let left = format!(" {}{} ", page_str, account);
        let padding_len = w.saturating_sub(left.len() + right_text.len());
        let padding = " ".repeat(padding_len);

        let line = Line::from(vec![
            Span::styled(left, theme::current().status),
            Span::styled(padding, theme::current().status),
            Span::styled(right_text, theme::current().status),
        ]);

        let bar = Paragraph::new(line).style(theme::current().status);
        frame.render_widget(bar, area);
    }
}
