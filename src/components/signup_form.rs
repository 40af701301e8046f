use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme;
use crate::user::SignUpProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Password,
    DobMonth,
    DobDay,
    DobYear,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::FirstName => FormField::LastName,
            FormField::LastName => FormField::Email,
            FormField::Email => FormField::Password,
            FormField::Password => FormField::DobMonth,
            FormField::DobMonth => FormField::DobDay,
            FormField::DobDay => FormField::DobYear,
            FormField::DobYear => FormField::FirstName,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::FirstName => FormField::DobYear,
            FormField::LastName => FormField::FirstName,
            FormField::Email => FormField::LastName,
            FormField::Password => FormField::Email,
            FormField::DobMonth => FormField::Password,
            FormField::DobDay => FormField::DobMonth,
            FormField::DobYear => FormField::DobDay,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignUpFormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub dob_month: String,
    pub dob_day: String,
    pub dob_year: String,
    pub active_field: FormField,
    /// Last rejection message from the auth service, shown verbatim.
    pub error: Option<String>,
}

impl SignUpFormState {
    pub fn new() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            dob_month: String::new(),
            dob_day: String::new(),
            dob_year: String::new(),
            active_field: FormField::FirstName,
            error: None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        match self.active_field {
            FormField::FirstName => self.first_name.push(c),
            FormField::LastName => self.last_name.push(c),
            FormField::Email => self.email.push(c),
            FormField::Password => self.password.push(c),
            FormField::DobMonth => push_digits(&mut self.dob_month, c, 2),
            FormField::DobDay => push_digits(&mut self.dob_day, c, 2),
            FormField::DobYear => push_digits(&mut self.dob_year, c, 4),
        }
    }

    pub fn backspace(&mut self) {
        match self.active_field {
            FormField::FirstName => {
                self.first_name.pop();
            }
            FormField::LastName => {
                self.last_name.pop();
            }
            FormField::Email => {
                self.email.pop();
            }
            FormField::Password => {
                self.password.pop();
            }
            FormField::DobMonth => {
                self.dob_month.pop();
            }
            FormField::DobDay => {
                self.dob_day.pop();
            }
            FormField::DobYear => {
                self.dob_year.pop();
            }
        }
    }

    pub fn tab(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn backtab(&mut self) {
        self.active_field = self.active_field.prev();
    }

    pub fn parsed_dob(&self) -> Option<NaiveDate> {
        let year = self.dob_year.parse().ok()?;
        let month = self.dob_month.parse().ok()?;
        let day = self.dob_day.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    pub fn is_valid(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && self.email.contains('@')
            && !self.password.is_empty()
            && self.parsed_dob().is_some()
    }

    pub fn profile(&self) -> SignUpProfile {
        SignUpProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            dob_month: self.dob_month.clone(),
            dob_day: self.dob_day.clone(),
            dob_year: self.dob_year.clone(),
        }
    }
}

fn push_digits(buf: &mut String, c: char, max_len: usize) {
    if c.is_ascii_digit() && buf.len() < max_len {
        buf.push(c);
    }
}

pub struct SignUpForm;

impl SignUpForm {
    pub fn render(frame: &mut Frame, area: Rect, state: &SignUpFormState) {
        let form_w = area.width.min(54).max(34);
        let form_h = area.height.min(17).max(13);
        let x = area.x + (area.width.saturating_sub(form_w)) / 2;
        let y = area.y + (area.height.saturating_sub(form_h)) / 2;
        let form_area = Rect::new(x, y, form_w, form_h);

        let block = Block::default()
            .title(" Join LearnHub ")
            .title_style(theme::current().accent)
            .borders(Borders::ALL)
            .border_style(theme::current().accent);

        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let rows = Layout::vertical([
            Constraint::Length(1), // tagline
            Constraint::Length(1), // google
            Constraint::Length(1), // divider
            Constraint::Length(1), // first name
            Constraint::Length(1), // last name
            Constraint::Length(1), // email
            Constraint::Length(1), // password
            Constraint::Length(1), // date of birth
            Constraint::Length(1), // spacer
            Constraint::Length(1), // error
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Learn. Connect. Collaborate.",
                theme::HEADER_STYLE,
            )),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Ctrl+G", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(": Continue with Google", theme::current().dim),
            ])),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new(Span::styled("-- Or continue with email --", theme::DIM_STYLE)),
            rows[2],
        );

        render_field(
            frame,
            rows[3],
            "First:",
            &state.first_name,
            state.active_field == FormField::FirstName,
        );
        render_field(
            frame,
            rows[4],
            "Last:",
            &state.last_name,
            state.active_field == FormField::LastName,
        );
        render_field(
            frame,
            rows[5],
            "Email:",
            &state.email,
            state.active_field == FormField::Email,
        );
        let masked = "*".repeat(state.password.chars().count());
        render_field(
            frame,
            rows[6],
            "Pass:",
            &masked,
            state.active_field == FormField::Password,
        );
        render_dob_row(frame, rows[7], state);

        if let Some(ref error) = state.error {
            frame.render_widget(
                Paragraph::new(Span::styled(error.clone(), theme::current().error)),
                rows[9],
            );
        }

        let help = Line::from(vec![
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Next ", theme::current().dim),
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Submit ", theme::current().dim),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Back", theme::current().dim),
        ]);
        frame.render_widget(Paragraph::new(help), rows[10]);
    }
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, active: bool) {
    let cursor = if active { "_" } else { "" };

    let style = if active {
        theme::current().accent
    } else {
        Style::default()
    };

    let spans = vec![
        Span::styled(format!("{:<7}", label), theme::current().dim),
        Span::styled(format!("{}{}", value, cursor), style),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_dob_row(frame: &mut Frame, area: Rect, state: &SignUpFormState) {
    let part = |value: &str, placeholder: &str, active: bool| {
        let shown = if value.is_empty() && !active {
            placeholder.to_string()
        } else {
            format!("{}{}", value, if active { "_" } else { "" })
        };
        let style = if active {
            theme::current().accent
        } else if value.is_empty() {
            theme::current().dim
        } else {
            Style::default()
        };
        Span::styled(shown, style)
    };

    let spans = vec![
        Span::styled(format!("{:<7}", "Birth:"), theme::current().dim),
        part(&state.dob_month, "MM", state.active_field == FormField::DobMonth),
        Span::raw(" / "),
        part(&state.dob_day, "DD", state.active_field == FormField::DobDay),
        Span::raw(" / "),
        part(&state.dob_year, "YYYY", state.active_field == FormField::DobYear),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignUpFormState {
        let mut state = SignUpFormState::new();
        state.first_name = "Ada".to_string();
        state.last_name = "Lovelace".to_string();
        state.email = "ada@example.com".to_string();
        state.password = "analytical".to_string();
        state.dob_month = "12".to_string();
        state.dob_day = "10".to_string();
        state.dob_year = "1995".to_string();
        state
    }

    #[test]
    fn tab_cycles_through_every_field() {
        let mut state = SignUpFormState::new();
        let mut seen = vec![state.active_field];
        for _ in 0..6 {
            state.tab();
            seen.push(state.active_field);
        }
        seen.sort_by_key(|f| *f as u8);
        seen.dedup();
        assert_eq!(seen.len(), 7);
        state.tab();
        assert_eq!(state.active_field, FormField::FirstName);
    }

    #[test]
    fn backtab_reverses_tab() {
        let mut state = SignUpFormState::new();
        state.tab();
        state.backtab();
        assert_eq!(state.active_field, FormField::FirstName);
        state.backtab();
        assert_eq!(state.active_field, FormField::DobYear);
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(filled().is_valid());
    }

    #[test]
    fn missing_or_malformed_fields_invalidate() {
        let mut state = filled();
        state.email = "ada.example.com".to_string();
        assert!(!state.is_valid());

        let mut state = filled();
        state.first_name = "  ".to_string();
        assert!(!state.is_valid());

        // Feb 30 is not a calendar date.
        let mut state = filled();
        state.dob_month = "02".to_string();
        state.dob_day = "30".to_string();
        assert!(!state.is_valid());
    }

    #[test]
    fn dob_fields_accept_digits_only() {
        let mut state = SignUpFormState::new();
        state.active_field = FormField::DobYear;
        for c in "19x95a".chars() {
            state.input_char(c);
        }
        assert_eq!(state.dob_year, "1995");
        state.input_char('2');
        assert_eq!(state.dob_year, "1995", "capped at four digits");
    }
}
