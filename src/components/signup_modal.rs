use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptChoice {
    #[default]
    SignUpNow,
    MaybeLater,
}

impl PromptChoice {
    pub fn toggle(&mut self) {
        *self = match self {
            PromptChoice::SignUpNow => PromptChoice::MaybeLater,
            PromptChoice::MaybeLater => PromptChoice::SignUpNow,
        };
    }
}

/// State of the "Get Full Calendar Access" prompt that gates sign-up-only
/// events.
#[derive(Debug, Clone, Default)]
pub struct SignUpPromptState {
    pub choice: PromptChoice,
}

pub struct SignUpPrompt;

impl SignUpPrompt {
    pub fn render(frame: &mut Frame, area: Rect, state: &SignUpPromptState) {
        let popup_w = area.width.min(56).max(36);
        let popup_h = area.height.min(13).max(9);
        let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Get Full Calendar Access ")
            .title_style(theme::current().accent)
            .borders(Borders::ALL)
            .border_style(theme::current().accent);

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines = vec![
            Line::from(
                "Sign up now to unlock all features and start managing your schedule effectively.",
            ),
            Line::from(""),
            Line::from(Span::styled("  * Unlimited events and reminders", theme::DIM_STYLE)),
            Line::from(Span::styled("  * Real-time study group scheduling", theme::DIM_STYLE)),
            Line::from(Span::styled("  * Sync across all your devices", theme::DIM_STYLE)),
            Line::from(""),
        ];

        lines.push(Line::from(vec![
            button("[ Sign Up Now ]", state.choice == PromptChoice::SignUpNow),
            Span::raw("  "),
            button("[ Maybe Later ]", state.choice == PromptChoice::MaybeLater),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Tab/arrows: choose  Enter: select  Esc: close",
            theme::DIM_STYLE,
        )));

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(para, inner);
    }
}

fn button(label: &str, active: bool) -> Span<'static> {
    let style = if active {
        theme::current().selected.add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Span::styled(label.to_string(), style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_toggles_both_ways() {
        let mut state = SignUpPromptState::default();
        assert_eq!(state.choice, PromptChoice::SignUpNow);
        state.choice.toggle();
        assert_eq!(state.choice, PromptChoice::MaybeLater);
        state.choice.toggle();
        assert_eq!(state.choice, PromptChoice::SignUpNow);
    }
}
