use std::time::{Duration, Instant};

use chrono::Datelike;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};

use learnhub::app::{App, InputMode, Page};
use learnhub::components::{
    Agenda, EventPreview, Landing, MonthView, PromptChoice, SignUpForm, SignUpPrompt, StatusBar,
};
use learnhub::{event, theme, tui};

fn main() -> Result<()> {
    color_eyre::install()?;

    let mut app = App::new()?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| draw(frame, app))?;
        app.tick(Instant::now());

        if let Some(input) = event::next_input(Duration::from_millis(100))? {
            match input {
                event::Input::Key(key) => {
                    // Clear status message on any key
                    app.status_message = None;

                    // Help overlay takes priority
                    if app.show_help {
                        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
                            app.show_help = false;
                        }
                        continue;
                    }

                    // Sign-up prompt takes priority
                    if app.prompt.is_some() {
                        handle_prompt_input(app, key.code);
                        continue;
                    }

                    // Preview overlay: Esc dismisses, everything else waits
                    if app.preview.is_some() {
                        if key.code == KeyCode::Esc {
                            app.close_preview();
                        }
                        continue;
                    }

                    match app.input_mode {
                        InputMode::Form => handle_form_input(app, key.code, key.modifiers),
                        InputMode::Normal => handle_normal_input(app, key.code, key.modifiers),
                    }
                }
                event::Input::Click { x, y } => handle_click(app, x, y),
            }
        }
    }

    Ok(())
}

fn handle_normal_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.running = false;
        }
        (KeyCode::Char('1'), _) => app.open_page(Page::Landing),
        (KeyCode::Char('2'), _) => app.open_page(Page::Calendar),
        (KeyCode::Char('3'), _) => app.open_page(Page::SignUp),
        (KeyCode::Char('?'), _) => app.show_help = true,
        _ => match app.page {
            Page::Landing => handle_landing_input(app, code),
            Page::Calendar => handle_calendar_input(app, code),
            Page::SignUp => {}
        },
    }
}

fn handle_landing_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Char('h') => app.carousel.prev_slide(),
        KeyCode::Right | KeyCode::Char('l') => app.carousel.next_slide(),
        _ => {}
    }
}

fn handle_calendar_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Char('h') => app.prev_day(),
        KeyCode::Right | KeyCode::Char('l') => app.next_day(),
        KeyCode::Up | KeyCode::Char('k') => app.prev_week(),
        KeyCode::Down | KeyCode::Char('j') => app.next_week(),
        KeyCode::Char('[') => app.prev_month(),
        KeyCode::Char(']') => app.next_month(),
        KeyCode::Char('t') => app.go_to_today(),
        KeyCode::Enter => {
            // Keyboard activation anchors the preview at the cell itself.
            let day = app.selected_date.day();
            let (x, y) = match app.month_area {
                Some(area) => MonthView::cell_position(area, &app.grid, day),
                None => (0, 0),
            };
            app.activate_day(day, x, y);
        }
        _ => {}
    }
}

fn handle_prompt_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.close_prompt(),
        KeyCode::Tab | KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
            if let Some(prompt) = app.prompt.as_mut() {
                prompt.choice.toggle();
            }
        }
        KeyCode::Enter => {
            let choice = app.prompt.as_ref().map(|p| p.choice);
            app.close_prompt();
            if choice == Some(PromptChoice::SignUpNow) {
                app.open_page(Page::SignUp);
            }
        }
        _ => {}
    }
}

fn handle_form_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Esc, _) => app.open_page(Page::Landing),
        (KeyCode::Enter, _) => app.submit_sign_up(),
        (KeyCode::Tab, _) => app.form.tab(),
        (KeyCode::BackTab, _) => app.form.backtab(),
        (KeyCode::Backspace, _) => app.form.backspace(),
        (KeyCode::Char('g'), KeyModifiers::CONTROL) => app.google_sign_in(),
        (KeyCode::Char(c), _) => app.form.input_char(c),
        _ => {}
    }
}

fn handle_click(app: &mut App, x: u16, y: u16) {
    if app.show_help || app.prompt.is_some() {
        return;
    }
    // A click anywhere else dismisses an open preview.
    if app.preview.is_some() {
        app.close_preview();
        return;
    }
    if app.page == Page::Calendar {
        if let Some(area) = app.month_area {
            if let Some(day) = MonthView::hit_test(area, &app.grid, x, y) {
                app.activate_day(day, x, y);
            }
        }
    }
}

fn draw(frame: &mut ratatui::Frame, app: &mut App) {
    let area = frame.area();

    // Main layout: content + status bar
    let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);
    let content = layout[0];

    app.month_area = None;
    match app.page {
        Page::Landing => Landing::render(frame, content, &app.carousel),
        Page::Calendar => render_calendar_layout(frame, content, app),
        Page::SignUp => SignUpForm::render(frame, content, &app.form),
    }

    if let Some(ref preview) = app.preview {
        EventPreview::render(frame, area, preview);
    }
    if let Some(ref prompt) = app.prompt {
        SignUpPrompt::render(frame, area, prompt);
    }
    if app.show_help {
        render_help(frame, area);
    }

    StatusBar::render(frame, layout[1], app);
}

fn render_calendar_layout(frame: &mut ratatui::Frame, area: Rect, app: &mut App) {
    let selected_events = app
        .grid
        .cell(app.selected_date.day())
        .map(|cell| cell.events.clone())
        .unwrap_or_default();

    if area.width < 60 {
        app.month_area = Some(area);
        MonthView::render(frame, area, &app.grid, app.selected_date);
    } else {
        let month_w = if area.width >= 100 { 44 } else { 38 };
        let content =
            Layout::horizontal([Constraint::Length(month_w), Constraint::Min(20)]).split(area);

        app.month_area = Some(content[0]);
        MonthView::render(frame, content[0], &app.grid, app.selected_date);
        Agenda::render(frame, content[1], app.selected_date, &selected_events);
    }
}

fn render_help(frame: &mut ratatui::Frame, area: Rect) {
    use ratatui::style::{Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

    let popup_w = area.width.min(52).max(30);
    let popup_h = area.height.min(18).max(10);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(theme::current().accent)
        .borders(Borders::ALL)
        .border_style(theme::current().accent);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().add_modifier(Modifier::BOLD);
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let lines = vec![
        Line::from(Span::styled("Pages", section_style)),
        Line::from(vec![
            Span::styled("  1/2/3     ", key_style),
            Span::raw("Home / Calendar / Sign up"),
        ]),
        Line::from(""),
        Line::from(Span::styled("Calendar", section_style)),
        Line::from(vec![
            Span::styled("  h/l j/k   ", key_style),
            Span::raw("Move by day / week"),
        ]),
        Line::from(vec![
            Span::styled("  [/]       ", key_style),
            Span::raw("Previous/next month"),
        ]),
        Line::from(vec![
            Span::styled("  t         ", key_style),
            Span::raw("Jump to today"),
        ]),
        Line::from(vec![
            Span::styled("  Enter     ", key_style),
            Span::raw("Open the selected day's events"),
        ]),
        Line::from(vec![
            Span::styled("  click     ", key_style),
            Span::raw("Open that day's events"),
        ]),
        Line::from(""),
        Line::from(Span::styled("Sign up", section_style)),
        Line::from(vec![
            Span::styled("  Tab/Enter ", key_style),
            Span::raw("Next field / submit"),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+G    ", key_style),
            Span::raw("Continue with Google"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  q", key_style),
            Span::styled(" / ", theme::DIM_STYLE),
            Span::styled("Esc     ", key_style),
            Span::raw("Quit / close popup"),
        ]),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
