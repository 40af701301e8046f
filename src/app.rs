use std::time::Instant;

use chrono::{Datelike, Local, NaiveDate};
use color_eyre::Result;
use ratatui::layout::Rect;

use crate::auth::AuthClient;
use crate::calendar::{classify_day, days_in_month, DayAction, EventStore, MonthGrid};
use crate::components::{Carousel, EventPreviewState, SignUpFormState, SignUpPromptState};
use crate::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Calendar,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Form,
}

pub struct App {
    pub running: bool,
    pub page: Page,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub today: NaiveDate,
    pub selected_date: NaiveDate,
    pub grid: MonthGrid,
    pub preview: Option<EventPreviewState>,
    pub prompt: Option<SignUpPromptState>,
    pub form: SignUpFormState,
    pub signed_in: Option<User>,
    pub status_message: Option<String>,
    pub carousel: Carousel,
    /// Where the month grid was last drawn; click hit-testing needs it.
    pub month_area: Option<Rect>,
    store: EventStore,
    auth: AuthClient,
}

impl App {
    pub fn new() -> Result<Self> {
        let today = Local::now().date_naive();
        let store = EventStore::load(today);
        let auth = AuthClient::from_env()?;
        let grid = MonthGrid::build(today.year(), today.month(), store.all(), today);

        Ok(Self {
            running: true,
            page: Page::Landing,
            input_mode: InputMode::Normal,
            show_help: false,
            today,
            selected_date: today,
            grid,
            preview: None,
            prompt: None,
            form: SignUpFormState::new(),
            signed_in: None,
            status_message: None,
            carousel: Carousel::new(),
            month_area: None,
            store,
            auth,
        })
    }

    /// Periodic work between inputs. The hero carousel only runs while
    /// the landing page is showing, like the original's mount-scoped
    /// interval.
    pub fn tick(&mut self, now: Instant) {
        if self.page == Page::Landing {
            self.carousel.tick(now);
        }
    }

    pub fn open_page(&mut self, page: Page) {
        self.page = page;
        self.preview = None;
        self.prompt = None;
        self.input_mode = if page == Page::SignUp {
            self.form = SignUpFormState::new();
            InputMode::Form
        } else {
            InputMode::Normal
        };
    }

    // ── Date navigation ──

    pub fn next_day(&mut self) {
        self.selected_date = self.selected_date.succ_opt().unwrap_or(self.selected_date);
        self.on_date_changed();
    }

    pub fn prev_day(&mut self) {
        self.selected_date = self.selected_date.pred_opt().unwrap_or(self.selected_date);
        self.on_date_changed();
    }

    pub fn next_week(&mut self) {
        self.selected_date += chrono::Duration::weeks(1);
        self.on_date_changed();
    }

    pub fn prev_week(&mut self) {
        self.selected_date -= chrono::Duration::weeks(1);
        self.on_date_changed();
    }

    pub fn next_month(&mut self) {
        let month = self.selected_date.month();
        let year = self.selected_date.year();
        let (new_year, new_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let day = self
            .selected_date
            .day()
            .min(days_in_month(new_year, new_month));
        self.selected_date = NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap();
        self.on_date_changed();
    }

    pub fn prev_month(&mut self) {
        let month = self.selected_date.month();
        let year = self.selected_date.year();
        let (new_year, new_month) = if month == 1 {
            (year - 1, 12)
        } else {
            (year, month - 1)
        };
        let day = self
            .selected_date
            .day()
            .min(days_in_month(new_year, new_month));
        self.selected_date = NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap();
        self.on_date_changed();
    }

    pub fn go_to_today(&mut self) {
        self.today = Local::now().date_naive();
        self.selected_date = self.today;
        self.on_date_changed();
    }

    fn on_date_changed(&mut self) {
        self.preview = None;
        if self.selected_date.year() != self.grid.year
            || self.selected_date.month() != self.grid.month
        {
            self.rebuild_grid();
        }
    }

    fn rebuild_grid(&mut self) {
        self.grid = MonthGrid::build(
            self.selected_date.year(),
            self.selected_date.month(),
            self.store.all(),
            self.today,
        );
    }

    // ── Event interaction ──

    /// Activate a day cell. `x`/`y` come from the triggering input event
    /// (mouse position, or the cell position for keyboard activation).
    pub fn activate_day(&mut self, day: u32, x: u16, y: u16) {
        self.selected_date =
            NaiveDate::from_ymd_opt(self.grid.year, self.grid.month, day).unwrap();

        let Some(cell) = self.grid.cell(day) else {
            return;
        };
        match classify_day(&cell.events, self.signed_in.is_some()) {
            None => {}
            Some(DayAction::OpenSignUp) => {
                self.prompt = Some(SignUpPromptState::default());
            }
            Some(DayAction::ShowPreview) => {
                self.preview = Some(EventPreviewState {
                    events: cell.events.clone(),
                    x,
                    y,
                });
            }
        }
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }

    pub fn close_prompt(&mut self) {
        self.prompt = None;
    }

    // ── Sign-up flow ──

    pub fn submit_sign_up(&mut self) {
        if !self.form.is_valid() {
            self.form.error =
                Some("Please fill in every field with a valid value.".to_string());
            return;
        }
        match self.auth.sign_up_with_email(&self.form.profile()) {
            Ok(user) => self.finish_sign_in(user),
            Err(err) => self.form.error = Some(err.to_string()),
        }
    }

    pub fn google_sign_in(&mut self) {
        match self.auth.sign_in_with_google() {
            Ok(user) => self.finish_sign_in(user),
            Err(err) => self.form.error = Some(err.to_string()),
        }
    }

    /// Successful sign-in lands on the calendar, the product's dashboard
    /// stand-in.
    fn finish_sign_in(&mut self, user: User) {
        self.status_message = Some(format!("Welcome, {}!", user.first_name));
        self.signed_in = Some(user);
        self.open_page(Page::Calendar);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Event, Priority};

    fn app_with_events(events: Vec<Event>) -> App {
        let mut app = App::new().unwrap();
        app.store = EventStore::from_events(events);
        app.rebuild_grid();
        app
    }

    fn gated_event(date: &str) -> Event {
        Event {
            id: 1,
            title: "Members Only".to_string(),
            time: "1:00 PM".to_string(),
            date: date.to_string(),
            priority: Priority::High,
            requires_sign_up: true,
        }
    }

    #[test]
    fn twelve_months_forward_is_one_year() {
        let mut app = app_with_events(Vec::new());
        app.selected_date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        app.rebuild_grid();
        for _ in 0..12 {
            app.next_month();
        }
        assert_eq!(app.selected_date.month(), 3);
        assert_eq!(app.selected_date.year(), 2025);
    }

    #[test]
    fn month_navigation_clamps_the_day() {
        let mut app = app_with_events(Vec::new());
        app.selected_date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        app.rebuild_grid();
        app.next_month();
        // Leap-year February.
        assert_eq!(app.selected_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn navigation_rebuilds_the_grid_for_the_new_month() {
        let mut app = app_with_events(Vec::new());
        app.selected_date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        app.rebuild_grid();
        app.next_month();
        assert_eq!((app.grid.year, app.grid.month), (2024, 2));
        assert_eq!(app.grid.cells.len(), 29);
    }

    #[test]
    fn gated_day_opens_prompt_not_preview() {
        let mut app = app_with_events(vec![gated_event("2024-02-09")]);
        app.selected_date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        app.rebuild_grid();
        app.activate_day(9, 10, 5);
        assert!(app.prompt.is_some());
        assert!(app.preview.is_none());
    }

    #[test]
    fn signed_in_user_sees_the_preview_at_the_click_position() {
        let mut app = app_with_events(vec![gated_event("2024-02-09")]);
        app.selected_date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        app.rebuild_grid();
        app.signed_in = Some(User {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        });
        app.activate_day(9, 17, 4);
        let preview = app.preview.expect("preview should open");
        assert_eq!((preview.x, preview.y), (17, 4));
        assert_eq!(preview.events.len(), 1);
        assert!(app.prompt.is_none());
    }

    #[test]
    fn empty_day_does_nothing() {
        let mut app = app_with_events(Vec::new());
        app.selected_date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        app.rebuild_grid();
        app.activate_day(9, 0, 0);
        assert!(app.prompt.is_none());
        assert!(app.preview.is_none());
    }
}
