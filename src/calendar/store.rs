use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use super::event::{Event, Priority};
use super::grid::{date_key, days_in_month};

/// The preview's fixed event list. Loaded once at startup; an optional
/// user file overrides the built-in sample set.
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn load(today: NaiveDate) -> Self {
        match load_from_config() {
            Some(events) if !events.is_empty() => Self { events },
            _ => Self {
                events: sample_events(today),
            },
        }
    }

    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("learnhub").join("events.toml"))
}

fn load_from_config() -> Option<Vec<Event>> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }
    let content = std::fs::read_to_string(&path).ok()?;
    let file: EventsFile = toml::from_str(&content).ok()?;
    Some(file.event)
}

#[derive(Debug, Deserialize, Default)]
struct EventsFile {
    #[serde(default)]
    event: Vec<Event>,
}

/// Built-in demo events, pinned to the month the preview opens on so the
/// grid has something to show.
fn sample_events(today: NaiveDate) -> Vec<Event> {
    let year = today.year();
    let month = today.month();
    let last = days_in_month(year, month);
    let key = |day: u32| date_key(year, month, day.min(last));

    vec![
        Event {
            id: 1,
            title: "Study Group: Linear Algebra".to_string(),
            time: "10:00 AM".to_string(),
            date: key(5),
            priority: Priority::Low,
            requires_sign_up: false,
        },
        Event {
            id: 2,
            title: "Live Workshop: Rust for Beginners".to_string(),
            time: "2:00 PM".to_string(),
            date: key(12),
            priority: Priority::High,
            requires_sign_up: true,
        },
        Event {
            id: 3,
            title: "Virtual Career Fair".to_string(),
            time: "4:30 PM".to_string(),
            date: key(12),
            priority: Priority::Medium,
            requires_sign_up: false,
        },
        Event {
            id: 4,
            title: "Mentor Office Hours".to_string(),
            time: "9:00 AM".to_string(),
            date: key(18),
            priority: Priority::Medium,
            requires_sign_up: true,
        },
        Event {
            id: 5,
            title: "Open Study Hall".to_string(),
            time: "11:00 AM".to_string(),
            date: key(21),
            priority: Priority::Low,
            requires_sign_up: false,
        },
        Event {
            id: 6,
            title: "Book Club: Deep Work".to_string(),
            time: "1:00 PM".to_string(),
            date: key(21),
            priority: Priority::Low,
            requires_sign_up: false,
        },
        Event {
            id: 7,
            title: "Geng Game Night".to_string(),
            time: "7:00 PM".to_string(),
            date: key(21),
            priority: Priority::Medium,
            requires_sign_up: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_events_stay_inside_the_month() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        for ev in sample_events(today) {
            assert!(ev.date.starts_with("2024-02-"), "{}", ev.date);
        }
    }

    #[test]
    fn events_file_parses() {
        let raw = r#"
            [[event]]
            id = 10
            title = "Midterm Review"
            time = "6:00 PM"
            date = "2025-03-04"
            priority = "high"
            requires_sign_up = true

            [[event]]
            id = 11
            title = "Coffee Chat"
            time = "8:30 AM"
            date = "2025-03-05"
            priority = "low"
        "#;
        let file: EventsFile = toml::from_str(raw).unwrap();
        assert_eq!(file.event.len(), 2);
        assert_eq!(file.event[0].priority, Priority::High);
        assert!(file.event[0].requires_sign_up);
        assert!(!file.event[1].requires_sign_up);
    }
}
