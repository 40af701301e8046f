use serde::{Deserialize, Serialize};

/// Ordered severity label for an event badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A dated calendar event from the preview event list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    /// Display time, free text (e.g. "3:00 PM").
    pub time: String,
    /// Calendar-day key, `YYYY-MM-DD`. Must match the grid's generated
    /// keys exactly for the event to land on a cell.
    pub date: String,
    pub priority: Priority,
    #[serde(default)]
    pub requires_sign_up: bool,
}

impl Event {
    pub fn time_display(&self) -> String {
        if self.time.is_empty() {
            "All day".to_string()
        } else {
            self.time.clone()
        }
    }
}
