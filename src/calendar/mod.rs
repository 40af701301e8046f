pub mod event;
pub mod grid;
pub mod store;

pub use event::{Event, Priority};
pub use grid::{classify_day, date_key, days_in_month, DayAction, DayCell, MonthGrid};
pub use store::EventStore;
