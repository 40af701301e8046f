pub mod agenda;
pub mod event_preview;
pub mod landing;
pub mod month_view;
pub mod signup_form;
pub mod signup_modal;
pub mod status_bar;

pub use agenda::Agenda;
pub use event_preview::{EventPreview, EventPreviewState};
pub use landing::{Carousel, Landing};
pub use month_view::MonthView;
pub use signup_form::{SignUpForm, SignUpFormState};
pub use signup_modal::{PromptChoice, SignUpPrompt, SignUpPromptState};
pub use status_bar::StatusBar;
