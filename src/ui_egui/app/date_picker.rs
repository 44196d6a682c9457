//! Date selection seam for the counter form.
//!
//! The form only needs "some concrete date/time" back; how it is chosen is
//! up to the collaborator behind [`DatePicker`].

use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq)]
pub enum DatePick {
    /// A new target was chosen
    Selected(DateTime<Local>),
    /// No picker is available; the message is shown to the user
    Unavailable(String),
    /// The user backed out, keep the current value
    Cancelled,
}

pub trait DatePicker {
    fn pick(&mut self, current: DateTime<Local>) -> DatePick;
}

/// Stand-in used until a real picker is wired up. The form field keeps
/// whatever date it already holds.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderDatePicker;

impl DatePicker for PlaceholderDatePicker {
    fn pick(&mut self, _current: DateTime<Local>) -> DatePick {
        DatePick::Unavailable(
            "Date picker coming soon! The countdown keeps its current target date.".to_string(),
        )
    }
}
