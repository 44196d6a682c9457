// Counter model
// A named countdown towards a single target date/time

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::color::RgbaColor;

/// Opaque identifier for a counter. New ids are derived from the creation
/// timestamp in Unix milliseconds; seeded counters use small literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CounterId(pub String);

impl CounterId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CounterId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counter {
    pub id: CounterId,
    pub title: String,
    pub description: String,
    pub target_date: DateTime<Local>,
    pub color: RgbaColor,
}

impl Counter {
    /// Description trimmed, or `None` when there is nothing worth showing.
    pub fn description_text(&self) -> Option<&str> {
        let trimmed = self.description.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// A counter is expired once its target is at or before `now`.
    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        self.target_date <= now
    }

    /// Overwrite the user-editable fields. `id` and `color` are left alone.
    pub fn apply_draft(&mut self, draft: &CounterDraft) {
        self.title = draft.title.trim().to_owned();
        self.description = draft.description.clone();
        self.target_date = draft.target_date;
    }
}

/// User-supplied values captured by the create/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterDraft {
    pub title: String,
    pub description: String,
    pub target_date: DateTime<Local>,
}

impl CounterDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        target_date: DateTime<Local>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            target_date,
        }
    }

    /// Blank draft used when the form opens in create mode.
    pub fn empty(now: DateTime<Local>) -> Self {
        Self::new(String::new(), String::new(), now)
    }

    pub fn from_counter(counter: &Counter) -> Self {
        Self::new(
            counter.title.clone(),
            counter.description.clone(),
            counter.target_date,
        )
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}
