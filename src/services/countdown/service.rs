use std::collections::HashSet;

use chrono::{DateTime, Local};
use rand::{rngs::StdRng, SeedableRng};

use super::error::CountdownError;
use super::palette::assign_color;
use super::seeds::default_counters;
use super::time_left::{calculate_time_left, TimeLeft};
use crate::models::counter::{Counter, CounterDraft, CounterId};

/// Owns the in-memory counter list for the lifetime of the screen.
///
/// The list is only changed through [`create`](Self::create),
/// [`update`](Self::update) and [`delete`](Self::delete); all three either
/// succeed completely or leave it untouched.
pub struct CountdownService {
    counters: Vec<Counter>,
    rng: StdRng,
}

impl Default for CountdownService {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownService {
    /// Empty list with an entropy-seeded colour generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            counters: Vec::new(),
            rng,
        }
    }

    /// Start from an existing list. Later entries whose id was already seen
    /// are dropped so ids stay unique.
    pub fn from_counters(counters: Vec<Counter>, rng: StdRng) -> Self {
        let mut seen = HashSet::new();
        let counters = counters
            .into_iter()
            .filter(|counter| {
                let fresh = seen.insert(counter.id.clone());
                if !fresh {
                    log::warn!("Dropping countdown with duplicate id {}", counter.id);
                }
                fresh
            })
            .collect();
        Self { counters, rng }
    }

    /// List populated with the built-in counters, for start-up.
    pub fn with_default_counters(now: DateTime<Local>) -> Self {
        let service = Self::from_counters(default_counters(now), StdRng::from_entropy());
        log::info!("Seeded {} default countdown(s)", service.counters.len());
        service
    }

    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    pub fn get(&self, id: &CounterId) -> Option<&Counter> {
        self.counters.iter().find(|counter| &counter.id == id)
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Each counter paired with its remaining time at `now`, in list order.
    pub fn snapshots(&self, now: DateTime<Local>) -> impl Iterator<Item = (&Counter, TimeLeft)> {
        self.counters
            .iter()
            .map(move |counter| (counter, calculate_time_left(counter.target_date, now)))
    }

    /// Validate `draft` and prepend a new counter built from it.
    pub fn create(
        &mut self,
        draft: &CounterDraft,
        now: DateTime<Local>,
    ) -> Result<CounterId, CountdownError> {
        if !draft.has_title() {
            log::warn!("Rejected countdown creation: blank title");
            return Err(CountdownError::BlankTitle);
        }

        let id = self.next_id(now);
        let counter = Counter {
            id: id.clone(),
            title: draft.title.trim().to_owned(),
            description: draft.description.clone(),
            target_date: draft.target_date,
            color: assign_color(&mut self.rng),
        };
        log::info!(
            "Created countdown '{}' (id {}, colour {})",
            counter.title,
            id,
            counter.color.to_hex_string()
        );
        self.counters.insert(0, counter);
        Ok(id)
    }

    /// Replace title, description and target date of an existing counter.
    pub fn update(&mut self, id: &CounterId, draft: &CounterDraft) -> Result<(), CountdownError> {
        if !draft.has_title() {
            log::warn!("Rejected update of countdown {}: blank title", id);
            return Err(CountdownError::BlankTitle);
        }

        let Some(counter) = self.counters.iter_mut().find(|counter| &counter.id == id) else {
            log::warn!("Cannot update countdown {}: not found", id);
            return Err(CountdownError::NotFound(id.clone()));
        };
        counter.apply_draft(draft);
        log::info!("Updated countdown '{}' (id {})", counter.title, id);
        Ok(())
    }

    /// Remove exactly one counter, returning it.
    pub fn delete(&mut self, id: &CounterId) -> Result<Counter, CountdownError> {
        let Some(idx) = self.counters.iter().position(|counter| &counter.id == id) else {
            log::warn!("Cannot delete countdown {}: not found", id);
            return Err(CountdownError::NotFound(id.clone()));
        };
        let removed = self.counters.remove(idx);
        log::info!("Deleted countdown '{}' (id {})", removed.title, id);
        Ok(removed)
    }

    /// Timestamp-derived id; bumped past any millisecond already in use.
    fn next_id(&self, now: DateTime<Local>) -> CounterId {
        let mut millis = now.timestamp_millis();
        loop {
            let candidate = CounterId(millis.to_string());
            if self.get(&candidate).is_none() {
                return candidate;
            }
            millis += 1;
        }
    }
}
