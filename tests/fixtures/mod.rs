// Test fixtures - reusable test data
// Provides consistent dates and screens across all test files

#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use countdown_list::services::countdown::{default_counters, CountdownService};
use countdown_list::ui_egui::app::date_picker::PlaceholderDatePicker;
use countdown_list::ui_egui::CountdownScreen;
use rand::{rngs::StdRng, SeedableRng};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2026 at 09:00
    pub fn launch_morning() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap()
    }

    /// Returns Feb 29, 2028 at 12:00 (leap day)
    pub fn leap_day_2028() -> DateTime<Local> {
        Local.with_ymd_and_hms(2028, 2, 29, 12, 0, 0).unwrap()
    }
}

/// Service holding the two built-in counters with a deterministic rng.
pub fn seeded_service() -> CountdownService {
    CountdownService::from_counters(
        default_counters(dates::launch_morning()),
        StdRng::seed_from_u64(2026),
    )
}

/// Screen wrapping [`seeded_service`] with the placeholder date picker.
pub fn seeded_screen() -> CountdownScreen {
    CountdownScreen::new(
        seeded_service(),
        Box::new(PlaceholderDatePicker),
        dates::launch_morning(),
    )
}
