use chrono::{DateTime, Duration, Local};

use super::palette::PALETTE;
use crate::models::counter::{Counter, CounterId};

/// The two built-in counters shown on first launch, newest first.
pub fn default_counters(now: DateTime<Local>) -> Vec<Counter> {
    vec![
        Counter {
            id: CounterId::from("1"),
            title: "Final Exams".to_string(),
            description: "End of semester exam week".to_string(),
            target_date: now + Duration::days(30),
            color: PALETTE[0],
        },
        Counter {
            id: CounterId::from("2"),
            title: "Summer Vacation".to_string(),
            description: "Beach trip with friends".to_string(),
            target_date: now + Duration::days(90),
            color: PALETTE[1],
        },
    ]
}
