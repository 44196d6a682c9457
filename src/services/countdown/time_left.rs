//! Snapshot decomposition of the time remaining until a target.

use chrono::{DateTime, Local};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Remaining time split into whole units. `hours`, `minutes` and `seconds`
/// are always below one unit of the next larger field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub is_over: bool,
}

impl TimeLeft {
    pub const OVER: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        is_over: true,
    };

    /// Decompose a millisecond delta. Zero and negative deltas are over.
    pub fn from_millis(delta_ms: i64) -> Self {
        if delta_ms <= 0 {
            return Self::OVER;
        }

        Self {
            days: delta_ms / MS_PER_DAY,
            hours: ((delta_ms % MS_PER_DAY) / MS_PER_HOUR) as u32,
            minutes: ((delta_ms % MS_PER_HOUR) / MS_PER_MINUTE) as u32,
            seconds: ((delta_ms % MS_PER_MINUTE) / MS_PER_SECOND) as u32,
            is_over: false,
        }
    }

    /// Milliseconds represented by the whole units, sub-second part dropped.
    pub fn total_millis(&self) -> i64 {
        self.days * MS_PER_DAY
            + self.hours as i64 * MS_PER_HOUR
            + self.minutes as i64 * MS_PER_MINUTE
            + self.seconds as i64 * MS_PER_SECOND
    }

    /// Short form such as `3d 04h 05m 06s`, used for tooltips and logs.
    pub fn format_compact(&self) -> String {
        if self.is_over {
            return "Time's up!".to_string();
        }
        format!(
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Time left from `now` until `target_date`.
///
/// This is a snapshot: calling it again later with a newer `now` yields a
/// different value, and nothing here keeps it current.
pub fn calculate_time_left(target_date: DateTime<Local>, now: DateTime<Local>) -> TimeLeft {
    let delta_ms = target_date.signed_duration_since(now).num_milliseconds();
    TimeLeft::from_millis(delta_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use test_case::test_case;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn one_day_two_hours_three_minutes_four_seconds() {
        let now = fixed_now();
        let target = now
            + Duration::days(1)
            + Duration::hours(2)
            + Duration::minutes(3)
            + Duration::seconds(4);

        assert_eq!(
            calculate_time_left(target, now),
            TimeLeft {
                days: 1,
                hours: 2,
                minutes: 3,
                seconds: 4,
                is_over: false,
            }
        );
    }

    #[test_case(0 ; "exactly now")]
    #[test_case(-1 ; "one millisecond ago")]
    #[test_case(-86_400_000 ; "one day ago")]
    #[test_case(-315_360_000_000 ; "ten years ago")]
    fn past_or_present_targets_are_over(offset_ms: i64) {
        let now = fixed_now();
        let target = now + Duration::milliseconds(offset_ms);
        assert_eq!(calculate_time_left(target, now), TimeLeft::OVER);
    }

    #[test]
    fn sub_second_remainder_is_not_over() {
        let left = TimeLeft::from_millis(999);
        assert!(!left.is_over);
        assert_eq!(left.total_millis(), 0);
    }

    #[test]
    fn compact_format_pads_units() {
        let left = TimeLeft::from_millis(3 * MS_PER_DAY + 4 * MS_PER_HOUR + 5 * MS_PER_MINUTE + 6_000);
        assert_eq!(left.format_compact(), "3d 04h 05m 06s");
        assert_eq!(TimeLeft::OVER.format_compact(), "Time's up!");
    }
}
