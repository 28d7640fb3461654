//! Fixed daily time slots
//!
//! The UTC day is cut into equal windows; a round belongs to the window it
//! started in and a new word is only drawn when the window changes.

use chrono::{DateTime, NaiveTime, TimeDelta, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Equal-length windows starting at UTC midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSchedule {
    per_day: i64,
}

impl SlotSchedule {
    /// `per_day` is clamped to at least one window
    #[must_use]
    pub fn new(per_day: u32) -> Self {
        Self {
            per_day: i64::from(per_day.max(1)),
        }
    }

    /// Length of one window
    #[must_use]
    pub fn length(&self) -> TimeDelta {
        TimeDelta::seconds(SECONDS_PER_DAY / self.per_day)
    }

    fn midnight(now: DateTime<Utc>) -> DateTime<Utc> {
        now.date_naive().and_time(NaiveTime::MIN).and_utc()
    }

    fn index(&self, now: DateTime<Utc>) -> i64 {
        let elapsed = (now - Self::midnight(now)).num_seconds();
        (elapsed / self.length().num_seconds()).min(self.per_day - 1)
    }

    /// Latest window start at or before `now`
    ///
    /// # Examples
    /// ```
    /// use chat_wordle::game::SlotSchedule;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let schedule = SlotSchedule::new(3);
    /// let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
    /// assert_eq!(
    ///     schedule.current_start(now),
    ///     Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
    /// );
    /// ```
    #[must_use]
    pub fn current_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        Self::midnight(now) + self.length() * self.index(now) as i32
    }

    /// Start of the window after the current one
    #[must_use]
    pub fn next_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let index = self.index(now);
        if index + 1 == self.per_day {
            Self::midnight(now) + TimeDelta::days(1)
        } else {
            Self::midnight(now) + self.length() * (index + 1) as i32
        }
    }

    /// Next window start as `HH:MM UTC (in XhYYm)`
    #[must_use]
    pub fn describe_next(&self, now: DateTime<Utc>) -> String {
        let next = self.next_start(now);
        let remaining = (next - now).num_seconds().max(0);
        format!(
            "{} UTC (in {}h{:02}m)",
            next.format("%H:%M"),
            remaining / 3600,
            remaining % 3600 / 60
        )
    }
}
