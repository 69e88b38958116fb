use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ScheduleError, ScheduleResult};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A recurring weekly block of occupied time.
///
/// Every field is nullable in the upstream API; a slot missing any of them is
/// *unscheduled* (TBA) and never conflicts with anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTimeSlot {
    /// 0 = Sunday .. 6 = Saturday
    #[serde(default)]
    pub day_of_week: Option<u8>,
    /// Minutes since midnight
    #[serde(default)]
    pub start_minute: Option<u32>,
    /// Minutes since midnight, exclusive
    #[serde(default)]
    pub end_minute: Option<u32>,
}

impl WeeklyTimeSlot {
    pub fn new(day_of_week: u8, start_minute: u32, end_minute: u32) -> Self {
        Self {
            day_of_week: Some(day_of_week),
            start_minute: Some(start_minute),
            end_minute: Some(end_minute),
        }
    }

    pub fn unscheduled() -> Self {
        Self::default()
    }

    /// Returns `(day, start, end)` when all three fields are present.
    pub fn window(&self) -> Option<(u8, u32, u32)> {
        Some((self.day_of_week?, self.start_minute?, self.end_minute?))
    }

    pub fn is_scheduled(&self) -> bool {
        self.window().is_some()
    }

    /// Half-open overlap on the same weekday. Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &WeeklyTimeSlot) -> bool {
        match (self.window(), other.window()) {
            (Some((day, start, end)), Some((other_day, other_start, other_end))) => {
                day == other_day && start < other_end && end > other_start
            }
            _ => false,
        }
    }

    /// Strict shape check for data coming from the API.
    ///
    /// The conflict predicates never call this; they stay permissive and treat
    /// odd data consistently through the overlap comparison instead.
    pub fn validate(&self) -> ScheduleResult<()> {
        let Some((day, start, end)) = self.window() else {
            return Ok(());
        };

        if usize::from(day) >= DAY_NAMES.len() {
            return Err(ScheduleError::Validation(format!(
                "day of week {} is outside 0-6",
                day
            )));
        }
        if start >= MINUTES_PER_DAY || end > MINUTES_PER_DAY {
            return Err(ScheduleError::Validation(format!(
                "time range {}-{} exceeds one day",
                start, end
            )));
        }
        if end <= start {
            return Err(ScheduleError::Validation(format!(
                "end minute {} is not after start minute {}",
                end, start
            )));
        }

        Ok(())
    }
}

impl fmt::Display for WeeklyTimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((day, start, end)) = self.window() else {
            return f.write_str("TBA");
        };

        match DAY_NAMES.get(usize::from(day)) {
            Some(name) => f.write_str(name)?,
            None => write!(f, "day{}", day)?,
        }
        write!(
            f,
            " {:02}:{:02}-{:02}:{:02}",
            start / 60,
            start % 60,
            end / 60,
            end % 60
        )
    }
}
