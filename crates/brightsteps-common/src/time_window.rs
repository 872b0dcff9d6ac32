// Screen time enforcement
//
// Evaluates the parent's screen-time settings (daily cap plus an optional
// allowed window of the day) against the clock and today's usage.

use chrono::{DateTime, Local, NaiveTime, Timelike};

use crate::{
    error::{Error, Result},
    types::ScreenTimeSettings,
};

/// Result of checking the screen-time settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTimeStatus {
    /// Limits are switched off
    Disabled,
    /// Play is allowed with this many minutes left today
    Allowed { remaining_minutes: u32 },
    /// Today's cap is used up
    LimitReached,
    /// The clock is outside the allowed window
    OutsideWindow { next_window: Option<String> },
}

impl ScreenTimeStatus {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Disabled | Self::Allowed { .. })
    }
}

/// Screen time enforcement engine
pub struct TimeWindowEnforcer<'a> {
    settings: &'a ScreenTimeSettings,
}

impl<'a> TimeWindowEnforcer<'a> {
    pub fn new(settings: &'a ScreenTimeSettings) -> Self {
        Self { settings }
    }

    /// Check the settings at `current_time` given the minutes used today
    pub fn check(&self, current_time: DateTime<Local>, used_minutes: u32) -> ScreenTimeStatus {
        if !self.settings.enabled {
            return ScreenTimeStatus::Disabled;
        }

        if let Some((start, end)) = self.window() {
            let now = current_time.time();
            if !is_in_window(now, start, end) {
                let next_window = (now < start).then(|| format_time(start));
                return ScreenTimeStatus::OutsideWindow { next_window };
            }
        }

        let remaining = self.settings.max_minutes_per_day.saturating_sub(used_minutes);
        if remaining == 0 {
            ScreenTimeStatus::LimitReached
        } else {
            ScreenTimeStatus::Allowed { remaining_minutes: remaining }
        }
    }

    pub fn remaining_minutes(&self, used_minutes: u32) -> Option<u32> {
        self.settings
            .enabled
            .then(|| self.settings.max_minutes_per_day.saturating_sub(used_minutes))
    }

    /// Configured allowed window. Both ends must be set and parse as `HH:MM`;
    /// anything else means "no window".
    fn window(&self) -> Option<(NaiveTime, NaiveTime)> {
        let start = parse_time(self.settings.allowed_start_time.as_deref()?).ok()?;
        let end = parse_time(self.settings.allowed_end_time.as_deref()?).ok()?;
        Some((start, end))
    }
}

/// Checks whether `time` falls in `[start, end)`. A window whose end is
/// before its start wraps past midnight.
fn is_in_window(time: NaiveTime, start: NaiveTime, end: NaiveTime) -> bool {
    if start <= end {
        time >= start && time < end
    } else {
        time >= start || time < end
    }
}

fn format_time(t: NaiveTime) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// Helper function to parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(time_str, "%H:%M")
        .map_err(|e| Error::invalid(format!("Invalid time format '{}': {}", time_str, e)))
}
