//! Share-link expiry calculator

use chrono::{DateTime, Duration, Utc};

/// Compute when a share link should lapse.
///
/// Returns `None` when expiry is disabled or the combined duration is not
/// positive, which the backend reads as "never expires". Individual fields
/// may exceed their natural range (90 minutes is fine), only the total
/// matters.
pub fn compute_expiry(enabled: bool, days: i64, hours: i64, minutes: i64) -> Option<DateTime<Utc>> {
    compute_expiry_at(enabled, days, hours, minutes, Utc::now())
}

/// Like [`compute_expiry`] with an explicit base time.
pub fn compute_expiry_at(
    enabled: bool,
    days: i64,
    hours: i64,
    minutes: i64,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if !enabled {
        return None;
    }
    let total_seconds = days * 86_400 + hours * 3_600 + minutes * 60;
    if total_seconds <= 0 {
        return None;
    }
    Some(now + Duration::seconds(total_seconds))
}

/// Quick-pick expiry durations offered by the share dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryPreset {
    OneHour,
    OneDay,
    OneWeek,
}

impl ExpiryPreset {
    const MS_PER_MINUTE: i64 = 60_000;
    const MS_PER_HOUR: i64 = 3_600_000;
    const MS_PER_DAY: i64 = 86_400_000;

    fn millis(&self) -> i64 {
        match self {
            ExpiryPreset::OneHour => Self::MS_PER_HOUR,
            ExpiryPreset::OneDay => Self::MS_PER_DAY,
            ExpiryPreset::OneWeek => 7 * Self::MS_PER_DAY,
        }
    }

    /// Decompose the preset into the dialog's (days, hours, minutes) fields.
    pub fn fields(&self) -> (i64, i64, i64) {
        let mut remaining = self.millis();
        let days = remaining / Self::MS_PER_DAY;
        remaining %= Self::MS_PER_DAY;
        let hours = remaining / Self::MS_PER_HOUR;
        remaining %= Self::MS_PER_HOUR;
        let minutes = remaining / Self::MS_PER_MINUTE;
        (days, hours, minutes)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryPreset::OneHour => "1h",
            ExpiryPreset::OneDay => "24h",
            ExpiryPreset::OneWeek => "7d",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1h" => Some(ExpiryPreset::OneHour),
            "24h" => Some(ExpiryPreset::OneDay),
            "7d" => Some(ExpiryPreset::OneWeek),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExpiryPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
