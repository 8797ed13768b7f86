use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::core::range::TimeRange;
use crate::error::{ScaleError, ScaleResult};

/// Key reserved for selections built from an arbitrary start/end pair rather
/// than a catalog preset.
pub const CUSTOM_KEY: &str = "Custom";

/// Named window selection driving a dashboard's range queries.
///
/// A scale without a fixed window end is a moving window anchored at "now";
/// pinning `fixed_window_end` freezes the window at a historical instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeScale {
    pub key: String,
    #[serde(with = "seconds")]
    pub window_size: TimeDelta,
    #[serde(with = "seconds")]
    pub sample_size: TimeDelta,
    pub fixed_window_end: Option<DateTime<Utc>>,
}

impl TimeScale {
    pub fn new(
        key: impl Into<String>,
        window_size: TimeDelta,
        sample_size: TimeDelta,
    ) -> ScaleResult<Self> {
        if window_size <= TimeDelta::zero() || sample_size <= TimeDelta::zero() {
            return Err(ScaleError::InvalidWindow {
                window_seconds: window_size.num_seconds(),
                sample_seconds: sample_size.num_seconds(),
            });
        }

        Ok(Self {
            key: key.into(),
            window_size,
            sample_size,
            fixed_window_end: None,
        })
    }

    #[must_use]
    pub fn with_fixed_window_end(mut self, end: DateTime<Utc>) -> Self {
        self.fixed_window_end = Some(end);
        self
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.key == CUSTOM_KEY
    }

    /// Window end: the fixed anchor when set, otherwise the supplied `now`.
    #[must_use]
    pub fn window_end(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.fixed_window_end.unwrap_or(now)
    }

    #[must_use]
    pub fn date_range(&self, now: DateTime<Utc>) -> TimeRange {
        let end = self.window_end(now);
        TimeRange {
            start: end - self.window_size,
            end,
        }
    }

    /// Minute-aligned variant of [`TimeScale::date_range`]: the start is
    /// truncated to the minute, the end is truncated and advanced one minute
    /// so the in-progress minute stays covered.
    #[must_use]
    pub fn rounded_date_range(&self, now: DateTime<Utc>) -> TimeRange {
        let range = self.date_range(now);
        TimeRange {
            start: truncate_to_minute(range.start),
            end: truncate_to_minute(range.end) + TimeDelta::minutes(1),
        }
    }
}

fn truncate_to_minute(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .duration_trunc(TimeDelta::minutes(1))
        .unwrap_or(instant)
}

/// Serializes window and sample durations as whole seconds.
mod seconds {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(delta: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
        delta.num_seconds().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeDelta, D::Error> {
        let value = i64::deserialize(deserializer)?;
        TimeDelta::try_seconds(value)
            .ok_or_else(|| serde::de::Error::custom("duration seconds out of range"))
    }
}
