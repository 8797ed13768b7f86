use chrono::TimeDelta;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::scale::TimeScale;

/// Insertion-ordered preset catalog, mirroring a dashboard dropdown.
///
/// The default catalog covers the spans a metrics page typically offers,
/// from a ten-minute window up to two months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeScaleCollection {
    scales: IndexMap<String, TimeScale>,
}

impl TimeScaleCollection {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            scales: IndexMap::new(),
        }
    }

    /// Inserts a scale keyed by its own `key`, replacing any existing entry.
    pub fn insert(&mut self, scale: TimeScale) {
        self.scales.insert(scale.key.clone(), scale);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TimeScale> {
        self.scales.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeScale> {
        self.scales.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.scales.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Preset whose window size is nearest to the requested span.
    ///
    /// Used when adopting an arbitrary custom range back into the catalog;
    /// ties resolve to the earlier catalog entry.
    #[must_use]
    pub fn closest(&self, window: TimeDelta) -> Option<&TimeScale> {
        self.scales
            .values()
            .min_by_key(|scale| (scale.window_size - window).abs().num_milliseconds())
    }
}

impl Default for TimeScaleCollection {
    fn default() -> Self {
        let presets = [
            ("Past 10 Minutes", TimeDelta::minutes(10), TimeDelta::seconds(10)),
            ("Past 30 Minutes", TimeDelta::minutes(30), TimeDelta::seconds(30)),
            ("Past 1 Hour", TimeDelta::hours(1), TimeDelta::seconds(30)),
            ("Past 6 Hours", TimeDelta::hours(6), TimeDelta::minutes(1)),
            ("Past 1 Day", TimeDelta::days(1), TimeDelta::minutes(5)),
            ("Past 2 Days", TimeDelta::days(2), TimeDelta::minutes(5)),
            ("Past 3 Days", TimeDelta::days(3), TimeDelta::minutes(5)),
            ("Past Week", TimeDelta::days(7), TimeDelta::minutes(30)),
            ("Past Month", TimeDelta::days(30), TimeDelta::hours(1)),
            ("Past 2 Months", TimeDelta::days(60), TimeDelta::hours(1)),
        ];

        let mut collection = Self::empty();
        for (key, window_size, sample_size) in presets {
            collection.insert(TimeScale {
                key: key.to_owned(),
                window_size,
                sample_size,
                fixed_window_end: None,
            });
        }
        collection
    }
}
