use serde::{Deserialize, Serialize};

/// Default date segment pattern, e.g. `Jun 01,`.
pub const DATE_PATTERN: &str = "%b %d,";

/// Default time segment pattern, 24-hour clock without padding, e.g. `9:05`.
pub const TIME_PATTERN: &str = "%-H:%M";

/// How the trailing timezone label is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ZoneLabelStyle {
    /// Full IANA identifier, e.g. `America/New_York`.
    #[default]
    Identifier,
    /// Short name in effect at the formatting instant, e.g. `EDT`.
    Abbreviation,
}

/// Runtime formatter configuration for range labels.
///
/// Patterns are chrono strftime strings; an unrecognized specifier inherits
/// the formatting library's behavior rather than being validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeLabelConfig {
    pub date_pattern: String,
    pub time_pattern: String,
    pub zone_style: ZoneLabelStyle,
}

impl Default for RangeLabelConfig {
    fn default() -> Self {
        Self {
            date_pattern: DATE_PATTERN.to_owned(),
            time_pattern: TIME_PATTERN.to_owned(),
            zone_style: ZoneLabelStyle::default(),
        }
    }
}

impl RangeLabelConfig {
    #[must_use]
    pub fn with_date_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.date_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_time_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.time_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_zone_style(mut self, style: ZoneLabelStyle) -> Self {
        self.zone_style = style;
        self
    }
}
