use chrono::{DateTime, Utc};

use crate::api::label_config::{RangeLabelConfig, ZoneLabelStyle};
use crate::core::scale::TimeScale;
use crate::core::zone::{resolve_zone, zone_abbreviation};

/// Formats the display label for a window selection using the default
/// patterns and zone style.
///
/// `now` anchors both the moving window and the "is the window ending today"
/// check; callers sample it once per render so sub-computations agree.
#[must_use]
pub fn format_range_label(
    scale: &TimeScale,
    reference_timestamp: Option<DateTime<Utc>>,
    timezone: &str,
    now: DateTime<Utc>,
) -> String {
    format_range_label_with(
        scale,
        reference_timestamp,
        timezone,
        now,
        &RangeLabelConfig::default(),
    )
}

/// Formats the display label with caller-supplied patterns and zone style.
///
/// The window resolves through [`TimeScale::rounded_date_range`] and both
/// endpoints are projected into `timezone` before any calendar comparison.
/// Date segments are dropped when the window sits inside a single local day:
/// both when that day is today, the start date alone otherwise. For preset
/// selections a present `reference_timestamp` supplies the end time, so the
/// label reflects when the backing data was actually requested.
#[must_use]
pub fn format_range_label_with(
    scale: &TimeScale,
    reference_timestamp: Option<DateTime<Utc>>,
    timezone: &str,
    now: DateTime<Utc>,
    config: &RangeLabelConfig,
) -> String {
    let tz = resolve_zone(timezone);
    let range = scale.rounded_date_range(now);
    let start_local = range.start.with_timezone(&tz);
    let end_local = range.end.with_timezone(&tz);

    let end_is_today = end_local.date_naive() == now.with_timezone(&tz).date_naive();
    let same_day = start_local.date_naive() == end_local.date_naive();
    let omit_dates = end_is_today && same_day;

    let date_start = if omit_dates {
        String::new()
    } else {
        start_local.format(&config.date_pattern).to_string()
    };
    let date_end = if omit_dates || same_day {
        String::new()
    } else {
        end_local.format(&config.date_pattern).to_string()
    };

    let time_start = start_local.format(&config.time_pattern).to_string();
    let time_end = match reference_timestamp {
        Some(reference) if !scale.is_custom() => reference
            .with_timezone(&tz)
            .format(&config.time_pattern)
            .to_string(),
        _ => end_local.format(&config.time_pattern).to_string(),
    };

    let zone = match config.zone_style {
        ZoneLabelStyle::Identifier => timezone.to_owned(),
        ZoneLabelStyle::Abbreviation => zone_abbreviation(timezone, now),
    };

    // Empty date segments keep their separating space; the dashboard layout
    // relies on the literal spacing.
    format!("{date_start} {time_start} to {date_end} {time_end} {zone}")
}
