use chrono::{DateTime, TimeDelta, Utc};
use timescale_rs::api::{
    RangeLabelConfig, ZoneLabelStyle, format_range_label, format_range_label_with,
};
use timescale_rs::core::{CUSTOM_KEY, TimeScale};

fn utc(input: &str) -> DateTime<Utc> {
    input.parse().expect("valid RFC 3339 timestamp")
}

fn anchored_scale(key: &str, window: TimeDelta) -> TimeScale {
    TimeScale::new(key, window, TimeDelta::seconds(30))
        .expect("valid scale")
        .with_fixed_window_end(utc("2023-06-01T18:00:00Z"))
}

#[test]
fn same_day_today_omits_both_dates() {
    let scale = anchored_scale("Past 6 Hours", TimeDelta::hours(6));
    let now = utc("2023-06-01T18:00:00Z");

    let label = format_range_label(&scale, None, "America/New_York", now);
    assert_eq!(label, " 8:00 to  14:01 America/New_York");
}

#[test]
fn same_day_not_today_keeps_start_date_only() {
    let scale = anchored_scale("Past 6 Hours", TimeDelta::hours(6));
    let now = utc("2023-06-05T15:00:00Z");

    let label = format_range_label(&scale, None, "America/New_York", now);
    assert_eq!(label, "Jun 01, 8:00 to  14:01 America/New_York");
}

#[test]
fn different_days_render_both_dates() {
    let scale = anchored_scale("Past 2 Days", TimeDelta::days(2));
    let now = utc("2023-06-01T18:00:00Z");

    let label = format_range_label(&scale, None, "America/New_York", now);
    assert_eq!(label, "May 30, 14:00 to Jun 01, 14:01 America/New_York");
}

#[test]
fn projection_happens_before_day_comparison() {
    // One UTC day, but the window straddles midnight in New York.
    let scale = TimeScale::new("Past 4 Hours", TimeDelta::hours(4), TimeDelta::seconds(30))
        .expect("valid scale")
        .with_fixed_window_end(utc("2023-06-01T06:00:00Z"));
    let now = utc("2023-06-01T06:00:00Z");

    let label = format_range_label(&scale, None, "America/New_York", now);
    assert_eq!(label, "May 31, 22:00 to Jun 01, 2:01 America/New_York");
}

#[test]
fn reference_timestamp_overrides_end_time_for_presets() {
    let scale = anchored_scale("Past 1 Hour", TimeDelta::hours(1));
    let now = utc("2023-06-01T18:00:00Z");
    let reference = Some(utc("2023-06-01T17:45:30Z"));

    let label = format_range_label(&scale, reference, "America/New_York", now);
    assert_eq!(label, " 13:00 to  13:45 America/New_York");
}

#[test]
fn custom_key_ignores_reference_timestamp() {
    let scale = anchored_scale(CUSTOM_KEY, TimeDelta::hours(1));
    let now = utc("2023-06-01T18:00:00Z");
    let reference = Some(utc("2023-06-01T17:45:30Z"));

    let label = format_range_label(&scale, reference, "America/New_York", now);
    assert_eq!(label, " 13:00 to  14:01 America/New_York");
}

#[test]
fn absent_reference_falls_back_to_resolved_end() {
    let scale = anchored_scale("Past 1 Hour", TimeDelta::hours(1));
    let now = utc("2023-06-01T18:00:00Z");

    let label = format_range_label(&scale, None, "America/New_York", now);
    assert_eq!(label, " 13:00 to  14:01 America/New_York");
}

#[test]
fn moving_window_rounds_an_unaligned_now() {
    let scale = TimeScale::new("Past 1 Hour", TimeDelta::hours(1), TimeDelta::seconds(30))
        .expect("valid scale");
    let now = utc("2023-06-01T18:30:45Z");

    let label = format_range_label(&scale, None, "UTC", now);
    assert_eq!(label, " 17:30 to  18:31 UTC");
}

#[test]
fn unknown_timezone_projects_in_utc_but_keeps_the_label() {
    let scale = anchored_scale("Past 1 Hour", TimeDelta::hours(1));
    let now = utc("2023-06-01T18:00:00Z");

    let label = format_range_label(&scale, None, "Not/AZone", now);
    assert_eq!(label, " 17:00 to  18:01 Not/AZone");
}

#[test]
fn abbreviation_style_renders_short_zone_name() {
    let scale = anchored_scale("Past 1 Hour", TimeDelta::hours(1));
    let now = utc("2023-06-01T18:00:00Z");
    let config = RangeLabelConfig::default().with_zone_style(ZoneLabelStyle::Abbreviation);

    let label = format_range_label_with(&scale, None, "America/New_York", now, &config);
    assert_eq!(label, " 13:00 to  14:01 EDT");
}

#[test]
fn custom_patterns_replace_the_defaults() {
    let scale = anchored_scale("Past 2 Days", TimeDelta::days(2));
    let now = utc("2023-06-01T18:00:00Z");
    let config = RangeLabelConfig::default()
        .with_date_pattern("%Y-%m-%d")
        .with_time_pattern("%H:%M");

    let label = format_range_label_with(&scale, None, "America/New_York", now, &config);
    assert_eq!(label, "2023-05-30 14:00 to 2023-06-01 14:01 America/New_York");
}
