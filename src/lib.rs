//! timescale-rs: time-scale selection and range-label formatting.
//!
//! This crate provides the time-window model behind a dashboard's range
//! dropdown: named window presets, resolution of a selection into a concrete
//! UTC instant pair, and a pure formatter that renders the human-readable
//! range label with timezone projection and date-omission rules.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{RangeLabelConfig, ZoneLabelStyle, format_range_label, format_range_label_with};
pub use core::{TimeRange, TimeScale, TimeScaleCollection};
pub use error::{ScaleError, ScaleResult};
