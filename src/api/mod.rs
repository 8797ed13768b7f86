pub mod label_config;
pub mod range_label;
pub mod session_contract;

pub use label_config::{DATE_PATTERN, RangeLabelConfig, TIME_PATTERN, ZoneLabelStyle};
pub use range_label::{format_range_label, format_range_label_with};
pub use session_contract::{TIME_SCALE_JSON_SCHEMA_V1, TimeScaleJsonContractV1};
