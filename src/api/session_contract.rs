use serde::{Deserialize, Serialize};

use crate::core::scale::TimeScale;
use crate::error::{ScaleError, ScaleResult};

pub const TIME_SCALE_JSON_SCHEMA_V1: u32 = 1;

/// Versioned payload for persisting a window selection in session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeScaleJsonContractV1 {
    pub schema_version: u32,
    pub scale: TimeScale,
}

impl TimeScale {
    pub fn to_json_contract_v1_pretty(&self) -> ScaleResult<String> {
        let payload = TimeScaleJsonContractV1 {
            schema_version: TIME_SCALE_JSON_SCHEMA_V1,
            scale: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ScaleError::InvalidData(format!("failed to serialize scale contract v1: {e}"))
        })
    }

    /// Parses either a bare scale or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ScaleResult<Self> {
        if let Ok(scale) = serde_json::from_str::<TimeScale>(input) {
            return Ok(scale);
        }
        let payload: TimeScaleJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| ScaleError::InvalidData(format!("failed to parse scale json payload: {e}")))?;
        if payload.schema_version != TIME_SCALE_JSON_SCHEMA_V1 {
            return Err(ScaleError::InvalidData(format!(
                "unsupported scale schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.scale)
    }
}
