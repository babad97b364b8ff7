use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartsConfig;

pub const CHARTS_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartsConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartsConfig,
}

impl ChartsConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartsConfigJsonContractV1 {
            schema_version: CHARTS_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize charts config contract v1: {e}"))
        })
    }

    /// Accepts either a versioned contract payload or a bare config object.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse charts config json payload: {e}"))
        })?;
        if value.get("schema_version").is_none() {
            return Self::from_json_str(input);
        }

        let payload: ChartsConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse charts config contract: {e}"))
        })?;
        if payload.schema_version != CHARTS_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported charts config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }

    pub fn load_json_file(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)
            .map_err(|err| ChartError::data_unavailable(path.display().to_string(), err))?;
        Self::from_json_compat_str(&input)
    }
}
