use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct InputConfig {
    pub company_path: String,
    pub customer_path: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct MatchingConfig {
    /// Emit the reconciled rows in randomized order.
    pub shuffle: bool,
    /// Fixed seed for the shuffle; None draws from entropy.
    pub shuffle_seed: Option<u64>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            shuffle: true,
            shuffle_seed: None,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ExportConfig {
    pub out_path: String,
    pub summary_path: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_path: "combined_data.csv".into(),
            summary_path: None,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub inputs: InputConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inputs.company_path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "inputs.company_path",
            });
        }
        if self.inputs.customer_path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "inputs.customer_path",
            });
        }
        if self.inputs.company_path == self.inputs.customer_path {
            return Err(ConfigError::InvalidValue {
                field: "inputs.customer_path",
                reason: "company and customer lists must be different files".into(),
            });
        }
        if self.export.out_path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "export.out_path",
            });
        }
        Ok(())
    }
}
