use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{OcppError, StructureValidationBuilder};
use crate::traits::OcppEntity;

/// Generic class for the configuration of logging entries.
/// Used by: GetLogRequest
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LogParametersType {
    /// Required. The URL of the location at the remote system where the log should be stored.
    pub remote_location: String,
    /// Optional. The date and time of the oldest logging information to include in the diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest_timestamp: Option<DateTime<Utc>>,
    /// Optional. The date and time of the latest logging information to include in the diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_timestamp: Option<DateTime<Utc>>,
}

impl Default for LogParametersType {
    fn default() -> LogParametersType {
        Self {
            remote_location: "".to_string(),
            oldest_timestamp: None,
            latest_timestamp: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for LogParametersType {
    /// Validates the fields of LogParametersType based on specified constraints.
    /// Returns `Ok(())` if all values are valid, or `Err(OcppError::StructureValidationError)` if validation fails.
    fn validate(&self) -> Result<(), OcppError> {
        let mut e = StructureValidationBuilder::new();

        e.check_cardinality("remote_location", 0, 2000, &self.remote_location.chars());

        if let Some(oldest_timestamp) = &self.oldest_timestamp {
            if let Some(newest_timestamp) = &self.latest_timestamp {
                if newest_timestamp < oldest_timestamp {
                    e.push_relation_error(
                        "oldest_timestamp",
                        "latest_timestamp",
                        "latest_timestamp must be greater than oldest_timestamp!",
                    );
                }
            }
        }

        e.build("LogParametersType")
    }
}
