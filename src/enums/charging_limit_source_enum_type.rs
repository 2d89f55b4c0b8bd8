use crate::errors::OcppError;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// Source that a charging limit or charging schedule originates from.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub enum ChargingLimitSourceEnumType {
    /// Indicates that a charging limit or schedule was set by the CSO (CSMS/SetChargingProfile).
    CSO,
    /// Indicates that a charging limit or schedule was set by a energy management system.
    EMS,
    /// Indicates that a charging limit or schedule was set by the operator of the charging station, as configured locally.
    Other,
    /// Indicates that a charging limit or schedule was set by the Smart Charging scheduler based on smart charging rules.
    SCP,
}

impl fmt::Display for ChargingLimitSourceEnumType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::CSO => write!(f, "CSO"),
            Self::EMS => write!(f, "EMS"),
            Self::Other => write!(f, "Other"),
            Self::SCP => write!(f, "SCP"),
        }
    }
}

impl Into<String> for ChargingLimitSourceEnumType {
    fn into(self) -> String {
        self.to_string()
    }
}

impl TryFrom<&str> for ChargingLimitSourceEnumType {
    type Error = OcppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "CSO" => Ok(Self::CSO),
            "EMS" => Ok(Self::EMS),
            "Other" => Ok(Self::Other),
            "SCP" => Ok(Self::SCP),
            _ => Err(OcppError::InvalidEnumValueError {
                enum_name: "ChargingLimitSourceEnumType".to_string(),
                value: value.to_string(),
            }),
        }
    }
}
