use crate::enums::reset_enum_type::ResetEnumType;
use crate::enums::reset_status_enum_type::ResetStatusEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::status_info_type::StatusInfoType;
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use serde::{Deserialize, Serialize};

/// 1.38. Reset
pub struct Reset;

impl OcppMessage for Reset {
    type Request = ResetRequest;
    type Response = ResetResponse;
}

/// 1.38.1. ResetRequest
/// This contains the field definition of the ResetRequest PDU sent by the CSMS to the Charging Station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResetRequest {
    /// Required. This contains the type of reset that the Charging Station should perform.
    #[serde(rename = "type")]
    pub type_: ResetEnumType,
    /// Optional. This contains the ID of a specific EVSE that needs to be reset, instead of the entire Charging Station.
    pub evse_id: Option<i32>,
}

impl Default for ResetRequest {
    fn default() -> Self {
        Self {
            type_: ResetEnumType::OnIdle,
            evse_id: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for ResetRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        if let Some(evse_id) = self.evse_id {
            b.check_bounds("evse_id", 0, i32::MAX, evse_id);
        }

        b.build("ResetRequest")
    }
}

impl OcppRequest for ResetRequest {
    fn get_message_type(&self) -> String {
        String::from("Reset")
    }
}

/// 1.38.2. ResetResponse
/// This contains the field definition of the ResetResponse PDU sent by the Charging Station to the CSMS in response to a ResetRequest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    /// Required. This indicates whether the Charging Station is able to perform the reset.
    pub status: ResetStatusEnumType,
    /// Optional. Detailed status information.
    pub status_info: Option<StatusInfoType>,
}

impl Default for ResetResponse {
    fn default() -> Self {
        Self {
            status: ResetStatusEnumType::Accepted,
            status_info: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for ResetResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        if let Some(status_info) = &self.status_info {
            b.check_member("status_info", status_info);
        }

        b.build("ResetResponse")
    }
}
