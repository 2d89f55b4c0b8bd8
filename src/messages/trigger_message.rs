use crate::enums::message_trigger_enum_type::MessageTriggerEnumType;
use crate::enums::trigger_message_status_enum_type::TriggerMessageStatusEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::evse_type::EVSEType;
use crate::structures::status_info_type::StatusInfoType;
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use serde::{Deserialize, Serialize};

/// 1.50. TriggerMessage
pub struct TriggerMessage;

impl OcppMessage for TriggerMessage {
    type Request = TriggerMessageRequest;
    type Response = TriggerMessageResponse;
}

/// 1.50.1. TriggerMessageRequest
/// This contains the field definition of the TriggerMessageRequest PDU sent by the CSMS to the Charging Station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TriggerMessageRequest {
    /// Required. Type of message to be triggered.
    pub requested_message: MessageTriggerEnumType,
    /// Optional. Indicates which EVSE, and if applicable connector, the message is about.
    pub evse: Option<EVSEType>,
}

impl Default for TriggerMessageRequest {
    fn default() -> Self {
        Self {
            requested_message: MessageTriggerEnumType::Heartbeat,
            evse: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for TriggerMessageRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        if let Some(evse) = &self.evse {
            b.check_member("evse", evse);
        }

        b.build("TriggerMessageRequest")
    }
}

impl OcppRequest for TriggerMessageRequest {
    fn get_message_type(&self) -> String {
        String::from("TriggerMessage")
    }
}

/// 1.50.2. TriggerMessageResponse
/// This contains the field definition of the TriggerMessageResponse PDU sent by the Charging Station to the CSMS in response to a TriggerMessageRequest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TriggerMessageResponse {
    /// Required. Indicates whether the Charging Station will send the requested notification or not.
    pub status: TriggerMessageStatusEnumType,
    /// Optional. Detailed status information.
    pub status_info: Option<StatusInfoType>,
}

impl Default for TriggerMessageResponse {
    fn default() -> Self {
        Self {
            status: TriggerMessageStatusEnumType::Accepted,
            status_info: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for TriggerMessageResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        if let Some(status_info) = &self.status_info {
            b.check_member("status_info", status_info);
        }

        b.build("TriggerMessageResponse")
    }
}
