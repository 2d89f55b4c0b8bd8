use crate::errors::{OcppError, StructureValidationBuilder};
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// 1.31. Heartbeat
pub struct Heartbeat;

impl OcppMessage for Heartbeat {
    type Request = HeartbeatRequest;
    type Response = HeartbeatResponse;
}

/// 1.31.1. HeartbeatRequest
/// This contains the field definition of the HeartbeatRequest PDU sent by the Charging Station to the CSMS. No fields are defined.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatRequest {}
#[typetag::serde]
impl OcppEntity for HeartbeatRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let b = StructureValidationBuilder::new();
        b.build("HeartbeatRequest")
    }
}

#[typetag::serde]
impl OcppRequest for HeartbeatRequest {
    fn get_message_type(&self) -> String {
        String::from("Heartbeat")
    }
}

/// 1.31.2. HeartbeatResponse
/// This contains the field definition of the HeartbeatResponse PDU sent by the CSMS to the Charging Station in response to a HeartbeatRequest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatResponse {
    /// Required. Contains the current time of the CSMS.
    pub current_time: DateTime<Utc>,
}

impl Default for HeartbeatResponse {
    fn default() -> Self {
        Self {
            current_time: Utc::now(),
        }
    }
}

#[typetag::serde]
impl OcppEntity for HeartbeatResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let b = StructureValidationBuilder::new();
        b.build("HeartbeatResponse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg() {
        let _req = Heartbeat::request();
        let _resp = Heartbeat::response();
    }

    #[test]
    fn test_request_serialize_deserialize() {
        let req = HeartbeatRequest::default();
        let json = serde_json::to_string(&req).unwrap();
        let deserialized: HeartbeatRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, deserialized);
    }

    #[test]
    fn test_response_serialize_deserialize() {
        let resp = HeartbeatResponse::default();
        let json = serde_json::to_string(&resp).unwrap();
        let deserialized: HeartbeatResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(resp, deserialized);
    }

    #[test]
    fn test_request_validate() {
        assert!(Heartbeat::request().validate().is_ok());
    }

    #[test]
    fn test_response_validate() {
        assert!(Heartbeat::response().validate().is_ok());
    }
}
