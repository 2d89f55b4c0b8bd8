use crate::enums::connector_status_enum_type::ConnectorStatusEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// 1.21. StatusNotification
/// Sent by the Charging Station whenever a Connector changes status, and on reconnect to
/// report its current status.
pub struct StatusNotification;

impl OcppMessage for StatusNotification {
    type Request = StatusNotificationRequest;
    type Response = StatusNotificationResponse;
}

/// 1.21.1. StatusNotificationRequest
/// This contains the field definition of the StatusNotificationRequest PDU sent by the Charging Station to the CSMS.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusNotificationRequest {
    /// Required. The time for which the status is reported.
    pub timestamp: DateTime<Utc>,
    /// Required. The current status of the connector.
    pub connector_status: ConnectorStatusEnumType,
    /// Required. The id of the EVSE to which the connector belongs for which the status is reported.
    pub evse_id: i32,
    /// Required. The id of the connector within the EVSE for which the status is reported.
    pub connector_id: i32,
}

impl Default for StatusNotificationRequest {
    fn default() -> Self {
        Self {
            timestamp: Utc::now(),
            connector_status: ConnectorStatusEnumType::default(),
            evse_id: 1,
            connector_id: 1,
        }
    }
}

#[typetag::serde]
impl OcppEntity for StatusNotificationRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        b.check_bounds("evse_id", 1, i32::MAX, self.evse_id);
        b.check_bounds("connector_id", 0, i32::MAX, self.connector_id);

        b.build("StatusNotificationRequest")
    }
}

#[typetag::serde]
impl OcppRequest for StatusNotificationRequest {
    fn get_message_type(&self) -> String {
        String::from("StatusNotification")
    }
}

/// 1.21.2. StatusNotificationResponse
/// This contains the field definition of the StatusNotificationResponse PDU sent by the CSMS to the Charging Station in response to a StatusNotificationRequest. No fields are defined.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusNotificationResponse {}
#[typetag::serde]
impl OcppEntity for StatusNotificationResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let b = StructureValidationBuilder::new();
        b.build("StatusNotificationResponse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg() {
        let _req = StatusNotification::request();
        let _resp = StatusNotification::response();
    }

    #[test]
    fn test_request_serialize_deserialize() {
        let req = StatusNotificationRequest::default();
        let json = serde_json::to_string(&req).unwrap();
        let deserialized: StatusNotificationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, deserialized);
    }

    #[test]
    fn test_response_serialize_deserialize() {
        let resp = StatusNotificationResponse::default();
        let json = serde_json::to_string(&resp).unwrap();
        let deserialized: StatusNotificationResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(resp, deserialized);
    }

    #[test]
    fn test_request_validate() {
        assert!(StatusNotification::request().validate().is_ok());
    }

    #[test]
    fn test_request_validate_failure_evse_id() {
        let mut req = StatusNotificationRequest::default();
        req.evse_id = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_validate() {
        assert!(StatusNotification::response().validate().is_ok());
    }
}
