use crate::enums::upload_log_status_enum_type::UploadLogStatusEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use serde::{Deserialize, Serialize};

/// 1.29. LogStatusNotification
pub struct LogStatusNotification;

impl OcppMessage for LogStatusNotification {
    type Request = LogStatusNotificationRequest;
    type Response = LogStatusNotificationResponse;
}

/// 1.29.1. LogStatusNotificationRequest
/// This contains the field definition of the LogStatusNotificationRequest PDU sent by the Charging Station to the CSMS, reporting the status of a log upload previously requested via GetLog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogStatusNotificationRequest {
    /// Required. This contains the status of the log upload.
    pub status: UploadLogStatusEnumType,
    /// Optional. The request id that was provided in the GetLogRequest that started this log upload.
    pub request_id: Option<i32>,
}

impl Default for LogStatusNotificationRequest {
    fn default() -> Self {
        Self {
            status: UploadLogStatusEnumType::Idle,
            request_id: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for LogStatusNotificationRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        if let Some(request_id) = self.request_id {
            b.check_bounds("request_id", 0, i32::MAX, request_id);
        }

        b.build("LogStatusNotificationRequest")
    }
}

impl OcppRequest for LogStatusNotificationRequest {
    fn get_message_type(&self) -> String {
        String::from("LogStatusNotification")
    }
}

/// 1.29.2. LogStatusNotificationResponse
/// This contains the field definition of the LogStatusNotificationResponse PDU sent by the CSMS to the Charging Station in response to a LogStatusNotificationRequest. No fields are defined.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogStatusNotificationResponse {}

#[typetag::serde]
impl OcppEntity for LogStatusNotificationResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let b = StructureValidationBuilder::new();
        b.build("LogStatusNotificationResponse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg() {
        let _req = LogStatusNotification::request();
        let _resp = LogStatusNotification::response();
    }

    #[test]
    fn test_request_serialize_deserialize() {
        let req = LogStatusNotificationRequest::default();
        let json = serde_json::to_string(&req).unwrap();
        let deserialized: LogStatusNotificationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, deserialized);
    }

    #[test]
    fn test_response_serialize_deserialize() {
        let resp = LogStatusNotificationResponse::default();
        let json = serde_json::to_string(&resp).unwrap();
        let deserialized: LogStatusNotificationResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(resp, deserialized);
    }

    #[test]
    fn test_request_validate() {
        assert!(LogStatusNotification::request().validate().is_ok());
    }

    #[test]
    fn test_response_validate() {
        assert!(LogStatusNotification::response().validate().is_ok());
    }
}
