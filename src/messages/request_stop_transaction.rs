use crate::enums::requested_start_stop_status_enum_type::RequestStartStopStatusEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::status_info_type::StatusInfoType;
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use serde::{Deserialize, Serialize};

/// 1.34. RequestStopTransaction
pub struct RequestStopTransaction;

impl OcppMessage for RequestStopTransaction {
    type Request = RequestStopTransactionRequest;
    type Response = RequestStopTransactionResponse;
}

/// 1.34.1. RequestStopTransactionRequest
/// This contains the field definition of the RequestStopTransactionRequest PDU sent by the CSMS to the Charging Station.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestStopTransactionRequest {
    /// Required. The identifier of the transaction which the Charging Station is requested to stop.
    pub transaction_id: String,
}

#[typetag::serde]
impl OcppEntity for RequestStopTransactionRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        b.check_cardinality("transaction_id", 0, 36, &self.transaction_id.chars());

        b.build("RequestStopTransactionRequest")
    }
}

impl OcppRequest for RequestStopTransactionRequest {
    fn get_message_type(&self) -> String {
        String::from("RequestStopTransaction")
    }
}

/// 1.34.2. RequestStopTransactionResponse
/// This contains the field definition of the RequestStopTransactionResponse PDU sent by the Charging Station to the CSMS in response to a RequestStopTransactionRequest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestStopTransactionResponse {
    /// Required. Status indicating whether the Charging Station accepts the request to stop a transaction.
    pub status: RequestStartStopStatusEnumType,
    /// Optional. Detailed status information.
    pub status_info: Option<StatusInfoType>,
}

impl Default for RequestStopTransactionResponse {
    fn default() -> Self {
        Self {
            status: RequestStartStopStatusEnumType::Accepted,
            status_info: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for RequestStopTransactionResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        if let Some(status_info) = &self.status_info {
            b.check_member("status_info", status_info);
        }

        b.build("RequestStopTransactionResponse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg() {
        let _req = RequestStopTransaction::request();
        let _resp = RequestStopTransaction::response();
    }

    #[test]
    fn test_request_serialize_deserialize() {
        let req = RequestStopTransactionRequest::default();
        let json = serde_json::to_string(&req).unwrap();
        let deserialized: RequestStopTransactionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, deserialized);
    }

    #[test]
    fn test_response_serialize_deserialize() {
        let resp = RequestStopTransactionResponse::default();
        let json = serde_json::to_string(&resp).unwrap();
        let deserialized: RequestStopTransactionResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(resp, deserialized);
    }

    #[test]
    fn test_request_validate() {
        assert!(RequestStopTransaction::request().validate().is_ok());
    }

    #[test]
    fn test_response_validate() {
        assert!(RequestStopTransaction::response().validate().is_ok());
    }
}
