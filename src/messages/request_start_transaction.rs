use crate::enums::charging_profile_kind_enum_type::ChargingProfileKindEnumType;
use crate::enums::charging_profile_purpose_enum_type::ChargingProfilePurposeEnumType;
use crate::enums::requested_start_stop_status_enum_type::RequestStartStopStatusEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::charging_profile_type::ChargingProfileType;
use crate::structures::id_token_type::IdTokenType;
use crate::structures::status_info_type::StatusInfoType;
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use serde::{Deserialize, Serialize};

/// 1.36. RequestStartTransaction
pub struct RequestStartTransaction;

impl OcppMessage for RequestStartTransaction {
    type Request = RequestStartTransactionRequest;
    type Response = RequestStartTransactionResponse;
}

/// 1.36.1. RequestStartTransactionRequest
/// This contains the field definition of the RequestStartTransactionRequest PDU sent by the CSMS to the Charging Station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestStartTransactionRequest {
    /// Optional. Number of the EVSE on which to start the transaction. EvseId SHALL be > 0.
    pub evse_id: Option<i32>,
    /// Required. Id given by the server to this start request. The Charging Station might return this in the TransactionEventRequest, letting the CSMS know which transaction was started for this request.
    pub remote_start_id: i32,
    /// Required. The identifier that the Charging Station must use to start a transaction.
    pub id_token: IdTokenType,
    /// Optional. Charging profile to be used by the Charging Station for this transaction.
    pub charging_profile: Option<ChargingProfileType>,
    /// Optional. The group identifier that the Charging Station must use to start a transaction.
    pub group_id_token: Option<IdTokenType>,
}

impl Default for RequestStartTransactionRequest {
    fn default() -> Self {
        Self {
            evse_id: None,
            remote_start_id: 1,
            id_token: IdTokenType::default(),
            charging_profile: None,
            group_id_token: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for RequestStartTransactionRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        if let Some(evse_id) = self.evse_id {
            b.check_bounds("evse_id", 1, i32::MAX, evse_id);
        }

        b.check_bounds("remote_start_id", 0, i32::MAX, self.remote_start_id);
        b.check_member("id_token", &self.id_token);

        if let Some(charging_profile) = &self.charging_profile {
            b.check_member("charging_profile", charging_profile);

            if charging_profile.charging_profile_purpose != ChargingProfilePurposeEnumType::TxProfile {
                b.push_relation_error(
                    "charging_profile",
                    "charging_profile.charging_profile_purpose",
                    "charging_profile SHALL have ChargingProfilePurpose set to TxProfile in a RequestStartTransactionRequest.",
                );
            }
        }

        if let Some(group_id_token) = &self.group_id_token {
            b.check_member("group_id_token", group_id_token);
        }

        b.build("RequestStartTransactionRequest")
    }
}

impl OcppRequest for RequestStartTransactionRequest {
    fn get_message_type(&self) -> String {
        String::from("RequestStartTransaction")
    }
}

/// 1.36.2. RequestStartTransactionResponse
/// This contains the field definition of the RequestStartTransactionResponse PDU sent by the Charging Station to the CSMS in response to a RequestStartTransactionRequest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestStartTransactionResponse {
    /// Required. Status indicating whether the Charging Station accepts the request to start a transaction.
    pub status: RequestStartStopStatusEnumType,
    /// Optional. When the transaction was already started by the Charging Station before the CSMS received this request, the transactionId is provided here.
    pub transaction_id: Option<String>,
    /// Optional. Detailed status information.
    pub status_info: Option<StatusInfoType>,
}

impl Default for RequestStartTransactionResponse {
    fn default() -> Self {
        Self {
            status: RequestStartStopStatusEnumType::Accepted,
            transaction_id: None,
            status_info: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for RequestStartTransactionResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        if let Some(transaction_id) = &self.transaction_id {
            b.check_cardinality("transaction_id", 0, 36, &transaction_id.chars());
        }

        if let Some(status_info) = &self.status_info {
            b.check_member("status_info", status_info);
        }

        b.build("RequestStartTransactionResponse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::charging_schedule_type::ChargingScheduleType;

    #[test]
    fn test_msg() {
        let _req = RequestStartTransaction::request();
        let _resp = RequestStartTransaction::response();
    }

    #[test]
    fn test_request_serialize_deserialize() {
        let req = RequestStartTransactionRequest::default();
        let json = serde_json::to_string(&req).unwrap();
        let deserialized: RequestStartTransactionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, deserialized);
    }

    #[test]
    fn test_response_serialize_deserialize() {
        let resp = RequestStartTransactionResponse::default();
        let json = serde_json::to_string(&resp).unwrap();
        let deserialized: RequestStartTransactionResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(resp, deserialized);
    }

    #[test]
    fn test_request_validate() {
        assert!(RequestStartTransaction::request().validate().is_ok());
    }

    #[test]
    fn test_request_validate_rejects_non_tx_profile_purpose() {
        let req = RequestStartTransactionRequest {
            charging_profile: Some(ChargingProfileType {
                id: 1,
                stack_level: 0,
                charging_profile_purpose: ChargingProfilePurposeEnumType::TxDefaultProfile,
                charging_profile_kind: ChargingProfileKindEnumType::Absolute,
                recurrency_kind: None,
                valid_from: None,
                valid_to: None,
                transaction_id: None,
                charging_schedule: ChargingScheduleType::default(),
            }),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_validate() {
        assert!(RequestStartTransaction::response().validate().is_ok());
    }
}
