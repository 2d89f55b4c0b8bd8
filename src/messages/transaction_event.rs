use crate::enums::transaction_event_enum_type::TransactionEventEnumType;
use crate::enums::trigger_reason_enum_type::TriggerReasonEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::evse_type::EVSEType;
use crate::structures::id_token_info_type::IdTokenInfoType;
use crate::structures::id_token_type::IdTokenType;
use crate::structures::meter_value_type::MeterValueType;
use crate::structures::transaction_type::TransactionType;
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// 1.26. TransactionEvent
/// Sent by the Charging Station to report the start, update, and end of a transaction
/// on a connector.
pub struct TransactionEvent;

impl OcppMessage for TransactionEvent {
    type Request = TransactionEventRequest;
    type Response = TransactionEventResponse;
}

/// 1.26.1. TransactionEventRequest
/// This contains the field definition of the TransactionEventRequest PDU sent by the Charging Station to the CSMS.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEventRequest {
    /// Required. The type of this event.
    pub event_type: TransactionEventEnumType,
    /// Required. The date and time at which this transaction event occurred.
    pub timestamp: DateTime<Utc>,
    /// Required. Reason the Charging Station sends this message to the CSMS.
    pub trigger_reason: TriggerReasonEnumType,
    /// Required. Incremental sequence number, helps with determining if all messages of a transaction have been received.
    pub seq_no: i32,
    /// Optional. Indication that this transaction event happened when the Charging Station was offline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline: Option<bool>,
    /// Optional. If the Charging Station is able to report the number of phases used, this contains that number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_phases_used: Option<i32>,
    /// Optional. The maximum current of the connector that the Charging Station has made available for this transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cable_max_current: Option<i32>,
    /// Optional. This contains the Id of the reservation that terminates as a result of this transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<i32>,
    /// Required. Additional information about the transaction.
    pub transaction_info: TransactionType,
    /// Optional. Identifies the EVSE (and connector) for which the transaction event is reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evse: Option<EVSEType>,
    /// Optional. Identifier used for authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<IdTokenType>,
    /// Optional. One or more measured values reported with this event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_value: Option<Vec<MeterValueType>>,
}

#[typetag::serde]
impl OcppEntity for TransactionEventRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        b.check_bounds("seq_no", 0, i32::MAX, self.seq_no);
        b.check_member("transaction_info", &self.transaction_info);

        if let Some(number_of_phases_used) = self.number_of_phases_used {
            b.check_bounds("number_of_phases_used", 0, 3, number_of_phases_used);
        }

        if let Some(cable_max_current) = self.cable_max_current {
            b.check_bounds("cable_max_current", 0, i32::MAX, cable_max_current);
        }

        if let Some(reservation_id) = self.reservation_id {
            b.check_bounds("reservation_id", 0, i32::MAX, reservation_id);
        }

        if let Some(evse) = &self.evse {
            b.check_member("evse", evse);
        }

        if let Some(id_token) = &self.id_token {
            b.check_member("id_token", id_token);
        }

        if let Some(meter_value) = &self.meter_value {
            b.check_iter_member("meter_value", meter_value.iter());
        }

        b.build("TransactionEventRequest")
    }
}

#[typetag::serde]
impl OcppRequest for TransactionEventRequest {
    fn get_message_type(&self) -> String {
        String::from("TransactionEvent")
    }
}

/// 1.26.2. TransactionEventResponse
/// This contains the field definition of the TransactionEventResponse PDU sent by the CSMS to the Charging Station in response to a TransactionEventRequest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEventResponse {
    /// Optional. The total cost of the transaction so far, as calculated by the CSMS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    /// Optional. Priority from a business point of view for this transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charging_priority: Option<i32>,
    /// Optional. Current status information about the identifier. It is advised to only send this information if the IdToken is different from the IdToken in the original request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token_info: Option<IdTokenInfoType>,
    /// Optional. A personal message that may be shown to the EV Driver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_personal_message: Option<crate::structures::message_content_type::MessageContentType>,
}

#[typetag::serde]
impl OcppEntity for TransactionEventResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        if let Some(charging_priority) = self.charging_priority {
            b.check_bounds("charging_priority", -9, 9, charging_priority);
        }

        if let Some(id_token_info) = &self.id_token_info {
            b.check_member("id_token_info", id_token_info);
        }

        if let Some(updated_personal_message) = &self.updated_personal_message {
            b.check_member("updated_personal_message", updated_personal_message);
        }

        b.build("TransactionEventResponse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::charging_state_enum_type::ChargingStateEnumType;

    #[test]
    fn test_msg() {
        let _req = TransactionEvent::request();
        let _resp = TransactionEvent::response();
    }

    #[test]
    fn test_request_serialize_deserialize() {
        let req = TransactionEventRequest::default();
        let json = serde_json::to_string(&req).unwrap();
        let deserialized: TransactionEventRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, deserialized);
    }

    #[test]
    fn test_response_serialize_deserialize() {
        let resp = TransactionEventResponse::default();
        let json = serde_json::to_string(&resp).unwrap();
        let deserialized: TransactionEventResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(resp, deserialized);
    }

    #[test]
    fn test_request_validate() {
        assert!(TransactionEvent::request().validate().is_ok());
    }

    #[test]
    fn test_request_validate_started() {
        let mut req = TransactionEventRequest {
            event_type: TransactionEventEnumType::Started,
            trigger_reason: TriggerReasonEnumType::CablePluggedIn,
            seq_no: 0,
            ..Default::default()
        };
        req.transaction_info.transaction_id = "tx-1".to_string();
        req.transaction_info.charging_state = Some(ChargingStateEnumType::EVConnected);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_request_validate_failure_negative_seq_no() {
        let req = TransactionEventRequest {
            seq_no: -1,
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_validate() {
        assert!(TransactionEvent::response().validate().is_ok());
    }
}
