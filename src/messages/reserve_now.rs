use crate::enums::reserve_now_status_enum_type::ReserveNowStatusEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::id_token_type::IdTokenType;
use crate::structures::status_info_type::StatusInfoType;
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 1.37. ReserveNow
pub struct ReserveNow;

impl OcppMessage for ReserveNow {
    type Request = ReserveNowRequest;
    type Response = ReserveNowResponse;
}

/// 1.37.1. ReserveNowRequest
/// This contains the field definition of the ReserveNowRequest PDU sent by the CSMS to the Charging Station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReserveNowRequest {
    /// Required. Id of the reservation.
    pub id: i32,
    /// Required. Date and time at which the reservation expires.
    pub expiry_date_time: DateTime<Utc>,
    /// Required. The identifier for which the Charging Station has to reserve a connector.
    pub id_token: IdTokenType,
    /// Optional. This contains the id of the EVSE that SHALL be reserved. A value of 0 means that the reservation is not for a specific EVSE.
    pub evse_id: Option<i32>,
    /// Optional. This contains the group identifier for which the reservation is being made.
    pub group_id_token: Option<IdTokenType>,
}

impl Default for ReserveNowRequest {
    fn default() -> Self {
        Self {
            id: 1,
            expiry_date_time: Utc::now(),
            id_token: IdTokenType::default(),
            evse_id: None,
            group_id_token: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for ReserveNowRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        b.check_member("id_token", &self.id_token);

        if let Some(evse_id) = self.evse_id {
            b.check_bounds("evse_id", 0, i32::MAX, evse_id);
        }

        if let Some(group_id_token) = &self.group_id_token {
            b.check_member("group_id_token", group_id_token);
        }

        b.build("ReserveNowRequest")
    }
}

impl OcppRequest for ReserveNowRequest {
    fn get_message_type(&self) -> String {
        String::from("ReserveNow")
    }
}

/// 1.37.2. ReserveNowResponse
/// This contains the field definition of the ReserveNowResponse PDU sent by the Charging Station to the CSMS in response to a ReserveNowRequest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReserveNowResponse {
    /// Required. This indicates the success or failure of the reservation.
    pub status: ReserveNowStatusEnumType,
    /// Optional. Detailed status information.
    pub status_info: Option<StatusInfoType>,
}

impl Default for ReserveNowResponse {
    fn default() -> Self {
        Self {
            status: ReserveNowStatusEnumType::Accepted,
            status_info: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for ReserveNowResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        if let Some(status_info) = &self.status_info {
            b.check_member("status_info", status_info);
        }

        b.build("ReserveNowResponse")
    }
}
