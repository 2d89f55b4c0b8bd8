use crate::enums::charging_limit_source_enum_type::ChargingLimitSourceEnumType;
use crate::enums::charging_profile_kind_enum_type::ChargingProfileKindEnumType;
use crate::enums::charging_profile_purpose_enum_type::ChargingProfilePurposeEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::charging_profile_type::ChargingProfileType;
use crate::structures::charging_schedule_type::ChargingScheduleType;
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use serde::{Deserialize, Serialize};

/// 1.32. ReportChargingProfiles
pub struct ReportChargingProfiles;

impl OcppMessage for ReportChargingProfiles {
    type Request = ReportChargingProfilesRequest;
    type Response = ReportChargingProfilesResponse;
}

/// 1.32.1. ReportChargingProfilesRequest
/// This contains the field definition of the ReportChargingProfilesRequest PDU sent by the Charging Station to the CSMS, in response to a GetChargingProfilesRequest or when a charging profile was installed/replaced locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportChargingProfilesRequest {
    /// Required. Id used to match this message with a GetChargingProfilesRequest, or 0 when this message is unsolicited.
    pub request_id: i32,
    /// Required. Source that has installed this charging profile.
    pub charging_limit_source: ChargingLimitSourceEnumType,
    /// Required. The charging profiles reported in this message belong to this EVSE.
    pub evse_id: i32,
    /// Required. A list of charging profiles installed on this EVSE.
    pub charging_profile: Vec<ChargingProfileType>,
    /// Optional. "to be continued" indicator. Indicates whether another part of the report follows in an upcoming ReportChargingProfilesRequest message.
    pub tbc: Option<bool>,
}

impl Default for ReportChargingProfilesRequest {
    fn default() -> Self {
        Self {
            request_id: 0,
            charging_limit_source: ChargingLimitSourceEnumType::CSO,
            evse_id: 1,
            charging_profile: vec![ChargingProfileType {
                id: 1,
                stack_level: 0,
                charging_profile_purpose: ChargingProfilePurposeEnumType::TxDefaultProfile,
                charging_profile_kind: ChargingProfileKindEnumType::Absolute,
                recurrency_kind: None,
                valid_from: None,
                valid_to: None,
                transaction_id: None,
                charging_schedule: ChargingScheduleType::default(),
            }],
            tbc: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for ReportChargingProfilesRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        b.check_bounds("request_id", 0, i32::MAX, self.request_id);
        b.check_bounds("evse_id", 0, i32::MAX, self.evse_id);
        b.check_cardinality("charging_profile", 1, usize::MAX, &self.charging_profile.iter());
        b.check_iter_member("charging_profile", self.charging_profile.iter());

        b.build("ReportChargingProfilesRequest")
    }
}

impl OcppRequest for ReportChargingProfilesRequest {
    fn get_message_type(&self) -> String {
        String::from("ReportChargingProfiles")
    }
}

/// 1.32.2. ReportChargingProfilesResponse
/// This contains the field definition of the ReportChargingProfilesResponse PDU sent by the CSMS to the Charging Station in response to a ReportChargingProfilesRequest. No fields are defined.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportChargingProfilesResponse {}

#[typetag::serde]
impl OcppEntity for ReportChargingProfilesResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let b = StructureValidationBuilder::new();
        b.build("ReportChargingProfilesResponse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg() {
        let _req = ReportChargingProfiles::request();
        let _resp = ReportChargingProfiles::response();
    }

    #[test]
    fn test_request_serialize_deserialize() {
        let req = ReportChargingProfilesRequest::default();
        let json = serde_json::to_string(&req).unwrap();
        let deserialized: ReportChargingProfilesRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, deserialized);
    }

    #[test]
    fn test_response_serialize_deserialize() {
        let resp = ReportChargingProfilesResponse::default();
        let json = serde_json::to_string(&resp).unwrap();
        let deserialized: ReportChargingProfilesResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(resp, deserialized);
    }

    #[test]
    fn test_request_validate() {
        assert!(ReportChargingProfiles::request().validate().is_ok());
    }

    #[test]
    fn test_request_validate_empty_profiles_fails() {
        let req = ReportChargingProfilesRequest {
            charging_profile: vec![],
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_validate() {
        assert!(ReportChargingProfiles::response().validate().is_ok());
    }
}
