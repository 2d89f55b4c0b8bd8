use crate::enums::charging_profile_kind_enum_type::ChargingProfileKindEnumType;
use crate::enums::charging_profile_purpose_enum_type::ChargingProfilePurposeEnumType;
use crate::enums::charging_profile_status_enum_type::ChargingProfileStatusEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::charging_profile_type::ChargingProfileType;
use crate::structures::charging_schedule_type::ChargingScheduleType;
use crate::structures::status_info_type::StatusInfoType;
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use serde::{Deserialize, Serialize};

/// 1.39. SetChargingProfile
pub struct SetChargingProfile;

impl OcppMessage for SetChargingProfile {
    type Request = SetChargingProfileRequest;
    type Response = SetChargingProfileResponse;
}

/// 1.39.1. SetChargingProfileRequest
/// This contains the field definition of the SetChargingProfileRequest PDU sent by the CSMS to the Charging Station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetChargingProfileRequest {
    /// Required. The EVSE to which the charging profile applies. If evseId = 0, the message contains an overall limit for the Charging Station.
    pub evse_id: i32,
    /// Required. The charging profile to be set at the Charging Station.
    pub charging_profile: ChargingProfileType,
}

impl Default for SetChargingProfileRequest {
    fn default() -> Self {
        Self {
            evse_id: 1,
            charging_profile: ChargingProfileType {
                id: 1,
                stack_level: 0,
                charging_profile_purpose: ChargingProfilePurposeEnumType::TxDefaultProfile,
                charging_profile_kind: ChargingProfileKindEnumType::Absolute,
                recurrency_kind: None,
                valid_from: None,
                valid_to: None,
                transaction_id: None,
                charging_schedule: ChargingScheduleType::default(),
            },
        }
    }
}

#[typetag::serde]
impl OcppEntity for SetChargingProfileRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        b.check_bounds("evse_id", 0, i32::MAX, self.evse_id);
        b.check_member("charging_profile", &self.charging_profile);

        b.build("SetChargingProfileRequest")
    }
}

impl OcppRequest for SetChargingProfileRequest {
    fn get_message_type(&self) -> String {
        String::from("SetChargingProfile")
    }
}

/// 1.39.2. SetChargingProfileResponse
/// This contains the field definition of the SetChargingProfileResponse PDU sent by the Charging Station to the CSMS in response to a SetChargingProfileRequest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetChargingProfileResponse {
    /// Required. Returns whether the Charging Station has applied the charging profile.
    pub status: ChargingProfileStatusEnumType,
    /// Optional. Detailed status information.
    pub status_info: Option<StatusInfoType>,
}

impl Default for SetChargingProfileResponse {
    fn default() -> Self {
        Self {
            status: ChargingProfileStatusEnumType::Accepted,
            status_info: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for SetChargingProfileResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        if let Some(status_info) = &self.status_info {
            b.check_member("status_info", status_info);
        }

        b.build("SetChargingProfileResponse")
    }
}
