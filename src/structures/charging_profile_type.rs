use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::enums::charging_profile_kind_enum_type::ChargingProfileKindEnumType;
use crate::enums::charging_profile_purpose_enum_type::ChargingProfilePurposeEnumType;
use crate::enums::recurrency_kind_enum_type::RecurrencyKindEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::charging_schedule_type::ChargingScheduleType;
use crate::traits::OcppEntity;

/// Represents a charging profile: one entry in a connector's three-level profile stack
/// (ChargePointMaxProfile, TxDefaultProfile, TxProfile).
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChargingProfileType {
    /// Required. Id of ChargingProfile. Unique within Charging Station.
    pub id: i32,

    /// Required. Value determining level in hierarchy stack of profiles.
    /// Higher values have precedence over lower values. Lowest level is 0.
    /// Constraints: 0 <= val
    pub stack_level: i32,

    /// Required. Defines the purpose of the schedule transferred by this profile.
    pub charging_profile_purpose: ChargingProfilePurposeEnumType,
    /// Required. Indicates the kind of schedule.
    pub charging_profile_kind: ChargingProfileKindEnumType,
    /// Optional. Indicates start point of a recurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrency_kind: Option<RecurrencyKindEnumType>,
    /// Optional. Point in time at which the profile starts to be valid.
    /// If absent, the profile is valid as soon as it is received by the Charging Station.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    /// Optional. Point in time at which the profile stops to be valid.
    /// If absent, the profile is valid until it is replaced by another profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<DateTime<Utc>>,

    /// Optional. SHALL only be included if ChargingProfilePurpose is set to TxProfile in a SetChargingProfileRequest.
    /// String length: 0..36
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// Required. Schedule that contains limits for the available power or current over time.
    pub charging_schedule: ChargingScheduleType,
}

#[typetag::serde]
impl OcppEntity for ChargingProfileType {
    fn validate(&self) -> Result<(), OcppError> {
        let mut e = StructureValidationBuilder::new();
        e.check_bounds("stack_level", 0, i32::MAX, self.stack_level);

        if let Some(transaction_id) = &self.transaction_id {
            e.check_cardinality("transaction_id", 0, 36, &transaction_id.chars());

            if self.charging_profile_purpose != ChargingProfilePurposeEnumType::TxProfile {
                e.push_relation_error(
                    "transaction_id",
                    "charging_profile_purpose",
                    "transaction_id SHALL only be included if ChargingProfilePurpose is set to TxProfile in a SetChargingProfileRequest.",
                );
            }
        }

        e.check_member("charging_schedule", &self.charging_schedule);

        e.build("ChargingProfileType")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::charging_profile_kind_enum_type::ChargingProfileKindEnumType;
    use crate::errors::assert_invalid_fields;

    fn sample(purpose: ChargingProfilePurposeEnumType) -> ChargingProfileType {
        ChargingProfileType {
            id: 1,
            stack_level: 0,
            charging_profile_purpose: purpose,
            charging_profile_kind: ChargingProfileKindEnumType::Absolute,
            recurrency_kind: None,
            valid_from: None,
            valid_to: None,
            transaction_id: None,
            charging_schedule: ChargingScheduleType::default(),
        }
    }

    #[test]
    fn test_validation_valid() {
        assert!(sample(ChargingProfilePurposeEnumType::TxDefaultProfile)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_transaction_id_requires_tx_profile_purpose() {
        let mut profile = sample(ChargingProfilePurposeEnumType::TxDefaultProfile);
        profile.transaction_id = Some("tx-1".to_string());
        let err = profile.validate().unwrap_err();
        assert_invalid_fields(&err, &["transaction_id", "charging_profile_purpose"]);
    }

    #[test]
    fn test_transaction_id_with_tx_profile_purpose_ok() {
        let mut profile = sample(ChargingProfilePurposeEnumType::TxProfile);
        profile.transaction_id = Some("tx-1".to_string());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_serialization_deserialization() {
        let profile = sample(ChargingProfilePurposeEnumType::TxDefaultProfile);
        let serialized = serde_json::to_string(&profile).unwrap();
        let deserialized: ChargingProfileType = serde_json::from_str(&serialized).unwrap();
        assert_eq!(profile, deserialized);
    }
}
