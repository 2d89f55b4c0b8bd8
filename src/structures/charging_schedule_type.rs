use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::charging_rate_unit_enum_type::ChargingRateUnitEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::charging_schedule_period_type::ChargingSchedulePeriodType;
use crate::traits::OcppEntity;

/// Represents a charging schedule.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChargingScheduleType {
    /// Required.
    pub id: i32,
    /// Optional. Starting point of an absolute schedule or recurring schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_schedule: Option<DateTime<Utc>>,
    /// Optional. Duration of the charging schedule in seconds.
    /// If the duration is left empty, the last period will continue indefinitely
    /// or until the end of the transaction in case startSchedule is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    /// Required. The unit of measure in which limits and setpoints are expressed.
    pub charging_rate_unit: ChargingRateUnitEnumType,
    /// Optional. Minimum charging rate supported by the EV.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_charging_rate: Option<f64>,
    /// Required. List of ChargingSchedulePeriod elements defining maximum power or current usage over time.
    /// Cardinality 1..1024
    pub charging_schedule_period: Vec<ChargingSchedulePeriodType>,
}

impl Default for ChargingScheduleType {
    fn default() -> Self {
        Self {
            id: 0,
            start_schedule: None,
            duration: None,
            charging_rate_unit: ChargingRateUnitEnumType::W,
            min_charging_rate: None,
            charging_schedule_period: vec![ChargingSchedulePeriodType::default()],
        }
    }
}

#[typetag::serde]
impl OcppEntity for ChargingScheduleType {
    /// Validates the fields of ChargingScheduleType based on specified constraints.
    /// Returns `Ok(())` if all values are valid, or `Err(OcppError::StructureValidationError)` if validation fails.
    fn validate(&self) -> Result<(), OcppError> {
        let mut e = StructureValidationBuilder::new();

        if let Some(duration) = self.duration {
            e.check_bounds("duration", 0, i32::MAX, duration);
        }

        e.check_cardinality(
            "charging_schedule_period",
            1,
            1024,
            &self.charging_schedule_period.iter(),
        );
        e.check_iter_member("charging_schedule_period", self.charging_schedule_period.iter());

        e.build("ChargingScheduleType")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_invalid_fields;
    use chrono::TimeZone;

    #[test]
    fn test_serialization_deserialization() {
        let schedule = ChargingScheduleType {
            id: 1,
            start_schedule: Some(Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap()),
            duration: Some(3600),
            charging_rate_unit: ChargingRateUnitEnumType::A,
            min_charging_rate: Some(6.0),
            charging_schedule_period: vec![ChargingSchedulePeriodType::default()],
        };

        let serialized = serde_json::to_string(&schedule).unwrap();
        let deserialized: ChargingScheduleType = serde_json::from_str(&serialized).unwrap();
        assert_eq!(schedule, deserialized);
    }

    #[test]
    fn test_validation_valid() {
        assert!(ChargingScheduleType::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_periods() {
        let schedule = ChargingScheduleType {
            charging_schedule_period: vec![],
            ..Default::default()
        };
        let err = schedule.validate().unwrap_err();
        assert_invalid_fields(&err, &["charging_schedule_period"]);
    }

    #[test]
    fn test_validation_too_many_periods() {
        let schedule = ChargingScheduleType {
            charging_schedule_period: vec![ChargingSchedulePeriodType::default(); 1025],
            ..Default::default()
        };
        let err = schedule.validate().unwrap_err();
        assert_invalid_fields(&err, &["charging_schedule_period"]);
    }
}
