use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::charging_rate_unit_enum_type::ChargingRateUnitEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::charging_schedule_period_type::ChargingSchedulePeriodType;
use crate::traits::OcppEntity;

/// The result of a GetCompositeScheduleRequest: the merged output of all active charging
/// profile stacks for a single EVSE, flattened into one piecewise-constant schedule.
/// Used by: GetCompositeScheduleResponse
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CompositeScheduleType {
    /// Required. The EVSE to which the schedule applies. 0 denotes the whole Charging Station.
    /// Constraints: 0 <= val
    pub evse_id: i32,
    /// Required.
    pub duration: i32,
    /// Required.
    pub schedule_start: DateTime<Utc>,
    /// Required.
    pub charging_rate_unit: ChargingRateUnitEnumType,
    /// Required. List of ChargingSchedulePeriod elements defining maximum power or current over time.
    /// Cardinality 1..*
    pub charging_schedule_period: Vec<ChargingSchedulePeriodType>,
}

#[typetag::serde]
impl OcppEntity for CompositeScheduleType {
    /// Validates the fields of CompositeScheduleType based on specified constraints.
    /// Returns `Ok(())` if all values are valid, or `Err(OcppError::StructureValidationError)` if validation fails.
    fn validate(&self) -> Result<(), OcppError> {
        let mut e = StructureValidationBuilder::new();

        e.check_bounds("evse_id", 0, i32::MAX, self.evse_id);
        e.check_cardinality(
            "charging_schedule_period",
            1,
            usize::MAX,
            &self.charging_schedule_period.iter(),
        );
        e.check_iter_member("charging_schedule_period", self.charging_schedule_period.iter());

        e.build("CompositeScheduleType")
    }
}
