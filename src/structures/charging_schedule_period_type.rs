use crate::errors::{OcppError, StructureValidationBuilder};
use crate::traits::OcppEntity;
use serde::{Deserialize, Serialize};

/// Charging schedule period structure defines a time period in a charging schedule.
/// It is used in: CompositeScheduleType and in ChargingScheduleType.
/// Used by: Common::ChargingScheduleType, Common::CompositeScheduleType
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChargingSchedulePeriodType {
    /// Required. Start of the period, in seconds from the start of schedule.
    /// The value of StartPeriod also defines the stop time of the previous period.
    /// Constraints: 0 <= val
    pub start_period: i32,

    /// Required. Charging rate limit during the schedule period, in the applicable ChargingRateUnit.
    pub limit: f64,

    /// Optional. The number of phases that can be used for charging.
    /// Constraints: 1 <= val <= 3
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_phases: Option<i32>,

    /// Optional. Values: 1, 3. Used if numberOfPhases=1 and if the EVSE supports phase switching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase_to_use: Option<i32>,
}

impl Default for ChargingSchedulePeriodType {
    fn default() -> ChargingSchedulePeriodType {
        Self {
            start_period: 0,
            limit: 0.0,
            number_phases: None,
            phase_to_use: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for ChargingSchedulePeriodType {
    /// Validates the fields of ChargingSchedulePeriodType based on specified constraints.
    fn validate(&self) -> Result<(), OcppError> {
        let mut e = StructureValidationBuilder::new();

        e.check_bounds("start_period", 0, i32::MAX, self.start_period);

        if let Some(number_phases) = self.number_phases {
            e.check_bounds("number_phases", 1, 3, number_phases);
        }

        if let Some(phase_to_use) = self.phase_to_use {
            e.check_bounds("phase_to_use", 1, 3, phase_to_use);

            if self.number_phases != Some(1) {
                e.push_relation_error(
                    "phase_to_use",
                    "number_phases",
                    "phase_to_use is only used if numberOfPhases=1",
                );
            }
        }

        e.build("ChargingSchedulePeriodType")
    }
}
