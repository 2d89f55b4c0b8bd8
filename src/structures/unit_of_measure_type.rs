use serde::{Deserialize, Serialize};

use crate::errors::{OcppError, StructureValidationBuilder};
use crate::traits::OcppEntity;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UnitOfMeasureType {
    /// Optional. Unit of the value. Default is "Wh" if the measurand is an "Energy" type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Optional. Multiplier, representing the exponent to base 10. Default is 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<i32>,
}
#[typetag::serde]
impl OcppEntity for UnitOfMeasureType {
    /// Validates the fields of UnitOfMeasureType based on specified constraints.
    fn validate(&self) -> Result<(), OcppError> {
        let mut e = StructureValidationBuilder::new();

        if let Some(unit) = &self.unit {
            e.check_cardinality("unit", 0, 20, &unit.chars());
        }

        e.build("UnitOfMeasureType")
    }
}
