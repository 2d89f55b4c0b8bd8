use serde::{Deserialize, Serialize};

use crate::errors::{OcppError, StructureValidationBuilder};
use crate::traits::OcppEntity;

/// Defines parameters required for initiating and maintaining wireless communication with other devices.
/// Used by: BootNotificationRequest.ChargingStationType
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ModemType {
    /// Optional. This contains the ICCID of the modem's SIM card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iccid: Option<String>,
    /// Optional. This contains the IMSI of the modem's SIM card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imsi: Option<String>,
}

impl Default for ModemType {
    fn default() -> Self {
        Self {
            iccid: None,
            imsi: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for ModemType {
    /// Validates the fields of ModemType based on specified constraints.
    /// Returns `Ok(())` if all values are valid, or `Err(OcppError::StructureValidationError)` if validation fails.
    fn validate(&self) -> Result<(), OcppError> {
        let mut e = StructureValidationBuilder::new();

        if let Some(iccid) = &self.iccid {
            e.check_cardinality("iccid", 0, 20, &iccid.chars());
        }

        if let Some(imsi) = &self.imsi {
            e.check_cardinality("imsi", 0, 20, &imsi.chars());
        }

        e.build("ModemType")
    }
}
