use crate::enums::unlock_status_enum_type::UnlockStatusEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use serde::{Deserialize, Serialize};

/// 1.51. UnlockConnector
pub struct UnlockConnector;

impl OcppMessage for UnlockConnector {
    type Request = UnlockConnectorRequest;
    type Response = UnlockConnectorResponse;
}

/// 1.51.1. UnlockConnectorRequest
/// This contains the field definition of the UnlockConnectorRequest PDU sent by the CSMS to the Charging Station.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnlockConnectorRequest {
    /// Required. This contains the identifier of the EVSE for which a connector needs to be unlocked.
    pub evse_id: i32,
    /// Required. This contains the identifier of the connector that needs to be unlocked.
    pub connector_id: i32,
}

#[typetag::serde]
impl OcppEntity for UnlockConnectorRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        b.check_bounds("evse_id", 0, i32::MAX, self.evse_id);
        b.check_bounds("connector_id", 0, i32::MAX, self.connector_id);

        b.build("UnlockConnectorRequest")
    }
}

impl OcppRequest for UnlockConnectorRequest {
    fn get_message_type(&self) -> String {
        String::from("UnlockConnector")
    }
}

/// 1.51.2. UnlockConnectorResponse
/// This contains the field definition of the UnlockConnectorResponse PDU sent by the Charging Station to the CSMS in response to an UnlockConnectorRequest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnlockConnectorResponse {
    /// Required. This indicates whether the Charging Station has unlocked the connector.
    pub status: UnlockStatusEnumType,
}

impl Default for UnlockConnectorResponse {
    fn default() -> Self {
        Self {
            status: UnlockStatusEnumType::Unlocked,
        }
    }
}

#[typetag::serde]
impl OcppEntity for UnlockConnectorResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let b = StructureValidationBuilder::new();
        b.build("UnlockConnectorResponse")
    }
}
