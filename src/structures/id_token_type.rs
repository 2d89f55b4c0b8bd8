use serde::{Deserialize, Serialize};

use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::additional_info_type::AdditionalInfoType;
use crate::traits::OcppEntity;

/// Contains a case insensitive identifier to use for the authorization and the type of authorization to support multiple forms of identifiers.
/// Used by: Common::AuthorizationData, Common::IdTokenInfoType, RequestStartTransactionRequest, AuthorizeRequest, TransactionEventResponse, ReserveNowRequest, CustomerInformationRequest, BatterySwapRequest, RequestBatterySwapRequest
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IdTokenType {
    /// Required. IdToken is case insensitive. Might hold the hidden id of an RFID tag, but can for example also contain a UUID.
    pub id_token: String,
    /// Required. Enumeration of possible idToken types.
    #[serde(rename = "type")]
    pub r#type: String,
    /// Optional. AdditionalInfo can be used to send extra information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<Vec<AdditionalInfoType>>,
}

impl Default for IdTokenType {
    fn default() -> Self {
        Self {
            id_token: "".to_string(),
            r#type: "".to_string(),
            additional_info: None,
        }
    }
}
#[typetag::serde]
impl OcppEntity for IdTokenType {
    /// Validates the fields of IdTokenType based on specified constraints.
    /// Returns `Ok(())` if all values are valid, or `Err(OcppError::StructureValidationError)` if validation fails.
    fn validate(&self) -> Result<(), OcppError> {
        let mut e = StructureValidationBuilder::new();

        e.check_cardinality("id_token", 0, 255, &self.id_token.chars());
        e.check_cardinality("type", 0, 20, &self.r#type.chars());

        if let Some(additional_info) = &self.additional_info {
            e.check_iter_member("additional_info", additional_info.iter());
        }

        e.build("IdTokenType")
    }
}
