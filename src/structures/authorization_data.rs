use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::id_token_info_type::IdTokenInfoType;
use crate::structures::id_token_type::IdTokenType;
use crate::traits::OcppEntity;
use serde::{Deserialize, Serialize};

/// Contains the identifier to use for authorization.
/// Used by: SendLocalListRequest
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationData {
    /// Optional. Required when UpdateType is Full. This contains information about authorization status,
    /// expiry and group id. For a Differential update the following applies: If this element is present,
    /// then this entry SHALL be added or updated in the Local Authorization List. If this element is absent,
    /// the entry for this IdToken in the Local Authorization List SHALL be deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token_info: Option<IdTokenInfoType>,
    /// Required. This contains the identifier which needs to be stored for authorization.
    pub id_token: IdTokenType,
}

#[typetag::serde]
impl OcppEntity for AuthorizationData {
    fn validate(&self) -> Result<(), OcppError> {
        let mut e = StructureValidationBuilder::new();

        e.check_member("id_token", &self.id_token);

        if let Some(id_token_info) = &self.id_token_info {
            e.check_member("id_token_info", id_token_info);
        }

        e.build("AuthorizationData")
    }
}
