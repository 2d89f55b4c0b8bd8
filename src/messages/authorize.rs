use crate::errors::{OcppError, StructureValidationBuilder};
use crate::traits::{OcppEntity, OcppMessage};
use serde::{Deserialize, Serialize};
use crate::structures::id_token_info_type::IdTokenInfoType;
use crate::structures::id_token_type::IdTokenType;

/// 1.3. Authorize
pub struct Authorize;

impl OcppMessage for Authorize {
    type Request = AuthorizeRequest;
    type Response = AuthorizeResponse;
}

/// 1.3.1. AuthorizeRequest
/// This contains the field definition of the AuthorizeRequest PDU sent by the Charging Station to the CSMS.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeRequest {
    /// Required. This contains the identifier that needs to be authorized.
    pub id_token: IdTokenType,
}

#[typetag::serde]
impl OcppEntity for AuthorizeRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        b.check_member("id_token", &self.id_token);

        b.build("AuthorizeRequest")
    }
}

/// 1.3.2. AuthorizeResponse
/// This contains the field definition of the AuthorizeResponse PDU sent by the CSMS to the Charging Station in response to an
/// AuthorizeRequest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeResponse {
    /// Required. This contains information about authorization status, expiry and group id.
    pub id_token_info: IdTokenInfoType,
}

#[typetag::serde]
impl OcppEntity for AuthorizeResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        b.check_member("id_token_info", &self.id_token_info);

        b.build("AuthorizeResponse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize() {
        let req = Authorize::request();
        let resp = Authorize::response();

        assert!(req.validate().is_ok());
        assert!(resp.validate().is_ok());
    }

    #[test]
    fn test_authorize_request_serialize_deserialize() {
        let req = Authorize::request();
        let serialized = serde_json::to_string(&req).unwrap();
        let deserialized: AuthorizeRequest = serde_json::from_str(&serialized).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req, deserialized);
    }

    #[test]
    fn test_authorize_response_serialize_deserialize() {
        let resp = Authorize::response();
        let serialized = serde_json::to_string(&resp).unwrap();
        let deserialized: AuthorizeResponse = serde_json::from_str(&serialized).unwrap();
        assert!(resp.validate().is_ok());
        assert_eq!(resp, deserialized);
    }
}
