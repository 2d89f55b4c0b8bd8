use crate::enums::send_local_list_status_enum_type::SendLocalListStatusEnumType;
use crate::enums::update_enum_type::UpdateEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::authorization_data::AuthorizationData;
use crate::structures::status_info_type::StatusInfoType;
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use serde::{Deserialize, Serialize};

/// 1.40. SendLocalList
pub struct SendLocalList;

impl OcppMessage for SendLocalList {
    type Request = SendLocalListRequest;
    type Response = SendLocalListResponse;
}

/// 1.40.1. SendLocalListRequest
/// This contains the field definition of the SendLocalListRequest PDU sent by the CSMS to the Charging Station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendLocalListRequest {
    /// Required. In case of a full update this is the version number of the full list. In case of a differential update it is the version number of the list after the update has been applied.
    pub version_number: i32,
    /// Required. This contains the type of update (full or differential) of this request.
    pub update_type: UpdateEnumType,
    /// Optional. In case of a full update this contains the list of values that form the new Local Authorization List. In case of a differential update it contains the changes to be applied to the Local Authorization List in the Charging Station. Maximum number of AuthorizationData elements is available in the configuration component as: `SendLocalListMaxLength`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_authorization_list: Option<Vec<AuthorizationData>>,
}

impl Default for SendLocalListRequest {
    fn default() -> Self {
        Self {
            version_number: 1,
            update_type: UpdateEnumType::Full,
            local_authorization_list: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for SendLocalListRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        b.check_bounds("version_number", 0, i32::MAX, self.version_number);

        if let Some(list) = &self.local_authorization_list {
            b.check_iter_member("local_authorization_list", list.iter());
        }

        b.build("SendLocalListRequest")
    }
}

impl OcppRequest for SendLocalListRequest {
    fn get_message_type(&self) -> String {
        String::from("SendLocalList")
    }
}

/// 1.40.2. SendLocalListResponse
/// This contains the field definition of the SendLocalListResponse PDU sent by the Charging Station to the CSMS in response to a SendLocalListRequest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendLocalListResponse {
    /// Required. This indicates whether the Charging Station has successfully received and applied the update of the Local Authorization List.
    pub status: SendLocalListStatusEnumType,
    /// Optional. Detailed status information.
    pub status_info: Option<StatusInfoType>,
}

impl Default for SendLocalListResponse {
    fn default() -> Self {
        Self {
            status: SendLocalListStatusEnumType::Accepted,
            status_info: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for SendLocalListResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        if let Some(status_info) = &self.status_info {
            b.check_member("status_info", status_info);
        }

        b.build("SendLocalListResponse")
    }
}
