use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::get_variable_data_type::GetVariableDataType;
use crate::structures::get_variable_result_type::GetVariableResultType;
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use serde::{Deserialize, Serialize};

/// 1.24. GetVariables
pub struct GetVariables;

impl OcppMessage for GetVariables {
    type Request = GetVariablesRequest;
    type Response = GetVariablesResponse;
}

/// 1.24.1. GetVariablesRequest
/// This contains the field definition of the GetVariablesRequest PDU sent by the CSMS to the Charging Station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetVariablesRequest {
    /// Required. List of Component-Variable pairs and attribute types for which the value is requested.
    pub get_variable_data: Vec<GetVariableDataType>,
}

impl Default for GetVariablesRequest {
    fn default() -> Self {
        Self {
            get_variable_data: vec![GetVariableDataType {
                attribute_type: None,
                component: Default::default(),
                variable: Default::default(),
            }],
        }
    }
}

#[typetag::serde]
impl OcppEntity for GetVariablesRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        b.check_cardinality("get_variable_data", 1, usize::MAX, &self.get_variable_data.iter());
        b.check_iter_member("get_variable_data", self.get_variable_data.iter());

        b.build("GetVariablesRequest")
    }
}

impl OcppRequest for GetVariablesRequest {
    fn get_message_type(&self) -> String {
        String::from("GetVariables")
    }
}

/// 1.24.2. GetVariablesResponse
/// This contains the field definition of the GetVariablesResponse PDU sent by the Charging Station to the CSMS in response to a GetVariablesRequest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetVariablesResponse {
    /// Required. List of requested variables and their values.
    pub get_variable_result: Vec<GetVariableResultType>,
}

impl Default for GetVariablesResponse {
    fn default() -> Self {
        Self {
            get_variable_result: vec![GetVariableResultType {
                attribute_status: crate::enums::get_variable_status_enum_type::GetVariableStatusEnumType::Accepted,
                attribute_type: None,
                attribute_value: None,
                component: Default::default(),
                variable: Default::default(),
                attribute_status_info: None,
            }],
        }
    }
}

#[typetag::serde]
impl OcppEntity for GetVariablesResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        b.check_cardinality("get_variable_result", 1, usize::MAX, &self.get_variable_result.iter());
        b.check_iter_member("get_variable_result", self.get_variable_result.iter());

        b.build("GetVariablesResponse")
    }
}
