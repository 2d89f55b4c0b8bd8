use crate::enums::set_variable_status_enum_type::SetVariableStatusEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::set_variable_data_type::SetVariableDataType;
use crate::structures::set_variable_result_type::SetVariableResultType;
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use serde::{Deserialize, Serialize};

/// 1.44. SetVariables
pub struct SetVariables;

impl OcppMessage for SetVariables {
    type Request = SetVariablesRequest;
    type Response = SetVariablesResponse;
}

/// 1.44.1. SetVariablesRequest
/// This contains the field definition of the SetVariablesRequest PDU sent by the CSMS to the Charging Station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetVariablesRequest {
    /// Required. List of Component-Variable pairs and attribute values to set.
    pub set_variable_data: Vec<SetVariableDataType>,
}

impl Default for SetVariablesRequest {
    fn default() -> Self {
        Self {
            set_variable_data: vec![SetVariableDataType {
                attribute_value: "1".to_string(),
                ..Default::default()
            }],
        }
    }
}

#[typetag::serde]
impl OcppEntity for SetVariablesRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        b.check_cardinality("set_variable_data", 1, usize::MAX, &self.set_variable_data.iter());
        b.check_iter_member("set_variable_data", self.set_variable_data.iter());

        b.build("SetVariablesRequest")
    }
}

impl OcppRequest for SetVariablesRequest {
    fn get_message_type(&self) -> String {
        String::from("SetVariables")
    }
}

/// 1.44.2. SetVariablesResponse
/// This contains the field definition of the SetVariablesResponse PDU sent by the Charging Station to the CSMS in response to a SetVariablesRequest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetVariablesResponse {
    /// Required. List of result statuses per Component-Variable.
    pub set_variable_result: Vec<SetVariableResultType>,
}

impl Default for SetVariablesResponse {
    fn default() -> Self {
        Self {
            set_variable_result: vec![SetVariableResultType::default()],
        }
    }
}

#[typetag::serde]
impl OcppEntity for SetVariablesResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        b.check_cardinality("set_variable_result", 1, usize::MAX, &self.set_variable_result.iter());
        b.check_iter_member("set_variable_result", self.set_variable_result.iter());

        b.build("SetVariablesResponse")
    }
}
