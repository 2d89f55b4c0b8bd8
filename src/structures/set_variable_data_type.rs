use serde::{Deserialize, Serialize};
use crate::enums::attribute_enum_type::AttributeEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::component_type::ComponentType;
use crate::traits::OcppEntity;

/// Class to set components, variables and variable attributes and characteristics.
/// Used by: SetVariablesRequest
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SetVariableDataType {
    /// Optional. The type of attribute: Actual, Target, MinSet, MaxSet. Default is Actual.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<AttributeEnumType>,
    /// Required. Value to be assigned to the attribute of the variable.
    pub attribute_value: String,
    /// Required. The component for which the variable data is set.
    pub component: ComponentType,
    /// Required. The variable that needs to be set.
    pub variable: VariableType,
}

impl Default for SetVariableDataType {
    fn default() -> SetVariableDataType {
        Self {
            attribute_type: Some(AttributeEnumType::Actual),
            attribute_value: "".to_string(),
            component: Default::default(),
            variable: Default::default(),
        }
    }
}

#[typetag::serde]
impl OcppEntity for SetVariableDataType {
    /// Validates the fields of SetVariableDataType based on specified constraints.
    /// Returns `Ok(())` if all values are valid, or `Err(OcppError::StructureValidationError)` if validation fails.
    fn validate(&self) -> Result<(), OcppError> {
        let mut e = StructureValidationBuilder::new();

        e.check_cardinality("attribute_value", 0, 2500, &self.attribute_value.chars());
        e.check_member("component", &self.component);
        e.check_member("variable", &self.variable);

        e.build("SetVariableDataType")
    }
}
