use serde::{Deserialize, Serialize};

use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::evse_type::EVSEType;
use crate::traits::OcppEntity;

/// A physical or logical component.
/// Used by: Common::ComponentVariableType, GetVariablesRequest.GetVariableDataType,
/// GetVariablesResponse.GetVariableResultType, SetVariablesRequest.SetVariableDataType,
/// SetVariablesResponse.SetVariableResultType
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ComponentType {
    /// Required. Name of the component. Name should be taken from the list of standardized component names
    /// whenever possible. Case Insensitive. strongly advised to use Camel Case.
    pub name: String,
    /// Optional. Name of instance in case the component exists as multiple instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// Optional. Specifies the EVSE when component is located at EVSE level, also specifies the connector when
    /// component is located at Connector level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evse: Option<EVSEType>,
}

impl Default for ComponentType {
    fn default() -> Self {
        Self {
            name: "".to_string(),
            instance: None,
            evse: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for ComponentType {
    /// Validates the fields of ComponentType based on specified constraints.
    /// Returns `Ok(())` if all values are valid, or `Err(OcppError::StructureValidationError)` if validation fails.
    fn validate(&self) -> Result<(), OcppError> {
        let mut e = StructureValidationBuilder::new();

        e.check_cardinality("name", 0, 50, &self.name.chars());

        if let Some(instance) = &self.instance {
            e.check_cardinality("instance", 0, 50, &instance.chars());
        }

        if let Some(evse) = &self.evse {
            e.check_member("evse", evse);
        }

        e.build("ComponentType")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_invalid_fields;

    #[test]
    fn test_serialization_deserialization() {
        let component = ComponentType {
            name: "Meter".to_string(),
            instance: Some("Main".to_string()),
            evse: Some(EVSEType::default()),
        };

        let serialized = serde_json::to_string(&component).unwrap();
        let deserialized: ComponentType = serde_json::from_str(&serialized).unwrap();
        assert_eq!(component, deserialized);
    }

    #[test]
    fn test_validation_valid() {
        let component_minimal = ComponentType {
            name: "Core".to_string(),
            instance: None,
            evse: None,
        };
        assert!(component_minimal.validate().is_ok());

        let component_full_lengths = ComponentType {
            name: "a".repeat(50),
            instance: Some("b".repeat(50)),
            evse: Some(EVSEType::default()),
        };
        assert!(component_full_lengths.validate().is_ok());
    }

    #[test]
    fn test_validation_name_too_long() {
        let component = ComponentType {
            name: "a".repeat(51),
            instance: None,
            evse: None,
        };
        let err = component.validate().unwrap_err();
        assert_invalid_fields(&err, &["name"]);
    }

    #[test]
    fn test_validation_multiple_errors() {
        let component = ComponentType {
            name: "a".repeat(51),
            instance: Some("b".repeat(51)),
            evse: None,
        };
        let err = component.validate().unwrap_err();
        assert_invalid_fields(&err, &["name", "instance"]);
    }
}
