use crate::enums::charging_state_enum_type::ChargingStateEnumType;
use crate::enums::reason_enum_type::ReasonEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::traits::OcppEntity;
use serde::{Deserialize, Serialize};

/// Wire representation of a transaction, as embedded in TransactionEventRequest.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionType {
    /// Required. This contains the Id of the transaction.
    pub transaction_id: String,
    /// Optional. Current charging state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charging_state: Option<ChargingStateEnumType>,
    /// Optional. The total time energy flowed from EVSE to EV during the transaction, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent_charging: Option<i32>,
    /// Optional. The reason/event that initiated the process of stopping the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopped_reason: Option<ReasonEnumType>,
    /// Optional. The ID given to a remote start request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_start_id: Option<i32>,
}

#[typetag::serde]
impl OcppEntity for TransactionType {
    /// Validates the fields of TransactionType based on specified constraints.
    fn validate(&self) -> Result<(), OcppError> {
        let mut e = StructureValidationBuilder::new();

        e.check_cardinality("transaction_id", 0, 36, &self.transaction_id.chars());

        if let Some(time_spent_charging) = self.time_spent_charging {
            e.check_bounds("time_spent_charging", 0, i32::MAX, time_spent_charging);
        }

        e.build("TransactionType")
    }
}
