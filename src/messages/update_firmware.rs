use crate::enums::update_firmware_status_enum_type::UpdateFirmwareStatusEnumType;
use crate::errors::{OcppError, StructureValidationBuilder};
use crate::structures::firmware_type::FirmwareType;
use crate::structures::status_info_type::StatusInfoType;
use crate::traits::{OcppEntity, OcppMessage, OcppRequest};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// 1.52. UpdateFirmware
pub struct UpdateFirmware;

impl OcppMessage for UpdateFirmware {
    type Request = UpdateFirmwareRequest;
    type Response = UpdateFirmwareResponse;
}

/// 1.52.1. UpdateFirmwareRequest
/// This contains the field definition of the UpdateFirmwareRequest PDU sent by the CSMS to the Charging Station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFirmwareRequest {
    /// Optional. This specifies how many times Charging Station must try to download the firmware before giving up.
    pub retries: Option<i32>,
    /// Optional. The interval in seconds after which a retry may be attempted.
    pub retry_interval: Option<i32>,
    /// Required. The Id of this request.
    pub request_id: i32,
    /// Required. Specifies the firmware to be installed.
    pub firmware: FirmwareType,
}

impl Default for UpdateFirmwareRequest {
    fn default() -> Self {
        Self {
            retries: None,
            retry_interval: None,
            request_id: 0,
            firmware: FirmwareType {
                location: "https://example.invalid/firmware.bin".to_string(),
                retrieve_date_time: Utc::now(),
                install_date_time: None,
                signing_certificate: None,
                signature: None,
            },
        }
    }
}

#[typetag::serde]
impl OcppEntity for UpdateFirmwareRequest {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        b.check_bounds("request_id", 0, i32::MAX, self.request_id);
        b.check_member("firmware", &self.firmware);

        b.build("UpdateFirmwareRequest")
    }
}

impl OcppRequest for UpdateFirmwareRequest {
    fn get_message_type(&self) -> String {
        String::from("UpdateFirmware")
    }
}

/// 1.52.2. UpdateFirmwareResponse
/// This contains the field definition of the UpdateFirmwareResponse PDU sent by the Charging Station to the CSMS in response to an UpdateFirmwareRequest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFirmwareResponse {
    /// Required. This indicates whether the Charging Station was able to accept the request.
    pub status: UpdateFirmwareStatusEnumType,
    /// Optional. Detailed status information.
    pub status_info: Option<StatusInfoType>,
}

impl Default for UpdateFirmwareResponse {
    fn default() -> Self {
        Self {
            status: UpdateFirmwareStatusEnumType::Accepted,
            status_info: None,
        }
    }
}

#[typetag::serde]
impl OcppEntity for UpdateFirmwareResponse {
    fn validate(&self) -> Result<(), OcppError> {
        let mut b = StructureValidationBuilder::new();

        if let Some(status_info) = &self.status_info {
            b.check_member("status_info", status_info);
        }

        b.build("UpdateFirmwareResponse")
    }
}
