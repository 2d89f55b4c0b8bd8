pub mod attribute_enum_type;
pub mod authorization_status_enum_type;
pub mod boot_reason_enum_type;
pub mod cancel_reservation_status_enum_type;
pub mod change_availability_status_enum_type;
pub mod charging_profile_kind_enum_type;
pub mod charging_profile_purpose_enum_type;
pub mod charging_limit_source_enum_type;
pub mod charging_profile_status_enum_type;
pub mod charging_rate_unit_enum_type;
pub mod charging_state_enum_type;
pub mod clear_cache_status_enum_type;
pub mod clear_charging_profile_status_enum_type;
pub mod connector_status_enum_type;
pub mod data_transfer_status_enum_type;
pub mod firmware_status_enum_type;
pub mod generic_status_enum_type;
pub mod get_charging_profile_status_enum_type;
pub mod get_variable_status_enum_type;
pub mod location_enum_type;
pub mod log_enum_type;
pub mod log_status_enum_type;
pub mod measurand_enum_type;
pub mod message_format_enum_type;
pub mod message_trigger_enum_type;
pub mod operational_status_enum_type;
pub mod phase_enum_type;
pub mod reading_context_enum_type;
pub mod reason_enum_type;
pub mod recurrency_kind_enum_type;
pub mod registration_status_enum_type;
pub mod requested_start_stop_status_enum_type;
pub mod reserve_now_status_enum_type;
pub mod reset_enum_type;
pub mod reset_status_enum_type;
pub mod send_local_list_status_enum_type;
pub mod set_variable_status_enum_type;
pub mod transaction_event_enum_type;
pub mod trigger_message_status_enum_type;
pub mod trigger_reason_enum_type;
pub mod unlock_status_enum_type;
pub mod update_enum_type;
pub mod update_firmware_status_enum_type;
pub mod upload_log_status_enum_type;
