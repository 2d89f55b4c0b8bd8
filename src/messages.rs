pub mod authorize;
pub mod boot_notification;
pub mod cancel_reservation;
pub mod change_availability;
pub mod clear_cache;
pub mod clear_charging_profile;
pub mod data_transfer;
pub mod firmware_status_notification;
pub mod get_charging_profiles;
pub mod get_composite_schedule;
pub mod get_local_list_version;
pub mod get_log;
pub mod get_variables;
pub mod heartbeat;
pub mod log_status_notification;
pub mod report_charging_profiles;
pub mod request_start_transaction;
pub mod request_stop_transaction;
pub mod reserve_now;
pub mod reset;
pub mod send_local_list;
pub mod set_charging_profile;
pub mod set_variables;
pub mod status_notification;
#[cfg(feature = "v201")]
pub mod transaction_event;
pub mod trigger_message;
pub mod unlock_connector;
pub mod update_firmware;
