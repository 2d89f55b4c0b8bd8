pub mod additional_info_type;
pub mod authorization_data;
pub mod charging_profile_criterion_type;
pub mod charging_profile_type;
pub mod charging_schedule_period_type;
pub mod charging_schedule_type;
pub mod charging_station_type;
pub mod clear_charging_profile_type;
pub mod component_type;
pub mod composite_schedule_type;
pub mod evse_type;
pub mod firmware_type;
pub mod get_variable_data_type;
pub mod get_variable_result_type;
pub mod id_token_info_type;
pub mod id_token_type;
pub mod log_parameters_type;
pub mod message_content_type;
pub mod meter_value_type;
pub mod modem_type;
pub mod sampled_meter_value_type;
pub mod set_variable_data_type;
pub mod set_variable_result_type;
pub mod status_info_type;
pub mod transaction_type;
pub mod unit_of_measure_type;
pub mod variable_type;
