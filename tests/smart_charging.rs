use chrono::{TimeZone, Utc};
use ocpp_core::core::filesystem::MemoryFilesystemAdapter;
use ocpp_core::core::scheduler::{Scheduler, SchedulerError};
use ocpp_core::enums::charging_profile_kind_enum_type::ChargingProfileKindEnumType;
use ocpp_core::enums::charging_profile_purpose_enum_type::ChargingProfilePurposeEnumType;
use ocpp_core::enums::charging_rate_unit_enum_type::ChargingRateUnitEnumType;
use ocpp_core::structures::charging_profile_type::ChargingProfileType;
use ocpp_core::structures::charging_schedule_period_type::ChargingSchedulePeriodType;
use ocpp_core::structures::charging_schedule_type::ChargingScheduleType;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, 28, 12, 0, 0).unwrap()
}

fn tx_profile(limit: f64) -> ChargingProfileType {
    ChargingProfileType {
        id: 1,
        stack_level: 0,
        charging_profile_purpose: ChargingProfilePurposeEnumType::TxProfile,
        charging_profile_kind: ChargingProfileKindEnumType::Absolute,
        recurrency_kind: None,
        valid_from: None,
        valid_to: None,
        transaction_id: None,
        charging_schedule: ChargingScheduleType {
            id: 1,
            start_schedule: None,
            duration: None,
            charging_rate_unit: ChargingRateUnitEnumType::A,
            min_charging_rate: None,
            charging_schedule_period: vec![ChargingSchedulePeriodType {
                start_period: 0,
                limit,
                number_phases: None,
                phase_to_use: None,
            }],
        },
    }
}

/// Scenario D: a TxProfile submitted for a connector with no Running
/// transaction is rejected and never persisted.
#[test]
fn scenario_d_tx_profile_rejected_without_running_transaction() {
    let fs = MemoryFilesystemAdapter::new();
    let mut scheduler = Scheduler::new();

    let err = scheduler.set_profile(&fs, 1, tx_profile(16.0), None).unwrap_err();
    assert!(matches!(err, SchedulerError::NoRunningTransaction { connector_id: 1 }));

    // Reloading finds no TxProfile was ever written to disk.
    let mut reloaded = Scheduler::new();
    reloaded.load(&fs).unwrap();
    let limit = reloaded.effective_limit(1, now());
    assert_eq!(limit.amp, -1.0);
}

/// Scenario D (accepted path): the same profile is accepted once a Running
/// transaction id is supplied, and immediately affects the effective limit.
#[test]
fn scenario_d_tx_profile_accepted_with_running_transaction() {
    let fs = MemoryFilesystemAdapter::new();
    let mut scheduler = Scheduler::new();

    scheduler.set_profile(&fs, 1, tx_profile(16.0), Some("tx-1")).unwrap();
    let limit = scheduler.effective_limit(1, now());
    assert_eq!(limit.amp, 16.0);
}

/// Boundary behavior: a composite schedule requested with duration 0 carries
/// no periods at all.
#[test]
fn composite_schedule_zero_duration_has_no_periods() {
    let fs = MemoryFilesystemAdapter::new();
    let mut scheduler = Scheduler::new();
    scheduler.set_profile(&fs, 1, tx_profile(16.0), Some("tx-1")).unwrap();

    let composite = scheduler.composite_schedule(1, 0, ChargingRateUnitEnumType::A, now());
    assert!(composite.charging_schedule_period.is_empty());
}

/// Boundary behavior: a day-long composite schedule over a single Absolute
/// profile with 24 hourly periods reproduces exactly 24 periods aligned on
/// hour boundaries.
#[test]
fn composite_schedule_full_day_returns_24_hourly_periods() {
    let fs = MemoryFilesystemAdapter::new();
    let mut scheduler = Scheduler::new();
    let hourly_periods: Vec<ChargingSchedulePeriodType> = (0..24)
        .map(|hour| ChargingSchedulePeriodType {
            start_period: hour * 3600,
            limit: 32.0,
            number_phases: None,
            phase_to_use: None,
        })
        .collect();
    let profile = ChargingProfileType {
        id: 2,
        stack_level: 0,
        charging_profile_purpose: ChargingProfilePurposeEnumType::TxDefaultProfile,
        charging_profile_kind: ChargingProfileKindEnumType::Absolute,
        recurrency_kind: None,
        valid_from: None,
        valid_to: None,
        transaction_id: None,
        charging_schedule: ChargingScheduleType {
            id: 2,
            start_schedule: None,
            duration: Some(86400),
            charging_rate_unit: ChargingRateUnitEnumType::A,
            min_charging_rate: None,
            charging_schedule_period: hourly_periods,
        },
    };
    scheduler.set_profile(&fs, 1, profile, None).unwrap();

    let composite = scheduler.composite_schedule(1, 86400, ChargingRateUnitEnumType::A, now());
    assert_eq!(composite.charging_schedule_period.len(), 24);
    assert_eq!(composite.charging_schedule_period[0].start_period, 0);
    assert_eq!(composite.charging_schedule_period[23].start_period, 23 * 3600);
}
