use crate::core::filesystem::{load_json, store_json, FilesystemAdapter, FilesystemError};
use crate::core::CoreError;
use crate::enums::charging_profile_purpose_enum_type::ChargingProfilePurposeEnumType;
use crate::enums::charging_rate_unit_enum_type::ChargingRateUnitEnumType;
use crate::structures::charging_profile_type::ChargingProfileType;
use crate::structures::charging_schedule_period_type::ChargingSchedulePeriodType;
use crate::structures::composite_schedule_type::CompositeScheduleType;
use chrono::{DateTime, Utc};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum SchedulerError {
    #[error("TxProfile rejected: no Running transaction on connector {connector_id}")]
    #[diagnostic()]
    NoRunningTransaction { connector_id: i32 },

    #[error("TxProfile rejected: connector {connector_id} must be nonzero")]
    #[diagnostic()]
    TxProfileOnConnectorZero { connector_id: i32 },

    #[error("TxProfile rejected: transaction id mismatch on connector {connector_id}")]
    #[diagnostic()]
    TransactionIdMismatch { connector_id: i32 },

    #[error("ChargingStationMaxProfile rejected: must target connector 0, got {connector_id}")]
    #[diagnostic()]
    MaxProfileWrongConnector { connector_id: i32 },

    #[error("persistence failure: {0}")]
    #[diagnostic()]
    Filesystem(#[from] FilesystemError),
}

impl CoreError for SchedulerError {
    fn to_call_error(&self) -> (&'static str, String) {
        match self {
            SchedulerError::NoRunningTransaction { .. }
            | SchedulerError::TransactionIdMismatch { .. }
            | SchedulerError::TxProfileOnConnectorZero { .. }
            | SchedulerError::MaxProfileWrongConnector { .. } => {
                ("PropertyConstraintViolation", self.to_string())
            }
            SchedulerError::Filesystem(_) => ("InternalError", self.to_string()),
        }
    }
}

/// Filter for `clear_profile`. `None` fields match anything.
#[derive(Debug, Default, Clone)]
pub struct ClearProfileFilter {
    pub charging_profile_id: Option<i32>,
    pub connector_id: Option<i32>,
    pub purpose: Option<ChargingProfilePurposeEnumType>,
    pub stack_level: Option<i32>,
}

impl ClearProfileFilter {
    fn matches(&self, connector_id: i32, profile: &ChargingProfileType) -> bool {
        if let Some(id) = self.charging_profile_id {
            if id != profile.id {
                return false;
            }
        }
        if let Some(cid) = self.connector_id {
            if cid != connector_id {
                return false;
            }
        }
        if let Some(purpose) = &self.purpose {
            if *purpose != profile.charging_profile_purpose {
                return false;
            }
        }
        if let Some(level) = self.stack_level {
            if level != profile.stack_level {
                return false;
            }
        }
        true
    }
}

fn file_name(connector_id: i32, purpose: &ChargingProfilePurposeEnumType, stack_level: i32) -> String {
    let purpose_tag: String = purpose.clone().into();
    format!("sc-{connector_id}-{purpose_tag}-{stack_level}.jsn")
}

/// The effective output of the composite schedule at one instant: missing
/// units are reported with the `-1` sentinel per spec rather than omitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveLimit {
    pub watt: f64,
    pub amp: f64,
    pub number_phases: Option<i32>,
}

impl EffectiveLimit {
    const MISSING: f64 = -1.0;

    fn unspecified() -> Self {
        Self {
            watt: Self::MISSING,
            amp: Self::MISSING,
            number_phases: None,
        }
    }
}

type OutputCallback = Box<dyn FnMut(EffectiveLimit) + Send>;

/// Per-connector three-level profile stack (ChargePointMaxProfile at connector
/// 0, TxDefaultProfile and TxProfile per connector), composite schedule
/// evaluation, and an output-limit publisher invoked when the effective limit
/// changes.
pub struct Scheduler {
    max_profiles: Vec<ChargingProfileType>,
    tx_default_profiles: Vec<(i32, ChargingProfileType)>,
    tx_profiles: Vec<(i32, ChargingProfileType)>,
    last_published: Option<EffectiveLimit>,
    on_output_change: Option<OutputCallback>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            max_profiles: Vec::new(),
            tx_default_profiles: Vec::new(),
            tx_profiles: Vec::new(),
            last_published: None,
            on_output_change: None,
        }
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_output_change(&mut self, callback: OutputCallback) {
        self.on_output_change = Some(callback);
    }

    /// `running_transaction` is `Some(transaction_id)` if `connector_id` currently
    /// has a Running transaction, used to validate TxProfile placement.
    pub fn set_profile(
        &mut self,
        fs: &dyn FilesystemAdapter,
        connector_id: i32,
        profile: ChargingProfileType,
        running_transaction: Option<&str>,
    ) -> Result<(), SchedulerError> {
        match profile.charging_profile_purpose {
            ChargingProfilePurposeEnumType::ChargingStationMaxProfile => {
                if connector_id != 0 {
                    return Err(SchedulerError::MaxProfileWrongConnector { connector_id });
                }
                self.max_profiles.retain(|p| p.stack_level != profile.stack_level);
                store_json(fs, &file_name(0, &profile.charging_profile_purpose, profile.stack_level), &profile)?;
                self.max_profiles.push(profile);
            }
            ChargingProfilePurposeEnumType::TxProfile => {
                if connector_id == 0 {
                    return Err(SchedulerError::TxProfileOnConnectorZero { connector_id });
                }
                let tx_id = running_transaction.ok_or(SchedulerError::NoRunningTransaction { connector_id })?;
                if let Some(expected) = &profile.transaction_id {
                    if expected != tx_id {
                        return Err(SchedulerError::TransactionIdMismatch { connector_id });
                    }
                }
                self.tx_profiles
                    .retain(|(c, p)| !(*c == connector_id && p.stack_level == profile.stack_level));
                store_json(
                    fs,
                    &file_name(connector_id, &profile.charging_profile_purpose, profile.stack_level),
                    &profile,
                )?;
                self.tx_profiles.push((connector_id, profile));
            }
            _ => {
                self.tx_default_profiles
                    .retain(|(c, p)| !(*c == connector_id && p.stack_level == profile.stack_level));
                store_json(
                    fs,
                    &file_name(connector_id, &profile.charging_profile_purpose, profile.stack_level),
                    &profile,
                )?;
                self.tx_default_profiles.push((connector_id, profile));
            }
        }
        Ok(())
    }

    /// Removes every in-memory and on-disk profile matching `filter`, returning
    /// the count removed.
    pub fn clear_profile(&mut self, fs: &dyn FilesystemAdapter, filter: &ClearProfileFilter) -> Result<usize, SchedulerError> {
        let mut removed = 0;

        let mut kept = Vec::new();
        for profile in self.max_profiles.drain(..) {
            if filter.matches(0, &profile) {
                fs.remove(&file_name(0, &profile.charging_profile_purpose, profile.stack_level))?;
                removed += 1;
            } else {
                kept.push(profile);
            }
        }
        self.max_profiles = kept;

        for store in [&mut self.tx_default_profiles, &mut self.tx_profiles] {
            let mut kept = Vec::new();
            for (connector_id, profile) in store.drain(..) {
                if filter.matches(connector_id, &profile) {
                    fs.remove(&file_name(connector_id, &profile.charging_profile_purpose, profile.stack_level))?;
                    removed += 1;
                } else {
                    kept.push((connector_id, profile));
                }
            }
            *store = kept;
        }

        Ok(removed)
    }

    /// Called when a transaction on `connector_id` terminates: its TxProfile
    /// entries cease to be valid and are dropped, per spec.md's Charging Profile
    /// invariant.
    pub fn transaction_terminated(&mut self, fs: &dyn FilesystemAdapter, connector_id: i32) -> Result<(), SchedulerError> {
        let filter = ClearProfileFilter {
            connector_id: Some(connector_id),
            purpose: Some(ChargingProfilePurposeEnumType::TxProfile),
            ..Default::default()
        };
        self.clear_profile(fs, &filter)?;
        Ok(())
    }

    fn valid_at(profile: &ChargingProfileType, now: DateTime<Utc>) -> bool {
        if let Some(from) = profile.valid_from {
            if now < from {
                return false;
            }
        }
        if let Some(to) = profile.valid_to {
            if now >= to {
                return false;
            }
        }
        true
    }

    fn winning_profile<'a>(
        candidates: impl Iterator<Item = &'a ChargingProfileType>,
        now: DateTime<Utc>,
    ) -> Option<&'a ChargingProfileType> {
        candidates
            .filter(|p| Self::valid_at(p, now))
            .max_by_key(|p| p.stack_level)
    }

    /// Effective limit at a single instant: the elementwise minimum, across
    /// whichever profile classes apply, each read off its own schedule at the
    /// elapsed seconds since `now`. ChargePointMaxProfile always caps; within a
    /// connector TxProfile shadows TxDefaultProfile entirely (not merged)
    /// per spec's "higher stackLevel shadows lower" composition rule applied
    /// across purpose classes too.
    pub fn effective_limit(&self, connector_id: i32, now: DateTime<Utc>) -> EffectiveLimit {
        let max = Self::winning_profile(self.max_profiles.iter(), now);
        let tx = Self::winning_profile(
            self.tx_profiles.iter().filter(|(c, _)| *c == connector_id).map(|(_, p)| p),
            now,
        );
        let tx_default = Self::winning_profile(
            self.tx_default_profiles
                .iter()
                .filter(|(c, _)| *c == connector_id)
                .map(|(_, p)| p),
            now,
        );

        let connector_class = tx.or(tx_default);

        let mut watt = f64::MAX;
        let mut amp = f64::MAX;
        let mut number_phases = None;
        let mut any = false;

        for profile in [max, connector_class].into_iter().flatten() {
            let elapsed = profile
                .charging_schedule
                .start_schedule
                .map(|start| (now - start).num_seconds())
                .unwrap_or(0)
                .max(0);
            if let Some(period) = profile
                .charging_schedule
                .charging_schedule_period
                .iter()
                .filter(|p| p.start_period as i64 <= elapsed)
                .max_by_key(|p| p.start_period)
            {
                any = true;
                match profile.charging_schedule.charging_rate_unit {
                    ChargingRateUnitEnumType::W => watt = watt.min(period.limit),
                    ChargingRateUnitEnumType::A => amp = amp.min(period.limit),
                }
                if period.number_phases.is_some() {
                    number_phases = period.number_phases;
                }
            }
        }

        if !any {
            return EffectiveLimit::unspecified();
        }

        EffectiveLimit {
            watt: if watt == f64::MAX { EffectiveLimit::MISSING } else { watt },
            amp: if amp == f64::MAX { EffectiveLimit::MISSING } else { amp },
            number_phases,
        }
    }

    /// Recomputes the effective limit and, if it changed since the last call,
    /// invokes the registered output callback.
    pub fn publish_if_changed(&mut self, connector_id: i32, now: DateTime<Utc>) {
        let limit = self.effective_limit(connector_id, now);
        if self.last_published != Some(limit) {
            self.last_published = Some(limit);
            if let Some(callback) = &mut self.on_output_change {
                callback(limit);
            }
        }
    }

    /// Flattens the winning profile per connector at `now` into a single
    /// piecewise-constant schedule over `[now, now+duration]`, reported in
    /// `preferred_unit`. Period boundaries are the union of the winning
    /// classes' `startPeriod` offsets that fall inside the window.
    pub fn composite_schedule(
        &self,
        connector_id: i32,
        duration: i32,
        preferred_unit: ChargingRateUnitEnumType,
        now: DateTime<Utc>,
    ) -> CompositeScheduleType {
        let max = Self::winning_profile(self.max_profiles.iter(), now);
        let tx = Self::winning_profile(
            self.tx_profiles.iter().filter(|(c, _)| *c == connector_id).map(|(_, p)| p),
            now,
        );
        let tx_default = Self::winning_profile(
            self.tx_default_profiles
                .iter()
                .filter(|(c, _)| *c == connector_id)
                .map(|(_, p)| p),
            now,
        );
        let connector_class = tx.or(tx_default);

        let mut boundaries: Vec<i32> = if duration > 0 { vec![0] } else { Vec::new() };
        for profile in [max, connector_class].into_iter().flatten() {
            for period in &profile.charging_schedule.charging_schedule_period {
                if period.start_period >= 0 && period.start_period < duration {
                    boundaries.push(period.start_period);
                }
            }
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        let periods: Vec<ChargingSchedulePeriodType> = boundaries
            .into_iter()
            .map(|offset| {
                let instant = now + chrono::Duration::seconds(offset as i64);
                let limit = self.effective_limit(connector_id, instant);
                let value = match preferred_unit {
                    ChargingRateUnitEnumType::W => limit.watt,
                    ChargingRateUnitEnumType::A => limit.amp,
                };
                ChargingSchedulePeriodType {
                    start_period: offset,
                    limit: value,
                    number_phases: limit.number_phases,
                    phase_to_use: None,
                }
            })
            .collect();

        CompositeScheduleType {
            evse_id: connector_id,
            duration,
            schedule_start: now,
            charging_rate_unit: preferred_unit,
            charging_schedule_period: periods,
        }
    }

    /// Repopulates in-memory state from disk on restart.
    pub fn load(&mut self, fs: &dyn FilesystemAdapter) -> Result<(), SchedulerError> {
        for name in fs.list_with_prefix("sc-")? {
            let profile: Option<ChargingProfileType> = load_json(fs, &name)?;
            let Some(profile) = profile else { continue };
            // Connector id is encoded as the first numeric segment of the filename.
            let Some(connector_id) = name
                .strip_prefix("sc-")
                .and_then(|rest| rest.split('-').next())
                .and_then(|s| s.parse::<i32>().ok())
            else {
                continue;
            };
            match profile.charging_profile_purpose {
                ChargingProfilePurposeEnumType::ChargingStationMaxProfile => self.max_profiles.push(profile),
                ChargingProfilePurposeEnumType::TxProfile => self.tx_profiles.push((connector_id, profile)),
                _ => self.tx_default_profiles.push((connector_id, profile)),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filesystem::MemoryFilesystemAdapter;
    use crate::enums::charging_profile_kind_enum_type::ChargingProfileKindEnumType;
    use crate::structures::charging_schedule_type::ChargingScheduleType;
    use chrono::TimeZone;

    fn schedule(unit: ChargingRateUnitEnumType, limit: f64) -> ChargingScheduleType {
        ChargingScheduleType {
            id: 1,
            start_schedule: None,
            duration: None,
            charging_rate_unit: unit,
            min_charging_rate: None,
            charging_schedule_period: vec![ChargingSchedulePeriodType {
                start_period: 0,
                limit,
                number_phases: None,
                phase_to_use: None,
            }],
        }
    }

    fn profile(
        id: i32,
        stack_level: i32,
        purpose: ChargingProfilePurposeEnumType,
        transaction_id: Option<&str>,
        unit: ChargingRateUnitEnumType,
        limit: f64,
    ) -> ChargingProfileType {
        ChargingProfileType {
            id,
            stack_level,
            charging_profile_purpose: purpose,
            charging_profile_kind: ChargingProfileKindEnumType::Absolute,
            recurrency_kind: None,
            valid_from: None,
            valid_to: None,
            transaction_id: transaction_id.map(str::to_string),
            charging_schedule: schedule(unit, limit),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 28, 12, 0, 0).unwrap()
    }

    #[test]
    fn tx_profile_rejected_without_running_transaction() {
        let fs = MemoryFilesystemAdapter::new();
        let mut scheduler = Scheduler::new();
        let p = profile(1, 0, ChargingProfilePurposeEnumType::TxProfile, None, ChargingRateUnitEnumType::A, 16.0);
        let err = scheduler.set_profile(&fs, 1, p, None).unwrap_err();
        assert!(matches!(err, SchedulerError::NoRunningTransaction { .. }));
    }

    #[test]
    fn tx_profile_rejected_on_transaction_id_mismatch() {
        let fs = MemoryFilesystemAdapter::new();
        let mut scheduler = Scheduler::new();
        let p = profile(
            1,
            0,
            ChargingProfilePurposeEnumType::TxProfile,
            Some("other-tx"),
            ChargingRateUnitEnumType::A,
            16.0,
        );
        let err = scheduler.set_profile(&fs, 1, p, Some("tx-1")).unwrap_err();
        assert!(matches!(err, SchedulerError::TransactionIdMismatch { .. }));
    }

    #[test]
    fn max_profile_rejected_on_nonzero_connector() {
        let fs = MemoryFilesystemAdapter::new();
        let mut scheduler = Scheduler::new();
        let p = profile(
            1,
            0,
            ChargingProfilePurposeEnumType::ChargingStationMaxProfile,
            None,
            ChargingRateUnitEnumType::W,
            11000.0,
        );
        let err = scheduler.set_profile(&fs, 1, p, None).unwrap_err();
        assert!(matches!(err, SchedulerError::MaxProfileWrongConnector { .. }));
    }

    #[test]
    fn tx_profile_shadows_tx_default_at_same_connector() {
        let fs = MemoryFilesystemAdapter::new();
        let mut scheduler = Scheduler::new();
        let default_profile = profile(
            1,
            0,
            ChargingProfilePurposeEnumType::TxDefaultProfile,
            None,
            ChargingRateUnitEnumType::A,
            32.0,
        );
        scheduler.set_profile(&fs, 1, default_profile, None).unwrap();

        let tx_profile = profile(
            2,
            0,
            ChargingProfilePurposeEnumType::TxProfile,
            Some("tx-1"),
            ChargingRateUnitEnumType::A,
            16.0,
        );
        scheduler.set_profile(&fs, 1, tx_profile, Some("tx-1")).unwrap();

        let limit = scheduler.effective_limit(1, now());
        assert_eq!(limit.amp, 16.0);
    }

    #[test]
    fn max_profile_caps_connector_limit() {
        let fs = MemoryFilesystemAdapter::new();
        let mut scheduler = Scheduler::new();
        let max_profile = profile(
            1,
            0,
            ChargingProfilePurposeEnumType::ChargingStationMaxProfile,
            None,
            ChargingRateUnitEnumType::A,
            10.0,
        );
        scheduler.set_profile(&fs, 0, max_profile, None).unwrap();

        let default_profile = profile(
            2,
            0,
            ChargingProfilePurposeEnumType::TxDefaultProfile,
            None,
            ChargingRateUnitEnumType::A,
            32.0,
        );
        scheduler.set_profile(&fs, 1, default_profile, None).unwrap();

        let limit = scheduler.effective_limit(1, now());
        assert_eq!(limit.amp, 10.0);
    }

    #[test]
    fn clear_profile_by_connector_and_purpose() {
        let fs = MemoryFilesystemAdapter::new();
        let mut scheduler = Scheduler::new();
        let default_profile = profile(
            1,
            0,
            ChargingProfilePurposeEnumType::TxDefaultProfile,
            None,
            ChargingRateUnitEnumType::A,
            32.0,
        );
        scheduler.set_profile(&fs, 1, default_profile, None).unwrap();

        let removed = scheduler
            .clear_profile(
                &fs,
                &ClearProfileFilter {
                    connector_id: Some(1),
                    purpose: Some(ChargingProfilePurposeEnumType::TxDefaultProfile),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(removed, 1);
        assert_eq!(scheduler.effective_limit(1, now()), EffectiveLimit::unspecified());
    }

    #[test]
    fn transaction_terminated_drops_tx_profile_only() {
        let fs = MemoryFilesystemAdapter::new();
        let mut scheduler = Scheduler::new();
        let default_profile = profile(
            1,
            0,
            ChargingProfilePurposeEnumType::TxDefaultProfile,
            None,
            ChargingRateUnitEnumType::A,
            32.0,
        );
        scheduler.set_profile(&fs, 1, default_profile, None).unwrap();
        let tx_profile = profile(
            2,
            0,
            ChargingProfilePurposeEnumType::TxProfile,
            Some("tx-1"),
            ChargingRateUnitEnumType::A,
            16.0,
        );
        scheduler.set_profile(&fs, 1, tx_profile, Some("tx-1")).unwrap();

        scheduler.transaction_terminated(&fs, 1).unwrap();
        let limit = scheduler.effective_limit(1, now());
        assert_eq!(limit.amp, 32.0);
    }

    #[test]
    fn publish_if_changed_invokes_callback_only_on_change() {
        let fs = MemoryFilesystemAdapter::new();
        let mut scheduler = Scheduler::new();
        let published = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let published_clone = published.clone();
        scheduler.on_output_change(Box::new(move |limit| published_clone.lock().unwrap().push(limit)));

        scheduler.publish_if_changed(1, now());
        scheduler.publish_if_changed(1, now());
        assert_eq!(published.lock().unwrap().len(), 1);

        let default_profile = profile(
            1,
            0,
            ChargingProfilePurposeEnumType::TxDefaultProfile,
            None,
            ChargingRateUnitEnumType::A,
            32.0,
        );
        scheduler.set_profile(&fs, 1, default_profile, None).unwrap();
        scheduler.publish_if_changed(1, now());
        assert_eq!(published.lock().unwrap().len(), 2);
    }

    #[test]
    fn composite_schedule_reports_breakpoints_in_preferred_unit() {
        let fs = MemoryFilesystemAdapter::new();
        let mut scheduler = Scheduler::new();
        let default_profile = profile(
            1,
            0,
            ChargingProfilePurposeEnumType::TxDefaultProfile,
            None,
            ChargingRateUnitEnumType::A,
            32.0,
        );
        scheduler.set_profile(&fs, 1, default_profile, None).unwrap();

        let composite = scheduler.composite_schedule(1, 3600, ChargingRateUnitEnumType::A, now());
        assert_eq!(composite.charging_schedule_period.len(), 1);
        assert_eq!(composite.charging_schedule_period[0].limit, 32.0);
    }

    #[test]
    fn composite_schedule_with_zero_duration_has_no_periods() {
        let fs = MemoryFilesystemAdapter::new();
        let mut scheduler = Scheduler::new();
        let default_profile = profile(
            1,
            0,
            ChargingProfilePurposeEnumType::TxDefaultProfile,
            None,
            ChargingRateUnitEnumType::A,
            32.0,
        );
        scheduler.set_profile(&fs, 1, default_profile, None).unwrap();

        let composite = scheduler.composite_schedule(1, 0, ChargingRateUnitEnumType::A, now());
        assert!(composite.charging_schedule_period.is_empty());
    }

    #[test]
    fn composite_schedule_over_a_day_returns_24_hourly_periods() {
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
        let default_profile = ChargingProfileType {
            id: 1,
            stack_level: 0,
            charging_profile_purpose: ChargingProfilePurposeEnumType::TxDefaultProfile,
            charging_profile_kind: ChargingProfileKindEnumType::Absolute,
            recurrency_kind: None,
            valid_from: None,
            valid_to: None,
            transaction_id: None,
            charging_schedule: ChargingScheduleType {
                id: 1,
                start_schedule: None,
                duration: Some(86400),
                charging_rate_unit: ChargingRateUnitEnumType::A,
                min_charging_rate: None,
                charging_schedule_period: hourly_periods,
            },
        };
        scheduler.set_profile(&fs, 1, default_profile, None).unwrap();

        let composite = scheduler.composite_schedule(1, 86400, ChargingRateUnitEnumType::A, now());
        assert_eq!(composite.charging_schedule_period.len(), 24);
        assert_eq!(composite.charging_schedule_period[0].start_period, 0);
        assert_eq!(composite.charging_schedule_period[23].start_period, 23 * 3600);
    }
}
