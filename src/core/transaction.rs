use crate::core::filesystem::FilesystemAdapter;
use crate::core::metering::TransactionAccumulator;
use crate::core::transaction_store::{TransactionRecord, TransactionStore, TransactionStoreError};
use crate::enums::charging_state_enum_type::ChargingStateEnumType;
use crate::enums::reason_enum_type::ReasonEnumType;
use crate::enums::trigger_reason_enum_type::TriggerReasonEnumType;
use crate::structures::meter_value_type::MeterValueType;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Members of `TxStartPoint`/`TxStopPoint`, parsed from a comma-separated
/// configuration string and revalidated on every write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxControlPoint {
    ParkingBayOccupancy,
    EVConnected,
    Authorized,
    DataSigned,
    PowerPathClosed,
    EnergyTransfer,
}

impl TxControlPoint {
    fn parse_one(s: &str) -> Option<Self> {
        match s.trim() {
            "ParkingBayOccupancy" => Some(Self::ParkingBayOccupancy),
            "EVConnected" => Some(Self::EVConnected),
            "Authorized" => Some(Self::Authorized),
            "DataSigned" => Some(Self::DataSigned),
            "PowerPathClosed" => Some(Self::PowerPathClosed),
            "EnergyTransfer" => Some(Self::EnergyTransfer),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::ParkingBayOccupancy => "ParkingBayOccupancy",
            Self::EVConnected => "EVConnected",
            Self::Authorized => "Authorized",
            Self::DataSigned => "DataSigned",
            Self::PowerPathClosed => "PowerPathClosed",
            Self::EnergyTransfer => "EnergyTransfer",
        }
    }
}

/// A parsed `TxStartPoint`/`TxStopPoint` configuration value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet(Vec<TxControlPoint>);

impl PointSet {
    pub fn parse(csl: &str) -> Self {
        Self(
            csl.split(',')
                .filter_map(TxControlPoint::parse_one)
                .collect(),
        )
    }

    pub fn contains(&self, point: TxControlPoint) -> bool {
        self.0.contains(&point)
    }

    pub fn serialize(&self) -> String {
        self.0.iter().map(|p| p.name()).collect::<Vec<_>>().join(",")
    }
}

/// Optional boolean sensors read from the physical connector each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sensors {
    pub plugged: Option<bool>,
    pub ev_ready: Option<bool>,
    pub evse_ready: Option<bool>,
}

/// Configuration consumed by the state machine, read by the caller from the
/// Configuration/Variable Store (C3) once per tick.
#[derive(Debug, Clone)]
pub struct TxConfig {
    pub tx_start_point: PointSet,
    pub tx_stop_point: PointSet,
    pub stop_tx_on_ev_side_disconnect: bool,
    pub stop_tx_on_invalid_id: bool,
    pub ev_connection_timeout_s: i64,
}

impl Default for TxConfig {
    fn default() -> Self {
        Self {
            tx_start_point: PointSet::parse("Authorized"),
            tx_stop_point: PointSet::parse("EVConnected"),
            stop_tx_on_ev_side_disconnect: true,
            stop_tx_on_invalid_id: true,
            ev_connection_timeout_s: 30,
        }
    }
}

/// What caused a transaction to begin, used to derive the Started event's
/// trigger reason.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StartCondition {
    PowerPathClosed,
    Authorized,
    EVConnected,
    EnergyTransfer,
}

fn evaluate_start(config: &TxConfig, sensors: Sensors, authorized: bool) -> Option<StartCondition> {
    let plugged = sensors.plugged.unwrap_or(false);

    if config.tx_start_point.contains(TxControlPoint::PowerPathClosed) && plugged && authorized {
        return Some(StartCondition::PowerPathClosed);
    }
    if config.tx_start_point.contains(TxControlPoint::Authorized) && authorized {
        return Some(StartCondition::Authorized);
    }
    if config.tx_start_point.contains(TxControlPoint::EVConnected) && plugged {
        return Some(StartCondition::EVConnected);
    }
    if config.tx_start_point.contains(TxControlPoint::EnergyTransfer) {
        let either_defined = sensors.ev_ready.is_some() || sensors.evse_ready.is_some();
        let both_ready_when_defined = sensors.ev_ready.unwrap_or(true) && sensors.evse_ready.unwrap_or(true);
        if either_defined && both_ready_when_defined {
            return Some(StartCondition::EnergyTransfer);
        }
    }
    None
}

fn trigger_for_start(condition: StartCondition, remote_start_id: Option<i32>) -> TriggerReasonEnumType {
    if remote_start_id.is_some() {
        return TriggerReasonEnumType::RemoteStart;
    }
    match condition {
        StartCondition::Authorized => TriggerReasonEnumType::Authorized,
        StartCondition::EVConnected => TriggerReasonEnumType::CablePluggedIn,
        StartCondition::PowerPathClosed | StartCondition::EnergyTransfer => TriggerReasonEnumType::ChargingStateChanged,
    }
}

/// What caused a transaction to end, carrying both the OCPP stop reason and
/// the event-pipeline trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
struct StopDecision {
    reason: ReasonEnumTypeTag,
    trigger: TriggerTag,
}

/// `TriggerReasonEnumType` has no `Copy`; this mirrors just the variants the
/// stop-condition table can produce.
#[derive(Debug, Clone, Copy, PartialEq)]
enum TriggerTag {
    EVCommunicationLoss,
    StopAuthorized,
    ChargingStateChanged,
    Deauthorized,
}

impl TriggerTag {
    fn into_trigger(self) -> TriggerReasonEnumType {
        match self {
            Self::EVCommunicationLoss => TriggerReasonEnumType::EVCommunicationLoss,
            Self::StopAuthorized => TriggerReasonEnumType::StopAuthorized,
            Self::ChargingStateChanged => TriggerReasonEnumType::ChargingStateChanged,
            Self::Deauthorized => TriggerReasonEnumType::Deauthorized,
        }
    }
}

/// `ReasonEnumType` has no `Copy`/`PartialEq`; this mirrors just the variants
/// the stop-condition table can produce, converted to the real enum at the
/// point of use.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ReasonEnumTypeTag {
    EVDisconnected,
    Local,
    StoppedByEV,
    Other,
    DeAuthorized,
    Timeout,
}

impl ReasonEnumTypeTag {
    fn into_reason(self) -> ReasonEnumType {
        match self {
            Self::EVDisconnected => ReasonEnumType::EVDisconnected,
            Self::Local => ReasonEnumType::Local,
            Self::StoppedByEV => ReasonEnumType::StoppedByEV,
            Self::Other => ReasonEnumType::Other,
            Self::DeAuthorized => ReasonEnumType::DeAuthorized,
            Self::Timeout => ReasonEnumType::Timeout,
        }
    }
}

fn evaluate_stop(config: &TxConfig, sensors: Sensors, authorized: bool, deauthorized: bool) -> Option<StopDecision> {
    let plugged = sensors.plugged.unwrap_or(true);

    if (config.tx_stop_point.contains(TxControlPoint::EVConnected) || config.tx_stop_point.contains(TxControlPoint::PowerPathClosed))
        && !plugged
        && config.stop_tx_on_ev_side_disconnect
    {
        return Some(StopDecision {
            reason: ReasonEnumTypeTag::EVDisconnected,
            trigger: TriggerTag::EVCommunicationLoss,
        });
    }
    if (config.tx_stop_point.contains(TxControlPoint::Authorized) || config.tx_stop_point.contains(TxControlPoint::PowerPathClosed))
        && !authorized
    {
        return Some(StopDecision {
            reason: ReasonEnumTypeTag::Local,
            trigger: TriggerTag::StopAuthorized,
        });
    }
    if config.tx_stop_point.contains(TxControlPoint::EnergyTransfer) && sensors.ev_ready == Some(false) {
        return Some(StopDecision {
            reason: ReasonEnumTypeTag::StoppedByEV,
            trigger: TriggerTag::ChargingStateChanged,
        });
    }
    // At least one of ev_ready/evse_ready is defined, and neither one that is
    // defined is true: distinct from the StoppedByEV case above (which needs
    // ev_ready defined false) because this also fires when ev_ready is simply
    // never reported at all.
    if config.tx_stop_point.contains(TxControlPoint::EnergyTransfer)
        && (sensors.ev_ready.is_some() || sensors.evse_ready.is_some())
        && sensors.ev_ready != Some(true)
        && sensors.evse_ready != Some(true)
    {
        return Some(StopDecision {
            reason: ReasonEnumTypeTag::Other,
            trigger: TriggerTag::ChargingStateChanged,
        });
    }
    if config.tx_stop_point.contains(TxControlPoint::Authorized) && deauthorized && config.stop_tx_on_invalid_id {
        return Some(StopDecision {
            reason: ReasonEnumTypeTag::DeAuthorized,
            trigger: TriggerTag::Deauthorized,
        });
    }
    None
}

/// Idle if unplugged; EVConnected if unauthorized; SuspendedEVSE/SuspendedEV
/// if the respective readiness signal is explicitly false; Charging otherwise.
pub fn compute_charging_state(sensors: Sensors, authorized: bool) -> ChargingStateEnumType {
    if sensors.plugged != Some(true) {
        return ChargingStateEnumType::Idle;
    }
    if !authorized {
        return ChargingStateEnumType::EVConnected;
    }
    if sensors.evse_ready == Some(false) {
        return ChargingStateEnumType::SuspendedEVSE;
    }
    if sensors.ev_ready == Some(false) {
        return ChargingStateEnumType::SuspendedEV;
    }
    ChargingStateEnumType::Charging
}

/// One outbound notification the event pipeline (C10) must enqueue. `Started`
/// and `Ended` are emitted at most once per transaction; `Updated` any number
/// of times while Running.
#[derive(Debug, Clone)]
pub enum TransactionOutboundEvent {
    Started {
        connector_id: i32,
        tx_nr: u32,
        id_tag: String,
        meter_start: f64,
        timestamp: DateTime<Utc>,
        trigger: TriggerReasonEnumType,
        offline: bool,
    },
    Updated {
        connector_id: i32,
        tx_nr: u32,
        seq_no: i32,
        trigger: TriggerReasonEnumType,
        timestamp: DateTime<Utc>,
        charging_state: Option<ChargingStateEnumType>,
        /// Present only once, on the first `Updated` event after the EVSE id
        /// became known (gated by `NotifyFlags::evse_id`).
        evse_id: Option<i32>,
        /// The token to report, gated by `NotifyFlags::stop_id_token`/`id_token`;
        /// prefers the stop token over the start token when both are pending.
        id_token: Option<String>,
        /// Present only once, on the first `Updated` event after a remote
        /// start assigned this id (gated by `NotifyFlags::remote_start_id`).
        remote_start_id: Option<i32>,
        meter_value: Vec<MeterValueType>,
    },
    Ended {
        connector_id: i32,
        tx_nr: u32,
        seq_no: i32,
        meter_stop: f64,
        stop_reason: ReasonEnumType,
        trigger: TriggerReasonEnumType,
        timestamp: DateTime<Utc>,
        stop_id_tag: Option<String>,
        offline: bool,
    },
}

/// Per-connector runtime tracked predicates, in addition to what's durable on
/// the `TransactionRecord` itself: `trackTxRunning` is `active_tx.is_some()`.
struct ConnectorRuntime {
    active_tx: Option<Arc<Mutex<TransactionRecord>>>,
    track_authorized: bool,
    track_plugged: Option<bool>,
    track_charging_state: Option<ChargingStateEnumType>,
    accumulator: TransactionAccumulator,
}

impl Default for ConnectorRuntime {
    fn default() -> Self {
        Self {
            active_tx: None,
            track_authorized: false,
            track_plugged: None,
            track_charging_state: None,
            accumulator: TransactionAccumulator::new(),
        }
    }
}

/// Per-EVSE-connector transaction lifecycle plus its durable event pipeline.
/// Drives C8 (durability) and hands generated events to the caller, which is
/// responsible for actually enqueueing them on C10 (and, for v1.6, omitting
/// `seqNo`/`offline`/per-notify framing entirely — the wire-level shape is
/// assembled by the caller from these variants, not by this module, since the
/// 1.6 and 2.0.1 message catalogues diverge at that layer already).
pub struct TransactionStateMachine {
    connectors: HashMap<i32, ConnectorRuntime>,
}

impl Default for TransactionStateMachine {
    fn default() -> Self {
        Self {
            connectors: HashMap::new(),
        }
    }
}

impl TransactionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    fn connector(&mut self, connector_id: i32) -> &mut ConnectorRuntime {
        self.connectors.entry(connector_id).or_default()
    }

    pub fn accumulator(&mut self, connector_id: i32) -> &mut TransactionAccumulator {
        &mut self.connector(connector_id).accumulator
    }

    pub fn has_running_transaction(&self, connector_id: i32) -> bool {
        self.connectors
            .get(&connector_id)
            .map(|c| c.active_tx.is_some())
            .unwrap_or(false)
    }

    /// Records that `id_tag` has just been authorized for `connector_id`. If
    /// no record exists yet for this connector, allocates one via C8 with
    /// `beginTimestamp = now`; the Started event is not emitted here, only on
    /// the next `tick` that satisfies a start condition.
    #[allow(clippy::too_many_arguments)]
    pub fn authorize(
        &mut self,
        store: &mut TransactionStore,
        fs: &dyn FilesystemAdapter,
        connector_id: i32,
        id_tag: &str,
        boot_number: u64,
        now: DateTime<Utc>,
        meter_reading: f64,
        silent: bool,
    ) -> Result<(), TransactionStoreError> {
        if self.has_running_transaction(connector_id) {
            return Ok(());
        }
        let record = store.create_transaction(fs, connector_id, id_tag, boot_number, now, meter_reading, silent)?;
        {
            let mut rec = record.lock().unwrap();
            rec.authorized = true;
            rec.notify.evse_id = true;
            rec.notify.id_token = true;
        }
        self.connector(connector_id).active_tx = Some(record);
        self.connector(connector_id).track_authorized = true;
        Ok(())
    }

    /// Marks the active transaction on `connector_id` deauthorized (e.g. a
    /// server `TransactionEvent`/`Authorize` response no longer accepts the
    /// presented token).
    pub fn deauthorize(&mut self, connector_id: i32) {
        if let Some(tx) = self.connector(connector_id).active_tx.clone() {
            tx.lock().unwrap().deauthorized = true;
        }
    }

    /// Advances the state machine for one connector by one tick: evaluates
    /// start/stop conditions, the EV-connect timeout, and (for a Running
    /// transaction) Updated-event triggers, committing the record through C8
    /// and returning whichever outbound events resulted.
    #[allow(clippy::too_many_arguments)]
    pub fn tick(
        &mut self,
        store: &mut TransactionStore,
        fs: &dyn FilesystemAdapter,
        connector_id: i32,
        config: &TxConfig,
        sensors: Sensors,
        now: DateTime<Utc>,
        meter_reading: f64,
        remote_start_id: Option<i32>,
    ) -> Result<Vec<TransactionOutboundEvent>, TransactionStoreError> {
        let mut events = Vec::new();

        let Some(tx) = self.connector(connector_id).active_tx.clone() else {
            return Ok(events);
        };

        let mut record = tx.lock().unwrap();

        if !record.start_sync.requested {
            if let Some(condition) = evaluate_start(config, sensors, record.authorized) {
                record.start_timestamp = Some(now);
                record.start_sync.requested = true;
                if let Some(rid) = remote_start_id {
                    if record.remote_start_id != Some(rid) {
                        record.remote_start_id = Some(rid);
                        record.notify.remote_start_id = true;
                    }
                }
                store.commit(fs, &record)?;
                let trigger = trigger_for_start(condition, remote_start_id);
                if !record.silent {
                    events.push(TransactionOutboundEvent::Started {
                        connector_id,
                        tx_nr: record.tx_nr,
                        id_tag: record.id_tag.clone(),
                        meter_start: record.meter_start,
                        timestamp: now,
                        trigger,
                        offline: false,
                    });
                }
            } else {
                let elapsed = (now - record.begin_timestamp).num_seconds();
                let plug_ever_seen = self.connector(connector_id).track_plugged.unwrap_or(false) || sensors.plugged == Some(true);
                if !plug_ever_seen && elapsed >= config.ev_connection_timeout_s {
                    record.mark_stopped(ReasonEnumType::Timeout, TriggerReasonEnumType::EVConnectTimeout);
                    record.stop_timestamp = Some(now);
                    store.commit(fs, &record)?;
                    drop(record);
                    self.connector(connector_id).active_tx = None;
                    return Ok(events);
                }
            }
        } else if !record.stop_sync.requested {
            if let Some(decision) = evaluate_stop(config, sensors, record.authorized, record.deauthorized) {
                record.stop_timestamp = Some(now);
                record.stop_sync.requested = true;
                record.meter_stop = Some(meter_reading);
                record.mark_stopped(decision.reason.into_reason(), decision.trigger.into_trigger());
                store.commit(fs, &record)?;
                if !record.silent {
                    events.push(TransactionOutboundEvent::Ended {
                        connector_id,
                        tx_nr: record.tx_nr,
                        seq_no: record.seq_no,
                        meter_stop: meter_reading,
                        stop_reason: decision.reason.into_reason(),
                        trigger: decision.trigger.into_trigger(),
                        timestamp: now,
                        stop_id_tag: record.stop_id_tag.clone(),
                        offline: false,
                    });
                }
            } else {
                let charging_state = compute_charging_state(sensors, record.authorized);
                let runtime = self.connector(connector_id);
                let state_changed = runtime.track_charging_state != Some(charging_state.clone());
                let auth_edge = runtime.track_authorized != record.authorized;
                let plug_edge = runtime.track_plugged != sensors.plugged;
                let pending_meter_values = runtime.accumulator.has_pending();

                if state_changed {
                    record.notify.charging_state = true;
                }

                if state_changed || auth_edge || plug_edge || pending_meter_values {
                    let meter_value = self.connector(connector_id).accumulator.drain_pending();
                    let trigger = if state_changed {
                        TriggerReasonEnumType::ChargingStateChanged
                    } else if auth_edge {
                        TriggerReasonEnumType::Authorized
                    } else if plug_edge {
                        TriggerReasonEnumType::CablePluggedIn
                    } else {
                        TriggerReasonEnumType::MeterValuePeriodic
                    };
                    if !record.silent {
                        let charging_state_out = record.notify.charging_state.then(|| charging_state.clone());
                        let evse_id_out = record.notify.evse_id.then_some(connector_id);
                        let id_token_out = if record.notify.stop_id_token {
                            record.stop_id_tag.clone()
                        } else if record.notify.id_token {
                            Some(record.id_tag.clone())
                        } else {
                            None
                        };
                        let remote_start_id_out = if record.notify.remote_start_id { record.remote_start_id } else { None };

                        events.push(TransactionOutboundEvent::Updated {
                            connector_id,
                            tx_nr: record.tx_nr,
                            seq_no: record.seq_no,
                            trigger,
                            timestamp: now,
                            charging_state: charging_state_out,
                            evse_id: evse_id_out,
                            id_token: id_token_out,
                            remote_start_id: remote_start_id_out,
                            meter_value,
                        });
                        record.notify.charging_state = false;
                        record.notify.evse_id = false;
                        record.notify.id_token = false;
                        record.notify.stop_id_token = false;
                        record.notify.remote_start_id = false;
                        record.seq_no += 1;
                        store.commit(fs, &record)?;
                    }
                }
                let runtime = self.connector(connector_id);
                runtime.track_charging_state = Some(charging_state);
                runtime.track_authorized = record.authorized;
                runtime.track_plugged = sensors.plugged;
            }
        }

        let runtime = self.connector(connector_id);
        runtime.track_plugged = sensors.plugged.or(runtime.track_plugged);

        drop(record);
        if tx.lock().unwrap().stop_sync.confirmed || tx.lock().unwrap().is_aborted() {
            self.connector(connector_id).active_tx = None;
        }

        Ok(events)
    }

    /// Called when the server acknowledges a Started/Ended sync operation,
    /// flipping the matching `confirmed` flag and persisting it.
    pub fn confirm_sync(
        &mut self,
        store: &TransactionStore,
        fs: &dyn FilesystemAdapter,
        connector_id: i32,
        which: SyncKind,
    ) -> Result<(), TransactionStoreError> {
        if let Some(tx) = self.connector(connector_id).active_tx.clone() {
            let mut record = tx.lock().unwrap();
            match which {
                SyncKind::Start => record.start_sync.confirmed = true,
                SyncKind::Stop => record.stop_sync.confirmed = true,
            }
            store.commit(fs, &record)?;
        }
        Ok(())
    }

    /// On restart, for every record with a requested-but-not-confirmed sync
    /// flag, resynthesizes the corresponding event (`offline=true`,
    /// `trigger=Trigger`). Records that cannot be time-adjusted (quarantined
    /// by [`TransactionRecord::quarantine_if_unrecoverable`]) are skipped.
    pub fn resynthesize_pending(
        &mut self,
        store: &mut TransactionStore,
        fs: &dyn FilesystemAdapter,
        connector_id: i32,
    ) -> Result<Vec<TransactionOutboundEvent>, TransactionStoreError> {
        let mut events = Vec::new();
        for tx in store.all_on_connector(fs, connector_id)? {
            let record = tx.lock().unwrap();
            if record.silent {
                continue;
            }
            if record.start_sync.requested && !record.start_sync.confirmed {
                events.push(TransactionOutboundEvent::Started {
                    connector_id,
                    tx_nr: record.tx_nr,
                    id_tag: record.id_tag.clone(),
                    meter_start: record.meter_start,
                    timestamp: record.start_timestamp.unwrap_or(record.begin_timestamp),
                    trigger: TriggerReasonEnumType::Trigger,
                    offline: true,
                });
            }
            if record.stop_sync.requested && !record.stop_sync.confirmed {
                events.push(TransactionOutboundEvent::Ended {
                    connector_id,
                    tx_nr: record.tx_nr,
                    seq_no: record.seq_no,
                    meter_stop: record.meter_stop.unwrap_or(record.meter_start),
                    stop_reason: ReasonEnumType::Other,
                    trigger: TriggerReasonEnumType::Trigger,
                    timestamp: record.stop_timestamp.unwrap_or(record.begin_timestamp),
                    stop_id_tag: record.stop_id_tag.clone(),
                    offline: true,
                });
            }
            if !record.stop_sync.confirmed && !record.is_aborted() {
                drop(record);
                self.connector(connector_id).active_tx = Some(tx);
            }
        }
        Ok(events)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncKind {
    Start,
    Stop,
}
