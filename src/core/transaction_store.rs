use crate::core::clock::pre_clock_sentinel;
use crate::core::filesystem::{load_json, store_json, FilesystemAdapter, FilesystemError};
use crate::core::CoreError;
use crate::enums::reason_enum_type::ReasonEnumType;
use crate::enums::trigger_reason_enum_type::TriggerReasonEnumType;
use crate::structures::meter_value_type::MeterValueType;
use chrono::{DateTime, Utc};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};
use thiserror::Error;

pub const MO_TXRECORD_SIZE: u32 = 4;

#[derive(Error, Diagnostic, Debug)]
pub enum TransactionStoreError {
    #[error("no free transaction slot on connector {connector_id}")]
    #[diagnostic()]
    RingFull { connector_id: i32 },

    #[error("transaction {connector_id}/{tx_nr} not found")]
    #[diagnostic()]
    NotFound { connector_id: i32, tx_nr: u32 },

    #[error("remove rejected: {tx_nr} is not the oldest record on connector {connector_id}")]
    #[diagnostic()]
    NotOldest { connector_id: i32, tx_nr: u32 },

    #[error("persistence failure: {0}")]
    #[diagnostic()]
    Filesystem(#[from] FilesystemError),
}

impl CoreError for TransactionStoreError {
    fn to_call_error(&self) -> (&'static str, String) {
        match self {
            TransactionStoreError::RingFull { .. }
            | TransactionStoreError::NotFound { .. }
            | TransactionStoreError::NotOldest { .. } => ("PropertyConstraintViolation", self.to_string()),
            TransactionStoreError::Filesystem(_) => ("InternalError", self.to_string()),
        }
    }
}

/// int for 1.6, string for 2.0.1; unassigned until the server confirms the
/// Start event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum ServerTransactionId {
    #[default]
    Unassigned,
    V16(i32),
    V201(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SyncFlags {
    pub requested: bool,
    pub confirmed: bool,
}

/// Per-notify flags from the v2.0.1 event pipeline. Every flag starts unset
/// and is raised by the producer that changes the corresponding field
/// (`evse_id`/`id_token` on authorization, `charging_state` on a charging-state
/// edge, `remote_start_id` on a remote-start-triggered transaction); C9 clears
/// a flag the moment the `Updated` event carrying that field is enqueued, so
/// each optional field rides along exactly once rather than on every event.
///
/// `reservation_id` is carried for parity with the field inventory but, same
/// as in the upstream client this is modeled on, nothing in this state
/// machine ever correlates a transaction back to the reservation that
/// authorized it, so it is never raised.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct NotifyFlags {
    pub evse_id: bool,
    pub id_token: bool,
    pub stop_id_token: bool,
    pub reservation_id: bool,
    pub charging_state: bool,
    pub remote_start_id: bool,
    pub meter_value: bool,
}

/// Durable per-session record. One lives per charging session; identity is
/// `(connector_id, tx_nr)` within the connector's ring buffer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub connector_id: i32,
    pub tx_nr: u32,
    pub start_boot_nr: u64,
    pub stop_boot_nr: Option<u64>,
    pub server_transaction_id: ServerTransactionId,
    pub remote_start_id: Option<i32>,

    pub id_tag: String,
    pub parent_id_tag: Option<String>,
    pub stop_id_tag: Option<String>,
    pub authorized: bool,
    pub deauthorized: bool,

    pub begin_timestamp: DateTime<Utc>,
    pub start_timestamp: Option<DateTime<Utc>>,
    pub stop_timestamp: Option<DateTime<Utc>>,

    pub meter_start: f64,
    pub meter_stop: Option<f64>,

    pub active: bool,
    pub silent: bool,
    pub start_sync: SyncFlags,
    pub stop_sync: SyncFlags,

    pub seq_no: i32,
    pub notify: NotifyFlags,
    pub stop_reason: Option<String>,
    pub stop_trigger: Option<String>,

    #[serde(skip)]
    pub clock_aligned_meter_values: Vec<MeterValueType>,
    #[serde(skip)]
    pub periodic_meter_values: Vec<MeterValueType>,
    #[serde(skip)]
    pub trigger_meter_values: Vec<MeterValueType>,
}

impl TransactionRecord {
    pub fn new(
        connector_id: i32,
        tx_nr: u32,
        start_boot_nr: u64,
        id_tag: &str,
        begin_timestamp: DateTime<Utc>,
        meter_start: f64,
        silent: bool,
    ) -> Self {
        Self {
            connector_id,
            tx_nr,
            start_boot_nr,
            stop_boot_nr: None,
            server_transaction_id: ServerTransactionId::Unassigned,
            remote_start_id: None,
            id_tag: id_tag.to_string(),
            parent_id_tag: None,
            stop_id_tag: None,
            authorized: false,
            deauthorized: false,
            begin_timestamp,
            start_timestamp: None,
            stop_timestamp: None,
            meter_start,
            meter_stop: None,
            active: true,
            silent,
            start_sync: SyncFlags::default(),
            stop_sync: SyncFlags::default(),
            seq_no: 0,
            notify: NotifyFlags::default(),
            stop_reason: None,
            stop_trigger: None,
            clock_aligned_meter_values: Vec::new(),
            periodic_meter_values: Vec::new(),
            trigger_meter_values: Vec::new(),
        }
    }

    pub fn mark_stopped(&mut self, reason: ReasonEnumType, trigger: TriggerReasonEnumType) {
        self.stop_reason = Some(reason.to_string());
        self.stop_trigger = Some(trigger.to_string());
        self.active = false;
    }

    /// Whether this record's sync flags put it in the Preparing/Running/
    /// Stopping/Completed/Aborted state, per spec.md's derivation from flags.
    pub fn is_completed(&self) -> bool {
        self.stop_sync.confirmed
    }

    pub fn is_aborted(&self) -> bool {
        !self.start_sync.requested && !self.active
    }

    /// A record whose timestamps predate this boot's clock synchronization
    /// and whose boot number is stale cannot be time-adjusted; per spec.md's
    /// Durability rule it is marked silent and inactive so it is never
    /// reported.
    pub fn quarantine_if_unrecoverable(&mut self, current_boot_number: u64) {
        if pre_clock_sentinel() >= self.begin_timestamp && self.start_boot_nr != current_boot_number {
            self.silent = true;
            self.active = false;
        }
    }
}

fn record_file_name(connector_id: i32, tx_nr: u32) -> String {
    format!("tx-{connector_id}-{tx_nr}.jsn")
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RingCursor {
    tx_begin: u32,
    tx_end: u32,
}

const CURSOR_FILE: &str = "tx-cursors.jsn";

/// Per-connector ring buffer of durable transaction records, backed by one
/// JSON file per `(connectorId, txNr)` plus a shared cursor file tracking
/// each connector's `[txBegin, txEnd)` window. Concurrent holders of the same
/// record share one `Arc`, deduplicated through a weak-reference cache, so
/// mutations made through one handle are visible to all.
pub struct TransactionStore {
    cursors: HashMap<i32, RingCursor>,
    cache: HashMap<(i32, u32), Weak<Mutex<TransactionRecord>>>,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self {
            cursors: HashMap::new(),
            cache: HashMap::new(),
        }
    }
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn cursor(&mut self, connector_id: i32) -> &mut RingCursor {
        self.cursors.entry(connector_id).or_default()
    }

    /// Attempts to allocate a new record at `txEnd`. If the ring is full,
    /// tries deleting the oldest record, but only if it is Completed or
    /// Aborted; otherwise fails with [`TransactionStoreError::RingFull`].
    pub fn create_transaction(
        &mut self,
        fs: &dyn FilesystemAdapter,
        connector_id: i32,
        id_tag: &str,
        start_boot_nr: u64,
        begin_timestamp: DateTime<Utc>,
        meter_start: f64,
        silent: bool,
    ) -> Result<Arc<Mutex<TransactionRecord>>, TransactionStoreError> {
        let cursor = self.cursor(connector_id);
        let in_use = cursor.tx_end.wrapping_sub(cursor.tx_begin);
        if in_use >= MO_TXRECORD_SIZE {
            let oldest_nr = cursor.tx_begin % MO_TXRECORD_SIZE;
            let oldest: Option<TransactionRecord> = load_json(fs, &record_file_name(connector_id, oldest_nr))?;
            let can_evict = oldest.map(|r| r.is_completed() || r.is_aborted()).unwrap_or(true);
            if !can_evict {
                return Err(TransactionStoreError::RingFull { connector_id });
            }
            self.remove(fs, connector_id, oldest_nr)?;
        }

        let cursor = self.cursor(connector_id);
        let tx_nr = cursor.tx_end % MO_TXRECORD_SIZE;
        cursor.tx_end = cursor.tx_end.wrapping_add(1);
        self.save_cursors(fs)?;

        let record = TransactionRecord::new(connector_id, tx_nr, start_boot_nr, id_tag, begin_timestamp, meter_start, silent);
        store_json(fs, &record_file_name(connector_id, tx_nr), &record)?;
        let shared = Arc::new(Mutex::new(record));
        self.cache.insert((connector_id, tx_nr), Arc::downgrade(&shared));
        Ok(shared)
    }

    /// Returns a shared handle to the record at `(connector_id, tx_nr)`,
    /// reusing a live in-memory instance if one is already held, loading from
    /// disk otherwise.
    pub fn get_transaction(
        &mut self,
        fs: &dyn FilesystemAdapter,
        connector_id: i32,
        tx_nr: u32,
    ) -> Result<Arc<Mutex<TransactionRecord>>, TransactionStoreError> {
        if let Some(existing) = self.cache.get(&(connector_id, tx_nr)).and_then(Weak::upgrade) {
            return Ok(existing);
        }
        let record: Option<TransactionRecord> = load_json(fs, &record_file_name(connector_id, tx_nr))?;
        let record = record.ok_or(TransactionStoreError::NotFound { connector_id, tx_nr })?;
        let shared = Arc::new(Mutex::new(record));
        self.cache.insert((connector_id, tx_nr), Arc::downgrade(&shared));
        Ok(shared)
    }

    /// Removes the record at `tx_nr`, only permitted when it is the oldest
    /// (`txBegin`) on its connector; advances `txBegin`.
    pub fn remove(&mut self, fs: &dyn FilesystemAdapter, connector_id: i32, tx_nr: u32) -> Result<(), TransactionStoreError> {
        let cursor = self.cursors.entry(connector_id).or_default();
        if cursor.tx_begin % MO_TXRECORD_SIZE != tx_nr {
            return Err(TransactionStoreError::NotOldest { connector_id, tx_nr });
        }
        cursor.tx_begin = cursor.tx_begin.wrapping_add(1);
        self.save_cursors(fs)?;
        fs.remove(&record_file_name(connector_id, tx_nr))?;
        self.cache.remove(&(connector_id, tx_nr));
        Ok(())
    }

    /// Persists `record` atomically. On I/O failure the in-memory copy (still
    /// reachable through any `Arc` holder) is left intact; only the attempt
    /// to flush it to disk has failed.
    pub fn commit(&self, fs: &dyn FilesystemAdapter, record: &TransactionRecord) -> Result<(), TransactionStoreError> {
        store_json(fs, &record_file_name(record.connector_id, record.tx_nr), record)?;
        Ok(())
    }

    fn save_cursors(&self, fs: &dyn FilesystemAdapter) -> Result<(), TransactionStoreError> {
        store_json(fs, CURSOR_FILE, &self.cursors)?;
        Ok(())
    }

    /// Reloads ring cursors from disk on restart.
    pub fn load_cursors(&mut self, fs: &dyn FilesystemAdapter) -> Result<(), TransactionStoreError> {
        if let Some(cursors) = load_json(fs, CURSOR_FILE)? {
            self.cursors = cursors;
        }
        Ok(())
    }

    /// Every record in `[txBegin, txEnd)` on `connector_id`, in ring order,
    /// for restart-time resynthesis of pending sync events.
    pub fn all_on_connector(
        &mut self,
        fs: &dyn FilesystemAdapter,
        connector_id: i32,
    ) -> Result<Vec<Arc<Mutex<TransactionRecord>>>, TransactionStoreError> {
        let (tx_begin, tx_end) = {
            let cursor = self.cursor(connector_id);
            (cursor.tx_begin, cursor.tx_end)
        };
        let mut records = Vec::new();
        let mut nr = tx_begin;
        while nr != tx_end {
            records.push(self.get_transaction(fs, connector_id, nr % MO_TXRECORD_SIZE)?);
            nr = nr.wrapping_add(1);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filesystem::MemoryFilesystemAdapter;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 28, 12, 0, 0).unwrap()
    }

    #[test]
    fn create_then_get_returns_same_shared_instance() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = TransactionStore::new();
        let created = store.create_transaction(&fs, 1, "ABCD", 1, now(), 0.0, false).unwrap();
        let fetched = store.get_transaction(&fs, 1, 0).unwrap();
        assert!(Arc::ptr_eq(&created, &fetched));
    }

    #[test]
    fn get_transaction_without_live_handle_loads_from_disk() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = TransactionStore::new();
        {
            let created = store.create_transaction(&fs, 1, "ABCD", 1, now(), 0.0, false).unwrap();
            store.commit(&fs, &created.lock().unwrap()).unwrap();
            drop(created);
        }
        // Drop the cache entry's only strong ref and force a reload via a fresh store.
        let mut reloaded_store = TransactionStore::new();
        let fetched = reloaded_store.get_transaction(&fs, 1, 0).unwrap();
        assert_eq!(fetched.lock().unwrap().id_tag, "ABCD");
    }

    #[test]
    fn only_one_running_slot_per_connector_and_ring_fills_up() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = TransactionStore::new();
        for _ in 0..MO_TXRECORD_SIZE {
            let tx = store.create_transaction(&fs, 1, "ABCD", 1, now(), 0.0, false).unwrap();
            let mut record = tx.lock().unwrap();
            record.mark_stopped(ReasonEnumType::Local, TriggerReasonEnumType::StopAuthorized);
            record.stop_sync = SyncFlags { requested: true, confirmed: true };
            store.commit(&fs, &record).unwrap();
        }
        // Ring is full of Completed records, all evictable: the next create still succeeds.
        let result = store.create_transaction(&fs, 1, "EFGH", 1, now(), 0.0, false);
        assert!(result.is_ok());
    }

    #[test]
    fn ring_full_of_running_transactions_rejects_create() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = TransactionStore::new();
        for _ in 0..MO_TXRECORD_SIZE {
            let tx = store.create_transaction(&fs, 1, "ABCD", 1, now(), 0.0, false).unwrap();
            store.commit(&fs, &tx.lock().unwrap()).unwrap();
        }
        let err = store.create_transaction(&fs, 1, "EFGH", 1, now(), 0.0, false).unwrap_err();
        assert!(matches!(err, TransactionStoreError::RingFull { .. }));
    }

    #[test]
    fn remove_only_permitted_at_tx_begin() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = TransactionStore::new();
        store.create_transaction(&fs, 1, "ABCD", 1, now(), 0.0, false).unwrap();
        store.create_transaction(&fs, 1, "EFGH", 1, now(), 0.0, false).unwrap();

        let err = store.remove(&fs, 1, 1).unwrap_err();
        assert!(matches!(err, TransactionStoreError::NotOldest { .. }));

        store.remove(&fs, 1, 0).unwrap();
        assert!(store.get_transaction(&fs, 1, 0).is_err());
    }

    #[test]
    fn quarantine_marks_silent_and_inactive_when_unrecoverable() {
        let mut record = TransactionRecord::new(1, 0, 1, "ABCD", pre_clock_sentinel(), 0.0, false);
        record.quarantine_if_unrecoverable(2);
        assert!(record.silent);
        assert!(!record.active);
    }

    #[test]
    fn quarantine_leaves_same_boot_record_alone() {
        let mut record = TransactionRecord::new(1, 0, 1, "ABCD", pre_clock_sentinel(), 0.0, false);
        record.quarantine_if_unrecoverable(1);
        assert!(!record.silent);
        assert!(record.active);
    }

    #[test]
    fn all_on_connector_returns_records_in_ring_order() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = TransactionStore::new();
        store.create_transaction(&fs, 1, "A", 1, now(), 0.0, false).unwrap();
        store.create_transaction(&fs, 1, "B", 1, now(), 0.0, false).unwrap();

        let records = store.all_on_connector(&fs, 1).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].lock().unwrap().id_tag, "A");
        assert_eq!(records[1].lock().unwrap().id_tag, "B");
    }
}
