use crate::core::filesystem::{load_json, store_json, FilesystemAdapter, FilesystemError};
use crate::core::CoreError;
use chrono::{DateTime, Utc};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MO_MAX_RESERVATIONS: usize = 10;
pub const RESERVATIONS_FILE: &str = "reservations.jsn";

#[derive(Error, Diagnostic, Debug)]
pub enum ReservationError {
    #[error("no free reservation slot")]
    #[diagnostic()]
    NoFreeSlot,

    #[error("reservation id {0} already active")]
    #[diagnostic()]
    DuplicateReservationId(i32),

    #[error("connector 0 reservations are not supported")]
    #[diagnostic()]
    ConnectorZeroNotSupported,

    #[error("no reservation found")]
    #[diagnostic()]
    NotFound,

    #[error("persistence failure: {0}")]
    #[diagnostic()]
    Filesystem(#[from] FilesystemError),
}

impl CoreError for ReservationError {
    fn to_call_error(&self) -> (&'static str, String) {
        match self {
            ReservationError::NoFreeSlot
            | ReservationError::DuplicateReservationId(_)
            | ReservationError::ConnectorZeroNotSupported
            | ReservationError::NotFound => ("PropertyConstraintViolation", self.to_string()),
            ReservationError::Filesystem(_) => ("InternalError", self.to_string()),
        }
    }
}

/// One slot in the reservation table. A slot with `connector_id < 0` is free,
/// per spec.md's Reservation data model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub connector_id: i32,
    pub expiry_date: DateTime<Utc>,
    pub id_tag: String,
    pub parent_id_tag: Option<String>,
    pub reservation_id: i32,
}

impl Reservation {
    fn free() -> Self {
        Self {
            connector_id: -1,
            expiry_date: crate::core::clock::pre_clock_sentinel(),
            id_tag: String::new(),
            parent_id_tag: None,
            reservation_id: -1,
        }
    }

    fn is_free(&self) -> bool {
        self.connector_id < 0
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.is_free() && self.expiry_date > now
    }

    /// True if this reservation applies to `connector_id`: either it targets
    /// that connector directly, or it targets connector 0 (any connector),
    /// which is only meaningful when `ReserveConnectorZeroSupported` is set.
    pub fn applies_to(&self, connector_id: i32) -> bool {
        self.connector_id == connector_id || self.connector_id == 0
    }
}

/// Fixed-size table of reservation slots, indexed `0..MO_MAX_RESERVATIONS`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReservationStore {
    slots: Vec<Reservation>,
}

impl Default for ReservationStore {
    fn default() -> Self {
        Self {
            slots: (0..MO_MAX_RESERVATIONS).map(|_| Reservation::free()).collect(),
        }
    }
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a free slot for a new reservation. `reserve_connector_zero_supported`
    /// gates `connector_id == 0` (applies-to-any-connector) reservations.
    pub fn reserve_now(
        &mut self,
        fs: &dyn FilesystemAdapter,
        reservation: Reservation,
        reserve_connector_zero_supported: bool,
    ) -> Result<(), ReservationError> {
        if reservation.connector_id == 0 && !reserve_connector_zero_supported {
            return Err(ReservationError::ConnectorZeroNotSupported);
        }
        if self
            .slots
            .iter()
            .any(|r| !r.is_free() && r.reservation_id == reservation.reservation_id)
        {
            return Err(ReservationError::DuplicateReservationId(reservation.reservation_id));
        }
        let slot = self
            .slots
            .iter_mut()
            .find(|r| r.is_free())
            .ok_or(ReservationError::NoFreeSlot)?;
        *slot = reservation;
        self.save(fs)
    }

    /// Removes the reservation with `reservation_id`, freeing its slot.
    pub fn cancel_reservation(&mut self, fs: &dyn FilesystemAdapter, reservation_id: i32) -> Result<(), ReservationError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|r| !r.is_free() && r.reservation_id == reservation_id)
            .ok_or(ReservationError::NotFound)?;
        *slot = Reservation::free();
        self.save(fs)
    }

    /// Drops every reservation whose `expiry_date` has passed, freeing their
    /// slots. Returns the reservation ids that expired.
    pub fn expire(&mut self, fs: &dyn FilesystemAdapter, now: DateTime<Utc>) -> Result<Vec<i32>, ReservationError> {
        let mut expired = Vec::new();
        for slot in self.slots.iter_mut() {
            if !slot.is_free() && !slot.is_active(now) {
                expired.push(slot.reservation_id);
                *slot = Reservation::free();
            }
        }
        if !expired.is_empty() {
            self.save(fs)?;
        }
        Ok(expired)
    }

    /// Finds the active reservation (if any) covering `connector_id`.
    pub fn find_by_connector(&self, connector_id: i32, now: DateTime<Utc>) -> Option<&Reservation> {
        self.slots
            .iter()
            .find(|r| r.is_active(now) && r.applies_to(connector_id))
    }

    /// Finds the active reservation (if any) matching `id_tag`, case-insensitively.
    pub fn find_by_id_tag(&self, id_tag: &str, now: DateTime<Utc>) -> Option<&Reservation> {
        self.slots
            .iter()
            .find(|r| r.is_active(now) && r.id_tag.eq_ignore_ascii_case(id_tag))
    }

    pub fn save(&self, fs: &dyn FilesystemAdapter) -> Result<(), ReservationError> {
        store_json(fs, RESERVATIONS_FILE, &self.slots).map_err(ReservationError::Filesystem)
    }

    pub fn load(fs: &dyn FilesystemAdapter) -> Result<Self, ReservationError> {
        let slots: Option<Vec<Reservation>> = load_json(fs, RESERVATIONS_FILE)?;
        match slots {
            Some(mut slots) => {
                slots.resize_with(MO_MAX_RESERVATIONS, Reservation::free);
                slots.truncate(MO_MAX_RESERVATIONS);
                Ok(Self { slots })
            }
            None => Ok(Self::default()),
        }
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

    fn reservation(connector_id: i32, reservation_id: i32, id_tag: &str) -> Reservation {
        Reservation {
            connector_id,
            expiry_date: now() + chrono::Duration::hours(1),
            id_tag: id_tag.to_string(),
            parent_id_tag: None,
            reservation_id,
        }
    }

    #[test]
    fn reserve_then_find_by_connector() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = ReservationStore::new();
        store.reserve_now(&fs, reservation(1, 100, "ABCD"), true).unwrap();
        assert!(store.find_by_connector(1, now()).is_some());
        assert!(store.find_by_connector(2, now()).is_none());
    }

    #[test]
    fn connector_zero_applies_to_any_connector_when_supported() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = ReservationStore::new();
        store.reserve_now(&fs, reservation(0, 100, "ABCD"), true).unwrap();
        assert!(store.find_by_connector(1, now()).is_some());
        assert!(store.find_by_connector(7, now()).is_some());
    }

    #[test]
    fn connector_zero_rejected_when_not_supported() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = ReservationStore::new();
        let err = store.reserve_now(&fs, reservation(0, 100, "ABCD"), false).unwrap_err();
        assert!(matches!(err, ReservationError::ConnectorZeroNotSupported));
    }

    #[test]
    fn duplicate_reservation_id_rejected() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = ReservationStore::new();
        store.reserve_now(&fs, reservation(1, 100, "ABCD"), true).unwrap();
        let err = store.reserve_now(&fs, reservation(2, 100, "EFGH"), true).unwrap_err();
        assert!(matches!(err, ReservationError::DuplicateReservationId(100)));
    }

    #[test]
    fn no_free_slot_rejected() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = ReservationStore::new();
        for i in 0..MO_MAX_RESERVATIONS {
            store
                .reserve_now(&fs, reservation(i as i32 + 1, i as i32, "ABCD"), true)
                .unwrap();
        }
        let err = store
            .reserve_now(&fs, reservation(99, 999, "ZZZZ"), true)
            .unwrap_err();
        assert!(matches!(err, ReservationError::NoFreeSlot));
    }

    #[test]
    fn cancel_frees_the_slot() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = ReservationStore::new();
        store.reserve_now(&fs, reservation(1, 100, "ABCD"), true).unwrap();
        store.cancel_reservation(&fs, 100).unwrap();
        assert!(store.find_by_connector(1, now()).is_none());
    }

    #[test]
    fn cancel_unknown_reservation_id_fails() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = ReservationStore::new();
        let err = store.cancel_reservation(&fs, 404).unwrap_err();
        assert!(matches!(err, ReservationError::NotFound));
    }

    #[test]
    fn expire_drops_past_reservations_and_frees_slot() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = ReservationStore::new();
        let mut expired_res = reservation(1, 100, "ABCD");
        expired_res.expiry_date = now() - chrono::Duration::hours(1);
        store.reserve_now(&fs, expired_res, true).unwrap();

        let expired = store.expire(&fs, now()).unwrap();
        assert_eq!(expired, vec![100]);
        assert!(store.find_by_connector(1, now()).is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = ReservationStore::new();
        store.reserve_now(&fs, reservation(1, 100, "ABCD"), true).unwrap();

        let loaded = ReservationStore::load(&fs).unwrap();
        assert!(loaded.find_by_connector(1, now()).is_some());
    }

    #[test]
    fn find_by_id_tag_is_case_insensitive() {
        let fs = MemoryFilesystemAdapter::new();
        let mut store = ReservationStore::new();
        store.reserve_now(&fs, reservation(1, 100, "ABCD"), true).unwrap();
        assert!(store.find_by_id_tag("abcd", now()).is_some());
    }
}
