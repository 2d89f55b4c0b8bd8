//! Core of an embedded OCPP 1.6J / 2.0.1 charging station client: configuration and
//! authorization storage, metering, smart-charging schedules, reservations, transactions,
//! and the request queue that drives them over the wire.

pub mod core;
pub mod enums;
pub mod errors;
pub mod messages;
pub mod ocppj;
pub mod structures;
pub mod traits;
