//! Domain primitives shared by the HTTP adapter and the service ports.
//!
//! Purpose: keep the boundary types transport agnostic. The inbound adapter
//! maps them to HTTP envelopes; the ports in [`ports`] consume them as plain
//! value-typed arguments. Serialisation contracts (serde) are documented on
//! each type.

pub mod error;
pub mod ports;
pub mod shipping;

pub use self::error::{Error, ErrorCode};
pub use self::shipping::{
    HandlingEventType, HandlingEventTypeParseError, Itinerary, Leg, TrackingId, UnLocode,
    VoyageNumber,
};
