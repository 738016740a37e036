//! Capability interfaces ("ports") the transport layer drives.
//!
//! HTTP handlers hold `Arc<dyn …>` references to these traits only, so the
//! domain service behind them can be swapped for a test double.

pub mod booking_service;
pub mod handling_service;

pub use booking_service::{BookingService, CargoView, LocationView};
pub use handling_service::HandlingService;

#[cfg(test)]
pub use booking_service::MockBookingService;
#[cfg(test)]
pub use handling_service::MockHandlingService;
