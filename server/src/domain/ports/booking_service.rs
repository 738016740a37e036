//! Driving port for the booking side of the shipping domain.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Itinerary, Leg, TrackingId, UnLocode};

/// Read model describing a booked cargo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoView {
    pub tracking_id: TrackingId,
    pub origin: UnLocode,
    pub destination: UnLocode,
    pub arrival_deadline: DateTime<Utc>,
    pub routed: bool,
    pub misrouted: bool,
    pub legs: Vec<Leg>,
}

/// Read model describing a location known to the routing network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationView {
    pub locode: UnLocode,
    pub name: String,
}

/// Booking-side operations the HTTP adapter invokes.
///
/// Implementations own all business validation; the adapter passes wire
/// values through untouched and reports `Err(Error)` via the shared encoder.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Register a new cargo and return its tracking id.
    async fn book_new_cargo(
        &self,
        origin: UnLocode,
        destination: UnLocode,
        arrival_deadline: DateTime<Utc>,
    ) -> Result<TrackingId, Error>;

    /// Load the read model for one cargo.
    async fn load_cargo(&self, id: TrackingId) -> Result<CargoView, Error>;

    /// Compute candidate itineraries satisfying the cargo's route
    /// specification. A cargo that cannot be found yields no candidates
    /// rather than a failure.
    async fn request_possible_routes(&self, id: TrackingId) -> Result<Vec<Itinerary>, Error>;

    /// Attach an itinerary to a cargo.
    async fn assign_cargo_to_route(
        &self,
        id: TrackingId,
        itinerary: Itinerary,
    ) -> Result<(), Error>;

    /// Change the destination of an existing cargo.
    async fn change_destination(
        &self,
        id: TrackingId,
        destination: UnLocode,
    ) -> Result<(), Error>;

    /// List every booked cargo.
    async fn cargos(&self) -> Result<Vec<CargoView>, Error>;

    /// List the locations known to the routing network.
    async fn locations(&self) -> Result<Vec<LocationView>, Error>;
}
