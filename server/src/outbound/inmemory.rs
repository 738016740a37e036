//! In-memory implementation of the booking and handling ports.
//!
//! Backs the binary and the scenario tests. Not a routing engine: candidate
//! routes are a single direct voyage between the cargo's endpoints.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::ports::{BookingService, CargoView, HandlingService, LocationView};
use crate::domain::{
    Error, HandlingEventType, Itinerary, Leg, TrackingId, UnLocode, VoyageNumber,
};

#[derive(Debug, Clone)]
struct StoredEvent {
    completion_time: DateTime<Utc>,
    voyage: VoyageNumber,
    location: UnLocode,
    event_type: HandlingEventType,
}

#[derive(Debug, Clone)]
struct StoredCargo {
    origin: UnLocode,
    destination: UnLocode,
    arrival_deadline: DateTime<Utc>,
    itinerary: Option<Itinerary>,
    events: Vec<StoredEvent>,
}

impl StoredCargo {
    /// A routed cargo is misrouted when its latest handling event falls
    /// outside the itinerary, or the itinerary no longer ends at the
    /// destination.
    fn misrouted(&self) -> bool {
        let Some(itinerary) = &self.itinerary else {
            return false;
        };
        match self.events.last() {
            Some(event) => !expects(itinerary, event),
            None => itinerary
                .legs
                .last()
                .is_some_and(|leg| leg.unload_location != self.destination),
        }
    }
}

/// True when the itinerary anticipates the given handling event.
fn expects(itinerary: &Itinerary, event: &StoredEvent) -> bool {
    itinerary.legs.iter().any(|leg| match event.event_type {
        HandlingEventType::Receive => leg.load_location == event.location,
        HandlingEventType::Load => {
            leg.load_location == event.location && leg.voyage_number == event.voyage
        }
        HandlingEventType::Unload => {
            leg.unload_location == event.location && leg.voyage_number == event.voyage
        }
        HandlingEventType::Customs | HandlingEventType::Claim => {
            leg.unload_location == event.location
        }
    })
}

fn unknown_cargo() -> Error {
    Error::not_found("unknown cargo")
}

fn invalid_argument() -> Error {
    Error::invalid_argument("invalid argument")
}

fn view(id: &str, cargo: &StoredCargo) -> CargoView {
    CargoView {
        tracking_id: TrackingId::new(id),
        origin: cargo.origin.clone(),
        destination: cargo.destination.clone(),
        arrival_deadline: cargo.arrival_deadline,
        routed: cargo.itinerary.is_some(),
        misrouted: cargo.misrouted(),
        legs: cargo
            .itinerary
            .as_ref()
            .map(|itinerary| itinerary.legs.clone())
            .unwrap_or_default(),
    }
}

fn direct_route(cargo: &StoredCargo) -> Itinerary {
    Itinerary {
        legs: vec![Leg {
            voyage_number: VoyageNumber::new("V100"),
            load_location: cargo.origin.clone(),
            unload_location: cargo.destination.clone(),
            load_time: cargo.arrival_deadline - Duration::days(14),
            unload_time: cargo.arrival_deadline - Duration::days(2),
        }],
    }
}

fn sample_locations() -> Vec<LocationView> {
    [
        ("SESTO", "Stockholm"),
        ("AUMEL", "Melbourne"),
        ("CNHKG", "Hongkong"),
        ("USNYC", "New York"),
        ("USCHI", "Chicago"),
        ("JNTKO", "Tokyo"),
        ("DEHAM", "Hamburg"),
        ("NLRTM", "Rotterdam"),
        ("FIHEL", "Helsinki"),
    ]
    .into_iter()
    .map(|(locode, name)| LocationView {
        locode: UnLocode::new(locode),
        name: name.to_owned(),
    })
    .collect()
}

/// Port implementation holding every cargo in process memory.
pub struct InMemoryShippingService {
    cargos: Mutex<HashMap<String, StoredCargo>>,
    locations: Vec<LocationView>,
}

impl Default for InMemoryShippingService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryShippingService {
    /// Create an empty store seeded with the sample location network.
    pub fn new() -> Self {
        Self {
            cargos: Mutex::new(HashMap::new()),
            locations: sample_locations(),
        }
    }

    // First UUID segment, uppercased.
    fn next_tracking_id() -> TrackingId {
        let id = Uuid::new_v4().to_string();
        let head = id.split('-').next().unwrap_or(id.as_str());
        TrackingId::new(head.to_ascii_uppercase())
    }

    fn lock_cargos(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, StoredCargo>>, Error> {
        self.cargos
            .lock()
            .map_err(|_| Error::internal("cargo store poisoned"))
    }
}

#[async_trait]
impl BookingService for InMemoryShippingService {
    async fn book_new_cargo(
        &self,
        origin: UnLocode,
        destination: UnLocode,
        arrival_deadline: DateTime<Utc>,
    ) -> Result<TrackingId, Error> {
        if origin.is_empty() || destination.is_empty() {
            return Err(invalid_argument());
        }
        let id = Self::next_tracking_id();
        let mut cargos = self.lock_cargos()?;
        cargos.insert(
            id.to_string(),
            StoredCargo {
                origin,
                destination,
                arrival_deadline,
                itinerary: None,
                events: Vec::new(),
            },
        );
        Ok(id)
    }

    async fn load_cargo(&self, id: TrackingId) -> Result<CargoView, Error> {
        if id.is_empty() {
            return Err(invalid_argument());
        }
        let cargos = self.lock_cargos()?;
        cargos
            .get(id.as_str())
            .map(|cargo| view(id.as_str(), cargo))
            .ok_or_else(unknown_cargo)
    }

    async fn request_possible_routes(&self, id: TrackingId) -> Result<Vec<Itinerary>, Error> {
        let cargos = self.lock_cargos()?;
        // A failed lookup yields no candidates, not a failure.
        let Some(cargo) = cargos.get(id.as_str()) else {
            return Ok(Vec::new());
        };
        Ok(vec![direct_route(cargo)])
    }

    async fn assign_cargo_to_route(
        &self,
        id: TrackingId,
        itinerary: Itinerary,
    ) -> Result<(), Error> {
        if id.is_empty() || itinerary.is_empty() {
            return Err(invalid_argument());
        }
        let mut cargos = self.lock_cargos()?;
        let cargo = cargos.get_mut(id.as_str()).ok_or_else(unknown_cargo)?;
        cargo.itinerary = Some(itinerary);
        Ok(())
    }

    async fn change_destination(
        &self,
        id: TrackingId,
        destination: UnLocode,
    ) -> Result<(), Error> {
        if id.is_empty() || destination.is_empty() {
            return Err(invalid_argument());
        }
        let mut cargos = self.lock_cargos()?;
        let cargo = cargos.get_mut(id.as_str()).ok_or_else(unknown_cargo)?;
        cargo.destination = destination;
        Ok(())
    }

    async fn cargos(&self) -> Result<Vec<CargoView>, Error> {
        let cargos = self.lock_cargos()?;
        let mut views: Vec<CargoView> = cargos
            .iter()
            .map(|(id, cargo)| view(id, cargo))
            .collect();
        views.sort_by(|a, b| a.tracking_id.as_str().cmp(b.tracking_id.as_str()));
        Ok(views)
    }

    async fn locations(&self) -> Result<Vec<LocationView>, Error> {
        Ok(self.locations.clone())
    }
}

#[async_trait]
impl HandlingService for InMemoryShippingService {
    async fn register_handling_event(
        &self,
        completion_time: DateTime<Utc>,
        id: TrackingId,
        voyage: VoyageNumber,
        location: UnLocode,
        event_type: HandlingEventType,
    ) -> Result<(), Error> {
        if id.is_empty() || location.is_empty() {
            return Err(invalid_argument());
        }
        // Voyage is only mandatory for events that happen aboard one.
        if voyage.is_empty()
            && matches!(event_type, HandlingEventType::Load | HandlingEventType::Unload)
        {
            return Err(invalid_argument());
        }
        let mut cargos = self.lock_cargos()?;
        let cargo = cargos.get_mut(id.as_str()).ok_or_else(unknown_cargo)?;
        cargo.events.push(StoredEvent {
            completion_time,
            voyage,
            location,
            event_type,
        });
        cargo.events.sort_by_key(|event| event.completion_time);
        Ok(())
    }
}
