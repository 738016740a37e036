//! Shared HTTP adapter state.
//!
//! Handlers receive this bundle via `actix_web::web::Data`, so they depend
//! only on the domain ports and stay testable without I/O. The bundle is
//! constructed once at startup and read-only thereafter.

use std::sync::Arc;

use crate::domain::ports::{BookingService, HandlingService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub booking: Arc<dyn BookingService>,
    pub handling: Arc<dyn HandlingService>,
}

impl HttpState {
    /// Bundle the port implementations the handlers will invoke.
    pub fn new(booking: Arc<dyn BookingService>, handling: Arc<dyn HandlingService>) -> Self {
        Self { booking, handling }
    }
}
