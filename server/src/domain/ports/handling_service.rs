//! Driving port for handling-event registration.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Error, HandlingEventType, TrackingId, UnLocode, VoyageNumber};

/// Records handling occurrences reported from ports and terminals.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HandlingService: Send + Sync {
    /// Record that `event_type` happened to cargo `id` at `location`, on
    /// `voyage` where the event kind involves one, completed at
    /// `completion_time`.
    async fn register_handling_event(
        &self,
        completion_time: DateTime<Utc>,
        id: TrackingId,
        voyage: VoyageNumber,
        location: UnLocode,
        event_type: HandlingEventType,
    ) -> Result<(), Error>;
}
