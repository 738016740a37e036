//! Outbound adapters implementing the domain ports.

pub mod inmemory;

pub use inmemory::InMemoryShippingService;
