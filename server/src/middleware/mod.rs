//! Request middleware.
//!
//! Purpose: request lifecycle concerns that sit outside any single handler,
//! currently trace-identifier propagation.

pub mod trace;

pub use trace::Trace;
