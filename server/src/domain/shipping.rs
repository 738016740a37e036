//! Shipping value types crossing the HTTP boundary.
//!
//! Identifiers are opaque: they are constructed directly from wire strings
//! without semantic validation, which belongs to the domain service behind
//! the ports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier assigned to a booked cargo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(String);

/// United Nations location code for a port or terminal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnLocode(String);

/// Identifier of a voyage in the transport network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoyageNumber(String);

macro_rules! string_newtype {
    ($name:ident) => {
        impl $name {
            /// Wrap a wire string without validating it.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the raw string form.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            /// True when the identifier holds no usable content.
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_newtype!(TrackingId);
string_newtype!(UnLocode);
string_newtype!(VoyageNumber);

/// Kind of handling occurrence recorded for a cargo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlingEventType {
    Receive,
    Load,
    Unload,
    Customs,
    Claim,
}

/// Raised when a wire string names no known handling event type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised handling event type: {0}")]
pub struct HandlingEventTypeParseError(String);

impl FromStr for HandlingEventType {
    type Err = HandlingEventTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "receive" => Ok(Self::Receive),
            "load" => Ok(Self::Load),
            "unload" => Ok(Self::Unload),
            "customs" => Ok(Self::Customs),
            "claim" => Ok(Self::Claim),
            _ => Err(HandlingEventTypeParseError(s.to_owned())),
        }
    }
}

impl fmt::Display for HandlingEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Receive => "Receive",
            Self::Load => "Load",
            Self::Unload => "Unload",
            Self::Customs => "Customs",
            Self::Claim => "Claim",
        };
        f.write_str(name)
    }
}

/// One transport movement of an itinerary.
///
/// Wire contract keeps the historical `from`/`to` field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub voyage_number: VoyageNumber,
    #[serde(rename = "from")]
    pub load_location: UnLocode,
    #[serde(rename = "to")]
    pub unload_location: UnLocode,
    pub load_time: DateTime<Utc>,
    pub unload_time: DateTime<Utc>,
}

/// Ordered sequence of legs assigned to a cargo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    #[serde(default)]
    pub legs: Vec<Leg>,
}

impl Itinerary {
    /// True when no legs have been assigned.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}
