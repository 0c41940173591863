//! Wire and domain types for the reservation flow

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One bookable (date, time) pair for the current restaurant.
///
/// Slots come from the availability endpoint and are never mutated by the
/// engine; the selection state only filters and reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    /// Calendar date, wire format `YYYY-MM-DD`
    pub date: NaiveDate,

    /// Local time of day, wire format `HH:MM`
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
}

impl AvailabilitySlot {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }
}

/// Restaurant address as shown on the confirmation surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantAddress {
    pub country: String,
    pub city: String,
    pub street: String,
}

/// Restaurant context surrounding one reservation flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantContext {
    /// Largest party size a table can seat, bounds the seat picker
    pub max_seats: u32,

    /// Address forwarded to the confirmation surface
    pub address: RestaurantAddress,
}

impl RestaurantContext {
    pub fn new(max_seats: u32, address: RestaurantAddress) -> Self {
        Self { max_seats, address }
    }
}

/// Finalized selection published to the confirmation surface.
///
/// Only produced once all three selections are present; the confirmation
/// surface's behavior is outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationHandoff {
    pub party_size: u32,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub address: RestaurantAddress,
}

/// Serde helper for the `HH:MM` wire format used by the availability endpoint
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
