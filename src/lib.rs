//! MizDooni Reserve - reservation slot selection engine
//!
//! The client-side core of the MizDooni table-reservation flow: it fetches
//! the availability snapshot for a restaurant, enforces the one-month
//! reservation date ceiling, narrows the snapshot to the chosen date and
//! derives whether the reservation can proceed to confirmation.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── config.rs      # Client configuration
//! ├── error.rs       # Error types
//! ├── types.rs       # Wire and domain types
//! ├── http.rs        # Availability endpoint client
//! ├── dates.rs       # Reservation date ceiling rule
//! ├── slots.rs       # Snapshot filtering
//! ├── selection.rs   # Selection state machine
//! └── flow.rs        # Reservation flow glue
//! ```

pub mod config;
pub mod dates;
pub mod error;
pub mod flow;
pub mod http;
pub mod selection;
pub mod slots;
pub mod types;

pub use config::ReserveConfig;
pub use error::{ReserveError, ReserveResult};
pub use flow::ReserveFlow;
pub use http::{AvailabilityClient, AvailabilitySource};
pub use selection::{ReserveView, SelectionState, ONE_HOUR_NOTICE};
pub use types::{AvailabilitySlot, ReservationHandoff, RestaurantAddress, RestaurantContext};

pub use dates::{evaluate_date, reservation_ceiling, DateRejected};
pub use slots::filter_by_date;
