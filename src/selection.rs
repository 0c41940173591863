//! Selection state machine
//!
//! One `SelectionState` exists per reservation view. Each user interaction
//! (seat pick, date pick, time pick) is a discrete, atomically-applied
//! transition; `visible_slots` and `is_submittable` are derived on demand
//! from the current fields so they can never drift out of sync.

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::dates::{evaluate_date, DateRejected};
use crate::slots::filter_by_date;
use crate::AvailabilitySlot;

/// Fixed notice shown with the time list: every reservation is one hour.
pub const ONE_HOUR_NOTICE: &str =
    "You will reserve this table only for one hour, for more time please contact the restaurant.";

/// What the reservation form should present, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReserveView {
    /// The last date input was rejected; show the message, no time list
    DateError(String),
    /// A valid date is chosen and has open slots; show them with the notice
    AvailableTimes {
        slots: Vec<AvailabilitySlot>,
        notice: &'static str,
    },
    /// A valid date is chosen but nothing is open on it
    NoTableAvailable,
    /// Nothing chosen yet; prompt for seats and a date
    SelectSeatsAndDate,
}

/// Mutable state of one reservation flow.
///
/// The availability snapshot is installed once after the fetch and only ever
/// filtered afterwards. `party_size`, `chosen_date` and `chosen_time` start
/// unset; unset is "no selection", not an error.
#[derive(Debug, Clone)]
pub struct SelectionState {
    max_seats: u32,
    slots: Vec<AvailabilitySlot>,
    party_size: Option<u32>,
    chosen_date: Option<NaiveDate>,
    chosen_time: Option<NaiveTime>,
    date_error: Option<String>,
}

impl SelectionState {
    /// Create an empty selection bounded by the restaurant's capacity
    pub fn new(max_seats: u32) -> Self {
        Self {
            max_seats,
            slots: Vec::new(),
            party_size: None,
            chosen_date: None,
            chosen_time: None,
            date_error: None,
        }
    }

    /// Install the availability snapshot fetched for this view
    pub fn load_slots(&mut self, slots: Vec<AvailabilitySlot>) {
        self.slots = slots;
    }

    /// Record the party size.
    ///
    /// Only `1..=max_seats` counts as a selection; zero or out-of-range
    /// input clears the field back to unselected.
    pub fn set_party_size(&mut self, size: u32) {
        self.party_size = (1..=self.max_seats).contains(&size).then_some(size);
    }

    /// Validate and record a reservation date.
    ///
    /// `today` comes from the host clock at the moment of validation.
    /// Rejection sets `date_error` and clears `chosen_date`; acceptance sets
    /// `chosen_date` and clears `date_error` — the two are mutually
    /// exclusive. Either way the previously chosen time is stale relative to
    /// the new date and is cleared, so the user must re-pick it.
    pub fn set_date(&mut self, candidate: NaiveDate, today: NaiveDate) -> Result<(), DateRejected> {
        self.chosen_time = None;
        match evaluate_date(candidate, today) {
            Ok(date) => {
                self.chosen_date = Some(date);
                self.date_error = None;
                Ok(())
            }
            Err(rejected) => {
                debug!(%candidate, %today, ceiling = %rejected.ceiling, "Reservation date rejected");
                self.chosen_date = None;
                self.date_error = Some(rejected.to_string());
                Err(rejected)
            }
        }
    }

    /// Record a time choice.
    ///
    /// The caller only offers times drawn from `visible_slots`, so an
    /// out-of-set time cannot occur through the normal interaction path.
    pub fn set_time(&mut self, time: NaiveTime) {
        self.chosen_time = Some(time);
    }

    pub fn max_seats(&self) -> u32 {
        self.max_seats
    }

    pub fn party_size(&self) -> Option<u32> {
        self.party_size
    }

    pub fn chosen_date(&self) -> Option<NaiveDate> {
        self.chosen_date
    }

    pub fn chosen_time(&self) -> Option<NaiveTime> {
        self.chosen_time
    }

    pub fn date_error(&self) -> Option<&str> {
        self.date_error.as_deref()
    }

    /// Slots of the snapshot matching the chosen date, in snapshot order
    pub fn visible_slots(&self) -> Vec<AvailabilitySlot> {
        filter_by_date(&self.slots, self.chosen_date)
    }

    /// True iff seats, date and time are all selected
    pub fn is_submittable(&self) -> bool {
        self.party_size.is_some() && self.chosen_date.is_some() && self.chosen_time.is_some()
    }

    /// Presentation decision for the form body
    pub fn view(&self) -> ReserveView {
        if let Some(message) = &self.date_error {
            return ReserveView::DateError(message.clone());
        }
        if self.chosen_date.is_some() {
            let slots = self.visible_slots();
            if slots.is_empty() {
                return ReserveView::NoTableAvailable;
            }
            return ReserveView::AvailableTimes {
                slots,
                notice: ONE_HOUR_NOTICE,
            };
        }
        ReserveView::SelectSeatsAndDate
    }
}
