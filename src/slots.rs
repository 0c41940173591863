//! Snapshot filtering
//!
//! Narrows the availability snapshot to the slots matching the chosen date.
//! The filter is stable (original relative order preserved) and recomputed
//! on demand; nothing is cached across distinct dates.

use chrono::NaiveDate;

use crate::AvailabilitySlot;

/// Slots of `all` whose date equals `chosen`, in original order.
///
/// No chosen date means no visible slots.
pub fn filter_by_date(all: &[AvailabilitySlot], chosen: Option<NaiveDate>) -> Vec<AvailabilitySlot> {
    match chosen {
        Some(date) => all.iter().filter(|slot| slot.date == date).copied().collect(),
        None => Vec::new(),
    }
}
