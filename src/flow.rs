//! Reservation flow glue
//!
//! Owns the single `SelectionState` of one reservation view and wires it to
//! the availability source and the confirmation handoff. The flow is
//! single-threaded and event-driven: the one-time availability load is the
//! only operation that crosses an external boundary, and until it completes
//! the form behaves as if no slots exist. A fetch that resolves after the
//! flow was abandoned is ignored by construction — the snapshot is only
//! installed through `&mut self`, so a dropped flow never observes it.

use chrono::{Local, NaiveDate, NaiveTime};
use tracing::{error, info};

use crate::dates::DateRejected;
use crate::http::AvailabilitySource;
use crate::selection::{ReserveView, SelectionState};
use crate::types::{ReservationHandoff, RestaurantContext};

/// One reservation flow for one restaurant view
pub struct ReserveFlow<S> {
    source: S,
    context: RestaurantContext,
    state: SelectionState,
}

impl<S: AvailabilitySource> ReserveFlow<S> {
    /// Open a fresh flow; the selection starts empty
    pub fn new(source: S, context: RestaurantContext) -> Self {
        let state = SelectionState::new(context.max_seats);
        Self {
            source,
            context,
            state,
        }
    }

    /// One-time availability load for this view.
    ///
    /// A failed fetch degrades to an empty snapshot: logged, never surfaced
    /// to the user, never a crash. The form then shows "no table available"
    /// for any date, which is the intended silent-degradation behavior.
    pub async fn load(&mut self) {
        match self.source.available_times().await {
            Ok(slots) => {
                info!(slot_count = slots.len(), "Availability snapshot loaded");
                self.state.load_slots(slots);
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch available times, degrading to empty availability");
                self.state.load_slots(Vec::new());
            }
        }
    }

    /// Record the party size choice
    pub fn set_party_size(&mut self, size: u32) {
        self.state.set_party_size(size);
    }

    /// Validate and record a date choice; "today" is read from the host
    /// clock at this moment, never cached across interactions.
    pub fn set_date(&mut self, candidate: NaiveDate) -> Result<(), DateRejected> {
        let today = Local::now().date_naive();
        self.state.set_date(candidate, today)
    }

    /// Record a time choice drawn from the visible slots
    pub fn set_time(&mut self, time: NaiveTime) {
        self.state.set_time(time);
    }

    /// Current selection state
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Presentation decision for the form body
    pub fn view(&self) -> ReserveView {
        self.state.view()
    }

    /// True iff the reservation can proceed to confirmation
    pub fn is_submittable(&self) -> bool {
        self.state.is_submittable()
    }

    /// Publish the finalized selection to the confirmation surface.
    ///
    /// `None` until all three selections are present; the submit action is
    /// disabled in that case, so a `None` here is never user-visible.
    pub fn handoff(&self) -> Option<ReservationHandoff> {
        let party_size = self.state.party_size()?;
        let date = self.state.chosen_date()?;
        let time = self.state.chosen_time()?;

        info!(party_size, %date, %time, "Reservation handed off to confirmation");
        Some(ReservationHandoff {
            party_size,
            date,
            time,
            address: self.context.address.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::{parse_date, parse_time};
    use crate::types::RestaurantAddress;
    use crate::{AvailabilitySlot, ReserveError, ReserveResult};
    use async_trait::async_trait;

    struct FixedSource(Vec<AvailabilitySlot>);

    #[async_trait]
    impl AvailabilitySource for FixedSource {
        async fn available_times(&self) -> ReserveResult<Vec<AvailabilitySlot>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl AvailabilitySource for FailingSource {
        async fn available_times(&self) -> ReserveResult<Vec<AvailabilitySlot>> {
            Err(ReserveError::Internal("availability endpoint down".to_string()))
        }
    }

    fn context() -> RestaurantContext {
        RestaurantContext::new(
            4,
            RestaurantAddress {
                country: "Iran".to_string(),
                city: "Tehran".to_string(),
                street: "Enghelab St".to_string(),
            },
        )
    }

    fn slot(date: &str, time: &str) -> AvailabilitySlot {
        AvailabilitySlot::new(parse_date(date).unwrap(), parse_time(time).unwrap())
    }

    /// A date within the ceiling no matter when the test runs
    fn near_date() -> chrono::NaiveDate {
        Local::now().date_naive()
    }

    #[tokio::test]
    async fn test_full_flow_produces_handoff() {
        let date = near_date();
        let time = parse_time("18:00").unwrap();
        let mut flow = ReserveFlow::new(
            FixedSource(vec![AvailabilitySlot::new(date, time)]),
            context(),
        );
        flow.load().await;

        flow.set_party_size(3);
        flow.set_date(date).unwrap();
        assert_eq!(flow.state().visible_slots(), vec![AvailabilitySlot::new(date, time)]);
        flow.set_time(time);

        assert!(flow.is_submittable());
        let handoff = flow.handoff().unwrap();
        assert_eq!(handoff.party_size, 3);
        assert_eq!(handoff.date, date);
        assert_eq!(handoff.time, time);
        assert_eq!(handoff.address.city, "Tehran");
    }

    #[tokio::test]
    async fn test_no_handoff_until_submittable() {
        let date = near_date();
        let mut flow = ReserveFlow::new(
            FixedSource(vec![AvailabilitySlot::new(date, parse_time("18:00").unwrap())]),
            context(),
        );
        flow.load().await;

        assert!(flow.handoff().is_none());
        flow.set_party_size(2);
        assert!(flow.handoff().is_none());
        flow.set_date(date).unwrap();
        assert!(flow.handoff().is_none());
        flow.set_time(parse_time("18:00").unwrap());
        assert!(flow.handoff().is_some());
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_empty() {
        let mut flow = ReserveFlow::new(FailingSource, context());
        flow.load().await;

        flow.set_date(near_date()).unwrap();
        assert!(flow.state().visible_slots().is_empty());
        assert_eq!(flow.view(), ReserveView::NoTableAvailable);
        assert!(!flow.is_submittable());
    }

    #[tokio::test]
    async fn test_before_load_behaves_as_empty() {
        let flow = ReserveFlow::new(FixedSource(vec![slot("2024-03-15", "18:00")]), context());
        assert!(flow.state().visible_slots().is_empty());
        assert_eq!(flow.view(), ReserveView::SelectSeatsAndDate);
    }

    #[tokio::test]
    async fn test_far_future_date_rejected_via_clock() {
        let mut flow = ReserveFlow::new(FixedSource(Vec::new()), context());
        flow.load().await;

        let far = near_date()
            .checked_add_months(chrono::Months::new(2))
            .unwrap();
        assert!(flow.set_date(far).is_err());
        assert!(flow.state().date_error().is_some());
        assert!(matches!(flow.view(), ReserveView::DateError(_)));
    }
}
