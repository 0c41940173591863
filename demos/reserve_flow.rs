//! Reservation flow walkthrough
//!
//! Spins an in-process availability endpoint, then drives the slot
//! selection engine through a complete booking: load, pick seats,
//! pick a date, pick a time, hand off to confirmation.
//!
//! Run: cargo run --example reserve_flow

use axum::{routing::get, Json, Router};
use chrono::{Local, NaiveTime};
use tokio::net::TcpListener;

use mizdooni_reserve::{
    AvailabilitySlot, ReserveConfig, ReserveFlow, ReserveView, RestaurantAddress,
    RestaurantContext,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let today = Local::now().date_naive();
    let tomorrow = today.succ_opt().unwrap();
    let slots = vec![
        AvailabilitySlot::new(today, NaiveTime::from_hms_opt(18, 0, 0).unwrap()),
        AvailabilitySlot::new(today, NaiveTime::from_hms_opt(19, 0, 0).unwrap()),
        AvailabilitySlot::new(tomorrow, NaiveTime::from_hms_opt(20, 0, 0).unwrap()),
    ];

    // In-process stand-in for the restaurant availability endpoint
    let app = Router::new().route(
        "/api/restaurant/available-times",
        get(move || async move { Json(slots) }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let context = RestaurantContext::new(
        4,
        RestaurantAddress {
            country: "Iran".to_string(),
            city: "Tehran".to_string(),
            street: "Enghelab St".to_string(),
        },
    );

    let mut flow = ReserveFlow::new(ReserveConfig::new(base_url).build_client(), context);
    flow.load().await;

    println!("Fresh form: {:?}", flow.view());

    flow.set_party_size(2);
    flow.set_date(today)?;
    match flow.view() {
        ReserveView::AvailableTimes { slots, notice } => {
            println!("Open times on {}:", today);
            for slot in &slots {
                println!("  {}", slot.time.format("%H:%M"));
            }
            println!("{}", notice);
        }
        other => println!("{:?}", other),
    }

    flow.set_time(NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    let handoff = flow.handoff().expect("all selections are present");
    println!(
        "Confirming table for {} at {}, {} — {}, {}, {}",
        handoff.party_size,
        handoff.date,
        handoff.time.format("%H:%M"),
        handoff.address.country,
        handoff.address.city,
        handoff.address.street,
    );

    // A date past the one-month ceiling is rejected with the ceiling cited
    let far = today.checked_add_months(chrono::Months::new(2)).unwrap();
    if let Err(rejected) = flow.set_date(far) {
        println!("Rejected {}: {}", far, rejected);
    }

    Ok(())
}
