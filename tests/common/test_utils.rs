use chrono::{NaiveDate, NaiveDateTime};
use flight_reservation_system::models::airport::Airport;
use flight_reservation_system::models::flight::Flight;
use flight_reservation_system::services::flight_service::FlightService;
use flight_reservation_system::utils::error::AppResult;
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static TRACING: OnceCell<()> = OnceCell::new();

// Install the tracing subscriber once per test binary
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("flight_reservation_system=debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn jfk() -> Airport {
    Airport::new("JFK", "John F Kennedy", "New York", "USA")
}

pub fn lhr() -> Airport {
    Airport::new("LHR", "Heathrow", "London", "UK")
}

pub fn cdg() -> Airport {
    Airport::new("CDG", "Charles de Gaulle", "Paris", "France")
}

pub fn dxb() -> Airport {
    Airport::new("DXB", "Dubai International", "Dubai", "UAE")
}

// Seed the sample catalog used by most tests
pub async fn seed_flights(flight_service: &FlightService) -> AppResult<()> {
    flight_service
        .add_flight(Flight::new(
            "FL101",
            jfk(),
            lhr(),
            datetime(2024, 11, 5, 10, 0),
            datetime(2024, 11, 5, 22, 0),
        ))
        .await?;
    flight_service
        .add_flight(Flight::new(
            "FL102",
            lhr(),
            cdg(),
            datetime(2024, 11, 5, 14, 0),
            datetime(2024, 11, 5, 16, 0),
        ))
        .await?;
    flight_service
        .add_flight(Flight::new(
            "FL103",
            jfk(),
            cdg(),
            datetime(2024, 11, 5, 11, 0),
            datetime(2024, 11, 5, 23, 0),
        ))
        .await?;
    flight_service
        .add_flight(Flight::new(
            "FL104",
            cdg(),
            dxb(),
            datetime(2024, 11, 6, 9, 0),
            datetime(2024, 11, 6, 18, 0),
        ))
        .await?;

    Ok(())
}
