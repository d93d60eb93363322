use crate::models::flight::{Flight, FlightSummary, SeatId};
use crate::store::BookingStore;
use crate::utils::error::{AppError, AppResult};
use tracing::info;

#[derive(Clone)]
pub struct FlightService {
    store: BookingStore,
}

impl FlightService {
    pub fn new(store: BookingStore) -> Self {
        FlightService { store }
    }

    // Register a flight under its flight number
    pub async fn add_flight(&self, flight: Flight) -> AppResult<()> {
        let mut state = self.store.write().await;

        if state.flights.contains_key(&flight.flight_number) {
            return Err(AppError::Conflict(format!(
                "Flight {} already exists",
                flight.flight_number
            )));
        }

        info!(flight_number = %flight.flight_number, "flight added to catalog");
        state.flights.insert(flight.flight_number.clone(), flight);
        Ok(())
    }

    // Search flights by route. Case-insensitive exact match on both cities,
    // results in catalog order; no match is an empty list, not an error.
    pub async fn search_flights(
        &self,
        departure_city: &str,
        destination_city: &str,
    ) -> AppResult<Vec<FlightSummary>> {
        let state = self.store.read().await;

        let flights = state
            .flights
            .values()
            .filter(|flight| {
                flight.origin.city.eq_ignore_ascii_case(departure_city)
                    && flight.destination.city.eq_ignore_ascii_case(destination_city)
            })
            .map(FlightSummary::from_flight)
            .collect();

        Ok(flights)
    }

    // Snapshot of the open seats on a flight
    pub async fn available_seats(&self, flight_number: &str) -> AppResult<Vec<SeatId>> {
        let state = self.store.read().await;
        Ok(state.flight(flight_number)?.available_seats())
    }

    pub async fn is_seat_available(&self, flight_number: &str, seat: &SeatId) -> AppResult<bool> {
        let state = self.store.read().await;
        Ok(state.flight(flight_number)?.is_seat_available(seat))
    }
}
