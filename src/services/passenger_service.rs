use crate::models::passenger::{Passenger, PassengerRegistration};
use crate::store::BookingStore;
use crate::utils::error::{AppError, AppResult};
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct PassengerService {
    store: BookingStore,
}

impl PassengerService {
    pub fn new(store: BookingStore) -> Self {
        PassengerService { store }
    }

    // Register a new passenger. The registry assigns the next sequential id.
    pub async fn register_passenger(&self, request: PassengerRegistration) -> AppResult<Passenger> {
        request.validate()?;

        let mut state = self.store.write().await;
        let passenger_id = format!("P{}", state.passengers.len() + 1);

        let passenger = Passenger::new(&passenger_id, &request.name, &request.email, &request.phone);
        state
            .passengers
            .insert(passenger_id.clone(), passenger.clone());

        info!(passenger_id = %passenger_id, "passenger registered");
        Ok(passenger)
    }

    // Register a pre-built passenger under its own id
    pub async fn add_passenger(&self, passenger: Passenger) -> AppResult<()> {
        let mut state = self.store.write().await;

        if state.passengers.contains_key(&passenger.passenger_id) {
            return Err(AppError::Conflict(format!(
                "Passenger {} already exists",
                passenger.passenger_id
            )));
        }

        state
            .passengers
            .insert(passenger.passenger_id.clone(), passenger);
        Ok(())
    }
}
