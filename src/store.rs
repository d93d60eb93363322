use crate::models::flight::Flight;
use crate::models::passenger::Passenger;
use crate::models::ticket::Ticket;
use crate::utils::error::{AppError, AppResult};
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

// In-memory registry shared by all services. Cloning is cheap and clones
// share the same underlying state, so a store can be handed to each service
// the way a connection pool would be.
#[derive(Debug, Clone, Default)]
pub struct BookingStore {
    state: Arc<RwLock<RegistryState>>,
}

// Flights, passengers and tickets keyed by their registry ids, all in
// insertion order. The write lock is the transaction boundary for bookings.
#[derive(Debug, Default)]
pub(crate) struct RegistryState {
    pub(crate) flights: IndexMap<String, Flight>,
    pub(crate) passengers: IndexMap<String, Passenger>,
    pub(crate) tickets: IndexMap<String, Ticket>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().await
    }

    // Display accessors: owned snapshots of single records

    pub async fn flight(&self, flight_number: &str) -> Option<Flight> {
        self.read().await.flights.get(flight_number).cloned()
    }

    pub async fn passenger(&self, passenger_id: &str) -> Option<Passenger> {
        self.read().await.passengers.get(passenger_id).cloned()
    }

    pub async fn ticket(&self, ticket_number: &str) -> Option<Ticket> {
        self.read().await.tickets.get(ticket_number).cloned()
    }

    pub async fn ticket_count(&self) -> usize {
        self.read().await.tickets.len()
    }
}

impl RegistryState {
    pub(crate) fn flight(&self, flight_number: &str) -> AppResult<&Flight> {
        self.flights
            .get(flight_number)
            .ok_or_else(|| AppError::NotFound(format!("Flight {} not found", flight_number)))
    }

    pub(crate) fn flight_mut(&mut self, flight_number: &str) -> AppResult<&mut Flight> {
        self.flights
            .get_mut(flight_number)
            .ok_or_else(|| AppError::NotFound(format!("Flight {} not found", flight_number)))
    }

    pub(crate) fn passenger(&self, passenger_id: &str) -> AppResult<&Passenger> {
        self.passengers
            .get(passenger_id)
            .ok_or_else(|| AppError::NotFound(format!("Passenger {} not found", passenger_id)))
    }

    pub(crate) fn passenger_mut(&mut self, passenger_id: &str) -> AppResult<&mut Passenger> {
        self.passengers
            .get_mut(passenger_id)
            .ok_or_else(|| AppError::NotFound(format!("Passenger {} not found", passenger_id)))
    }

    pub(crate) fn ticket(&self, ticket_number: &str) -> AppResult<&Ticket> {
        self.tickets
            .get(ticket_number)
            .ok_or_else(|| AppError::NotFound(format!("Ticket {} not found", ticket_number)))
    }

    // Ticket numbers are sequential, derived from the current ticket count.
    // Must be called under the write lock that also inserts the ticket.
    pub(crate) fn next_ticket_number(&self) -> String {
        format!("TKT{}", self.tickets.len() + 1)
    }
}
