use crate::config::BookingConfig;
use crate::models::flight::SeatId;
use crate::models::payment::Payment;
use crate::models::ticket::{BookingRequest, Ticket, TicketDetails};
use crate::store::BookingStore;
use crate::utils::error::{AppError, AppResult};
use tracing::{info, warn};

#[derive(Clone)]
pub struct BookingService {
    store: BookingStore,
    config: BookingConfig,
}

impl BookingService {
    pub fn new(store: BookingStore) -> Self {
        Self::with_config(store, BookingConfig::default())
    }

    pub fn with_config(store: BookingStore, config: BookingConfig) -> Self {
        BookingService { store, config }
    }

    // The core booking transaction. Lookup, seat check, payment, seat commit
    // and ticket issue run as one critical section under the store's write
    // lock, so concurrent requests for the same seat serialize and exactly
    // one of them wins.
    pub async fn book_flight(&self, request: BookingRequest) -> AppResult<Ticket> {
        let seat: SeatId = request.seat.parse()?;

        let mut state = self.store.write().await;

        if !state.passengers.contains_key(&request.passenger_id) {
            return Err(AppError::NotFound(format!(
                "Passenger {} not found",
                request.passenger_id
            )));
        }

        let flight = state.flight_mut(&request.flight_number)?;

        // Availability is checked before the payment is created, so nothing
        // is charged for a seat that cannot be reserved
        if !flight.is_seat_available(&seat) {
            return Err(AppError::Conflict(format!(
                "Seat {} is not available on flight {}",
                seat, request.flight_number
            )));
        }

        let mut payment = Payment::new(self.config.base_fare, request.payment_method);
        if !payment.process() {
            return Err(AppError::PaymentFailed(format!(
                "Payment via {} was declined",
                request.payment_method
            )));
        }

        // Commit point: book_seat re-checks and flips under the same lock
        if !flight.book_seat(&seat) {
            warn!(
                flight_number = %request.flight_number,
                seat = %seat,
                "seat was taken at commit time"
            );
            return Err(AppError::Conflict(format!(
                "Seat {} was taken before the booking completed",
                seat
            )));
        }

        let ticket_number = state.next_ticket_number();
        let ticket = Ticket::issue(
            ticket_number.clone(),
            request.flight_number.clone(),
            request.passenger_id.clone(),
            seat,
            payment,
        );

        state.tickets.insert(ticket_number.clone(), ticket.clone());
        state
            .passenger_mut(&request.passenger_id)?
            .add_ticket(ticket_number);

        info!(
            ticket_number = %ticket.ticket_number,
            flight_number = %ticket.flight_number,
            passenger_id = %ticket.passenger_id,
            seat = %ticket.seat,
            "ticket issued"
        );

        Ok(ticket)
    }

    // The passenger's tickets in booking order, joined with flight data
    pub async fn booking_history(&self, passenger_id: &str) -> AppResult<Vec<TicketDetails>> {
        let state = self.store.read().await;
        let passenger = state.passenger(passenger_id)?;

        let mut history = Vec::with_capacity(passenger.ticket_numbers().len());
        for ticket_number in passenger.ticket_numbers() {
            let ticket = state.ticket(ticket_number)?;
            let flight = state.flight(&ticket.flight_number)?;
            history.push(TicketDetails::new(ticket, flight, passenger));
        }

        Ok(history)
    }

    pub async fn ticket_details(&self, ticket_number: &str) -> AppResult<TicketDetails> {
        let state = self.store.read().await;
        let ticket = state.ticket(ticket_number)?;
        let flight = state.flight(&ticket.flight_number)?;
        let passenger = state.passenger(&ticket.passenger_id)?;
        Ok(TicketDetails::new(ticket, flight, passenger))
    }
}
