use crate::models::flight::{Flight, SeatId};
use crate::models::passenger::Passenger;
use crate::models::payment::{Payment, PaymentMethod, PaymentStatus};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

// Ticket Status Enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TicketStatus {
    Confirmed,
    Pending,
}

// Proof of a completed booking. Flight and passenger are referenced by key,
// their lifetimes belong to the store. Immutable once issued.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub ticket_number: String,
    pub flight_number: String,
    pub passenger_id: String,
    pub seat: SeatId,
    pub payment: Payment,
    pub status: TicketStatus,
}

impl Ticket {
    pub fn issue(
        ticket_number: String,
        flight_number: String,
        passenger_id: String,
        seat: SeatId,
        payment: Payment,
    ) -> Self {
        let status = if payment.status() == PaymentStatus::Completed {
            TicketStatus::Confirmed
        } else {
            TicketStatus::Pending
        };

        Ticket {
            ticket_number,
            flight_number,
            passenger_id,
            seat,
            payment,
            status,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub passenger_id: String,
    pub flight_number: String,
    pub seat: String,
    pub payment_method: PaymentMethod,
}

// Display projection of a ticket for the booking confirmation and history
#[derive(Debug, Clone, Serialize)]
pub struct TicketDetails {
    pub ticket_number: String,
    pub passenger_name: String,
    pub flight_number: String,
    pub departure_city: String,
    pub destination_city: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub seat: String,
    pub status: TicketStatus,
}

impl TicketDetails {
    pub fn new(ticket: &Ticket, flight: &Flight, passenger: &Passenger) -> Self {
        TicketDetails {
            ticket_number: ticket.ticket_number.clone(),
            passenger_name: passenger.name.clone(),
            flight_number: flight.flight_number.clone(),
            departure_city: flight.origin.city.clone(),
            destination_city: flight.destination.city.clone(),
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            seat: ticket.seat.to_string(),
            status: ticket.status,
        }
    }
}
