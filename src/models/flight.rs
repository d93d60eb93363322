use crate::models::airport::Airport;
use crate::utils::error::AppError;
use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use strum_macros::Display;

pub const SEAT_ROWS: u8 = 30;
pub const SEAT_LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

// Seat identifier, e.g. "12A". Only rows 1..=30 and letters A-F are valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeatId {
    row: u8,
    letter: char,
}

impl SeatId {
    pub fn new(row: u8, letter: char) -> Result<Self, AppError> {
        let letter = letter.to_ascii_uppercase();
        if row == 0 || row > SEAT_ROWS || !SEAT_LETTERS.contains(&letter) {
            return Err(AppError::ValidationError(format!(
                "Seat {}{} is outside the cabin layout",
                row, letter
            )));
        }
        Ok(SeatId { row, letter })
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn letter(&self) -> char {
        self.letter
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}

impl FromStr for SeatId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let letter = s
            .chars()
            .last()
            .ok_or_else(|| AppError::ValidationError("Seat id is empty".into()))?;
        let row = s[..s.len() - letter.len_utf8()]
            .parse::<u8>()
            .map_err(|_| AppError::ValidationError(format!("Invalid seat id '{}'", s)))?;
        SeatId::new(row, letter)
    }
}

// Seat Status Enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SeatStatus {
    Available,
    Booked,
}

#[derive(Debug, Clone)]
pub struct Flight {
    pub flight_number: String,
    pub origin: Airport,
    pub destination: Airport,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    // Seat state is private: book_seat is the only mutation path
    seats: IndexMap<SeatId, SeatStatus>,
}

impl Flight {
    pub fn new(
        flight_number: &str,
        origin: Airport,
        destination: Airport,
        departure_time: NaiveDateTime,
        arrival_time: NaiveDateTime,
    ) -> Self {
        Flight {
            flight_number: flight_number.to_string(),
            origin,
            destination,
            departure_time,
            arrival_time,
            seats: Self::initialize_seats(),
        }
    }

    fn initialize_seats() -> IndexMap<SeatId, SeatStatus> {
        let mut seats = IndexMap::new();
        for row in 1..=SEAT_ROWS {
            for letter in SEAT_LETTERS {
                seats.insert(SeatId { row, letter }, SeatStatus::Available);
            }
        }
        seats
    }

    pub fn is_seat_available(&self, seat: &SeatId) -> bool {
        matches!(self.seats.get(seat), Some(SeatStatus::Available))
    }

    // Marks the seat as booked if it is still available. Returns false and
    // leaves the map untouched when the seat is unknown or already taken.
    pub fn book_seat(&mut self, seat: &SeatId) -> bool {
        match self.seats.get_mut(seat) {
            Some(status) if *status == SeatStatus::Available => {
                *status = SeatStatus::Booked;
                true
            }
            _ => false,
        }
    }

    // Snapshot of the currently open seats, not a live view
    pub fn available_seats(&self) -> Vec<SeatId> {
        self.seats
            .iter()
            .filter(|(_, status)| **status == SeatStatus::Available)
            .map(|(seat, _)| seat.clone())
            .collect()
    }

    pub fn available_seat_count(&self) -> usize {
        self.seats
            .values()
            .filter(|status| **status == SeatStatus::Available)
            .count()
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }
}

// Single flight entry in the search results
#[derive(Debug, Clone, Serialize)]
pub struct FlightSummary {
    pub flight_number: String,
    pub origin_code: String,
    pub departure_city: String,
    pub destination_code: String,
    pub destination_city: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub available_seats: usize,
}

impl FlightSummary {
    pub fn from_flight(flight: &Flight) -> Self {
        FlightSummary {
            flight_number: flight.flight_number.clone(),
            origin_code: flight.origin.code.clone(),
            departure_city: flight.origin.city.clone(),
            destination_code: flight.destination.code.clone(),
            destination_city: flight.destination.city.clone(),
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            available_seats: flight.available_seat_count(),
        }
    }
}
