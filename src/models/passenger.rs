use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize)]
pub struct Passenger {
    pub passenger_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    // Ticket numbers in booking order; tickets themselves live in the store
    tickets: Vec<String>,
}

impl Passenger {
    pub fn new(passenger_id: &str, name: &str, email: &str, phone: &str) -> Self {
        Passenger {
            passenger_id: passenger_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            tickets: Vec::new(),
        }
    }

    pub fn add_ticket(&mut self, ticket_number: String) {
        self.tickets.push(ticket_number);
    }

    pub fn ticket_numbers(&self) -> &[String] {
        &self.tickets
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct PassengerRegistration {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 7, message = "Phone number is too short"))]
    pub phone: String,
}
