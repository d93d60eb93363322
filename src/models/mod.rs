pub mod airport;
pub mod flight;
pub mod passenger;
pub mod payment;
pub mod ticket;
