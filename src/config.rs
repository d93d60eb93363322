use dotenv::dotenv;
use rust_decimal::Decimal;
use std::env;

// Booking parameters. The fare is fixed per booking in this simulation.
#[derive(Debug, Clone)]
pub struct BookingConfig {
    pub base_fare: Decimal,
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig {
            base_fare: Decimal::new(200, 0),
        }
    }
}

impl BookingConfig {
    // Reads BASE_FARE from the environment, falling back to the default
    pub fn from_env() -> Self {
        dotenv().ok();

        let base_fare = env::var("BASE_FARE")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| Self::default().base_fare);

        BookingConfig { base_fare }
    }
}
