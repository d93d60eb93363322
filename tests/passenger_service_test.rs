use async_trait::async_trait;
use flight_reservation_system::{
    models::passenger::{Passenger, PassengerRegistration},
    services::passenger_service::PassengerService,
    store::BookingStore,
    utils::error::AppError,
};
use test_context::{test_context, AsyncTestContext};

mod common {
    pub mod test_utils;
}
use common::test_utils;

struct PassengerServiceContext {
    store: BookingStore,
    passenger_service: PassengerService,
}

#[async_trait]
impl AsyncTestContext for PassengerServiceContext {
    async fn setup() -> Self {
        test_utils::init_tracing();

        let store = BookingStore::new();
        let passenger_service = PassengerService::new(store.clone());

        PassengerServiceContext {
            store,
            passenger_service,
        }
    }

    async fn teardown(self) {}
}

fn registration(name: &str, email: &str, phone: &str) -> PassengerRegistration {
    PassengerRegistration {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    }
}

#[test_context(PassengerServiceContext)]
#[tokio::test]
async fn test_register_passenger_success(ctx: &PassengerServiceContext) -> Result<(), AppError> {
    let passenger = ctx
        .passenger_service
        .register_passenger(registration(
            "Alice Smith",
            "alice@example.com",
            "15551234567",
        ))
        .await?;

    assert_eq!(passenger.passenger_id, "P1");
    assert_eq!(passenger.name, "Alice Smith");
    assert!(passenger.ticket_numbers().is_empty());

    let stored = ctx.store.passenger("P1").await.expect("Passenger not stored");
    assert_eq!(stored.email, "alice@example.com");
    assert_eq!(stored.phone, "15551234567");

    Ok(())
}

#[test_context(PassengerServiceContext)]
#[tokio::test]
async fn test_register_assigns_sequential_ids(
    ctx: &PassengerServiceContext,
) -> Result<(), AppError> {
    let first = ctx
        .passenger_service
        .register_passenger(registration("Alice Smith", "alice@example.com", "15551234567"))
        .await?;
    let second = ctx
        .passenger_service
        .register_passenger(registration("Bob Jones", "bob@example.com", "15557654321"))
        .await?;

    assert_eq!(first.passenger_id, "P1");
    assert_eq!(second.passenger_id, "P2");

    Ok(())
}

#[test_context(PassengerServiceContext)]
#[tokio::test]
async fn test_register_rejects_invalid_email(ctx: &PassengerServiceContext) -> Result<(), AppError> {
    let result = ctx
        .passenger_service
        .register_passenger(registration("Alice Smith", "not-an-email", "15551234567"))
        .await;

    match result {
        Err(AppError::ValidationError(_)) => Ok(()),
        other => panic!("Expected validation error for bad email, got {:?}", other),
    }
}

#[test_context(PassengerServiceContext)]
#[tokio::test]
async fn test_register_rejects_empty_name(ctx: &PassengerServiceContext) -> Result<(), AppError> {
    let result = ctx
        .passenger_service
        .register_passenger(registration("", "alice@example.com", "15551234567"))
        .await;

    match result {
        Err(AppError::ValidationError(_)) => Ok(()),
        other => panic!("Expected validation error for empty name, got {:?}", other),
    }
}

#[test_context(PassengerServiceContext)]
#[tokio::test]
async fn test_register_rejects_short_phone(ctx: &PassengerServiceContext) -> Result<(), AppError> {
    let result = ctx
        .passenger_service
        .register_passenger(registration("Alice Smith", "alice@example.com", "123"))
        .await;

    match result {
        Err(AppError::ValidationError(_)) => Ok(()),
        other => panic!("Expected validation error for short phone, got {:?}", other),
    }
}

#[test_context(PassengerServiceContext)]
#[tokio::test]
async fn test_add_passenger_and_lookup(ctx: &PassengerServiceContext) -> Result<(), AppError> {
    let passenger = Passenger::new("FREQ-42", "Carol White", "carol@example.com", "15550001111");
    ctx.passenger_service.add_passenger(passenger).await?;

    let stored = ctx
        .store
        .passenger("FREQ-42")
        .await
        .expect("Passenger not stored");
    assert_eq!(stored.name, "Carol White");

    Ok(())
}

#[test_context(PassengerServiceContext)]
#[tokio::test]
async fn test_add_passenger_duplicate_conflict(
    ctx: &PassengerServiceContext,
) -> Result<(), AppError> {
    let passenger = Passenger::new("FREQ-42", "Carol White", "carol@example.com", "15550001111");
    ctx.passenger_service.add_passenger(passenger.clone()).await?;

    let result = ctx.passenger_service.add_passenger(passenger).await;

    match result {
        Err(AppError::Conflict(_)) => Ok(()),
        other => panic!("Expected conflict for duplicate passenger, got {:?}", other),
    }
}
